//! Per-request unikalization settings.

use serde::{Deserialize, Serialize};

/// Number of copies produced when the request does not say otherwise.
pub const DEFAULT_COPIES: u32 = 1;

/// Immutable per-request configuration: how many output variants to
/// produce and which effects may be perturbed.
///
/// The nine toggles are independent; each enabled effect is sampled and
/// applied on its own, fresh per copy. Field names are camelCase on the
/// wire to match the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessSettings {
    pub copies: u32,
    pub brightness: bool,
    pub contrast: bool,
    pub saturation: bool,
    pub mirror: bool,
    pub rotation: bool,
    pub zoom: bool,
    pub audio_speed: bool,
    pub audio_volume: bool,
    pub audio_pitch: bool,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            copies: DEFAULT_COPIES,
            brightness: false,
            contrast: false,
            saturation: false,
            mirror: false,
            rotation: false,
            zoom: false,
            audio_speed: false,
            audio_volume: false,
            audio_pitch: false,
        }
    }
}

impl ProcessSettings {
    /// Settings with the given copy count and all effects disabled.
    pub fn with_copies(copies: u32) -> Self {
        Self {
            copies,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_copy_no_effects() {
        let settings = ProcessSettings::default();
        assert_eq!(settings.copies, DEFAULT_COPIES);
        assert!(!settings.brightness);
        assert!(!settings.audio_pitch);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let settings: ProcessSettings = serde_json::from_str(
            r#"{"copies":3,"audioSpeed":true,"audioPitch":true,"mirror":true}"#,
        )
        .unwrap();
        assert_eq!(settings.copies, 3);
        assert!(settings.audio_speed);
        assert!(settings.audio_pitch);
        assert!(settings.mirror);
        assert!(!settings.audio_volume);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_string(&ProcessSettings::default()).unwrap();
        assert!(json.contains("\"audioVolume\":false"));
        assert!(json.contains("\"copies\":1"));
    }
}
