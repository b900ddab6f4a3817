//! Generated copy metadata.

use serde::{Deserialize, Serialize};

/// Result record for one successfully generated copy.
///
/// Created once per completed transcode and immutable afterwards. The
/// file itself lives under the output directory for the lifetime of the
/// process; no expiry or cleanup applies here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFileInfo {
    /// Opaque unique id of this copy.
    pub id: String,
    /// Output filename, original extension preserved.
    pub filename: String,
    /// Public retrieval URL under the static output root.
    pub url: String,
    /// Human-readable description of the applied filters,
    /// or "No filters" when no effect was active.
    pub filters: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let info = GeneratedFileInfo {
            id: "copy_a1b2c3d4".to_string(),
            filename: "copy_a1b2c3d4.mp4".to_string(),
            url: "http://localhost:4000/output/copy_a1b2c3d4.mp4".to_string(),
            filters: "Mirror(H)".to_string(),
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: GeneratedFileInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
