//! Randomized unikalization filter chains.
//!
//! [`build_filter_plan`] turns a settings object plus one sampling pass
//! into ordered video and audio filter chains and a human-readable log
//! line. Pure computation, no error conditions. Evaluation order is
//! fixed: filters are concatenated and applied in sequence by FFmpeg,
//! so later filters operate on the output of earlier ones.

use uniq_models::ProcessSettings;

use crate::sample::Sampler;

/// Sentinel log line when no effect toggle produced a filter.
pub const NO_FILTERS: &str = "No filters";

/// Base sample rate assumed by the pitch-shift trick. Valid for most
/// sources even when the real rate differs.
pub const PITCH_BASE_RATE: u32 = 44100;

/// Ordered filter expressions and log fragments for a single copy.
#[derive(Debug, Clone, Default)]
pub struct FilterPlan {
    video: Vec<String>,
    audio: Vec<String>,
    log: Vec<String>,
}

impl FilterPlan {
    /// Comma-joined video filter chain, `None` when no video filter applies.
    pub fn video_chain(&self) -> Option<String> {
        if self.video.is_empty() {
            None
        } else {
            Some(self.video.join(","))
        }
    }

    /// Comma-joined audio filter chain, `None` when no audio filter applies.
    pub fn audio_chain(&self) -> Option<String> {
        if self.audio.is_empty() {
            None
        } else {
            Some(self.audio.join(","))
        }
    }

    /// Human-readable summary of the applied parameters.
    pub fn describe(&self) -> String {
        if self.log.is_empty() {
            NO_FILTERS.to_string()
        } else {
            self.log.join(", ")
        }
    }
}

/// Build the filter plan for one copy from one sampling pass.
pub fn build_filter_plan(settings: &ProcessSettings, sampler: &dyn Sampler) -> FilterPlan {
    let mut plan = FilterPlan::default();

    // 1. eq combines brightness, contrast and saturation into a single
    // filter; disabled components keep their neutral values.
    let mut b = 0.0;
    let mut c = 1.0;
    let mut s = 1.0;
    if settings.brightness {
        b = sampler.uniform(-0.08, 0.08);
    }
    if settings.contrast {
        c = sampler.uniform(0.9, 1.1);
    }
    if settings.saturation {
        s = sampler.uniform(0.9, 1.1);
    }
    if settings.brightness || settings.contrast || settings.saturation {
        plan.video
            .push(format!("eq=brightness={b:.3}:contrast={c:.3}:saturation={s:.3}"));
        plan.log.push(format!("EQ(b:{b:.2}, c:{c:.2}, s:{s:.2})"));
    }

    // 2. Rotation: sampled in degrees, rotate takes radians. Corners
    // fill with black at these small angles.
    if settings.rotation {
        let deg = sampler.uniform(-2.0, 2.0);
        let rad = deg.to_radians();
        plan.video.push(format!("rotate={rad:.4}"));
        plan.log.push(format!("Rot({deg:.1}deg)"));
    }

    // 3. Zoom: scale up slightly, then crop back to the original
    // dimensions around the center.
    if settings.zoom {
        let factor = sampler.uniform(1.01, 1.05);
        plan.video
            .push(format!("scale=iw*{factor:.3}:ih*{factor:.3},crop=iw:ih"));
        plan.log.push(format!("Zoom({:.1}%)", (factor - 1.0) * 100.0));
    }

    // 4. Mirror: the toggle arms it, a second coin flip decides per copy.
    if settings.mirror && sampler.coin_flip() {
        plan.video.push("hflip".to_string());
        plan.log.push("Mirror(H)".to_string());
    }

    // 5. Volume
    if settings.audio_volume {
        let vol = sampler.uniform(0.9, 1.1);
        plan.audio.push(format!("volume={vol:.2}"));
        plan.log.push(format!("Vol({vol:.2})"));
    }

    // 6. Speed (atempo)
    if settings.audio_speed {
        let tempo = sampler.uniform(0.98, 1.02);
        plan.audio.push(format!("atempo={tempo:.3}"));
        plan.log.push(format!("Spd({tempo:.2})"));
    }

    // 7. Pitch via the resample-rate trick. Retuning the sample rate
    // also stretches duration inversely to pitch; kept uncompensated.
    if settings.audio_pitch {
        let pitch = sampler.uniform(0.97, 1.03);
        plan.audio
            .push(format!("asetrate={PITCH_BASE_RATE}*{pitch:.3}"));
        plan.audio.push(format!("aresample={PITCH_BASE_RATE}"));
        plan.log.push(format!("Pitch({pitch:.2})"));
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ScriptedSampler, ThreadRngSampler};

    fn parse_eq_component(chain: &str, key: &str) -> f64 {
        let start = chain.find(key).expect("component present") + key.len();
        chain[start..]
            .split([':', ','])
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn all_toggles_off_produces_no_filters() {
        let settings = ProcessSettings::default();
        let plan = build_filter_plan(&settings, &ThreadRngSampler);

        assert!(plan.video_chain().is_none());
        assert!(plan.audio_chain().is_none());
        assert_eq!(plan.describe(), NO_FILTERS);
    }

    #[test]
    fn brightness_only_keeps_neutral_contrast_and_saturation() {
        let settings = ProcessSettings {
            brightness: true,
            ..Default::default()
        };
        let plan = build_filter_plan(&settings, &ThreadRngSampler);

        let chain = plan.video_chain().expect("eq filter emitted");
        assert!(chain.contains("contrast=1.000"));
        assert!(chain.contains("saturation=1.000"));

        let b = parse_eq_component(&chain, "brightness=");
        assert!((-0.08..=0.08).contains(&b), "brightness {b} out of range");

        assert!(plan.describe().contains("EQ("));
        assert!(plan.audio_chain().is_none());
    }

    #[test]
    fn rotation_converts_degrees_to_radians() {
        let settings = ProcessSettings {
            rotation: true,
            ..Default::default()
        };
        // 1.5 deg * pi / 180 = 0.02617..., rendered with 4 decimals.
        let sampler = ScriptedSampler::new([1.5], []);
        let plan = build_filter_plan(&settings, &sampler);

        assert_eq!(plan.video_chain().unwrap(), "rotate=0.0262");
        assert_eq!(plan.describe(), "Rot(1.5deg)");
    }

    #[test]
    fn zoom_scales_then_crops_back_to_original() {
        let settings = ProcessSettings {
            zoom: true,
            ..Default::default()
        };
        let sampler = ScriptedSampler::new([1.02], []);
        let plan = build_filter_plan(&settings, &sampler);

        assert_eq!(
            plan.video_chain().unwrap(),
            "scale=iw*1.020:ih*1.020,crop=iw:ih"
        );
        assert!(plan.describe().contains("Zoom(2.0%)"));
    }

    #[test]
    fn mirror_toggle_needs_winning_coin_flip() {
        let settings = ProcessSettings {
            mirror: true,
            ..Default::default()
        };

        let tails = ScriptedSampler::new([], [false]);
        let plan = build_filter_plan(&settings, &tails);
        assert!(plan.video_chain().is_none());
        assert_eq!(plan.describe(), NO_FILTERS);

        let heads = ScriptedSampler::new([], [true]);
        let plan = build_filter_plan(&settings, &heads);
        assert_eq!(plan.video_chain().unwrap(), "hflip");
        assert_eq!(plan.describe(), "Mirror(H)");
    }

    #[test]
    fn audio_effects_chain_in_fixed_order() {
        let settings = ProcessSettings {
            audio_volume: true,
            audio_speed: true,
            audio_pitch: true,
            ..Default::default()
        };
        let sampler = ScriptedSampler::new([1.05, 1.01, 0.98], []);
        let plan = build_filter_plan(&settings, &sampler);

        assert_eq!(
            plan.audio_chain().unwrap(),
            "volume=1.05,atempo=1.010,asetrate=44100*0.980,aresample=44100"
        );
        assert_eq!(plan.describe(), "Vol(1.05), Spd(1.01), Pitch(0.98)");
        assert!(plan.video_chain().is_none());
    }

    #[test]
    fn repeated_runs_draw_independent_values() {
        let settings = ProcessSettings {
            brightness: true,
            contrast: true,
            saturation: true,
            ..Default::default()
        };
        // Non-deterministic by design: assert range membership only.
        for _ in 0..20 {
            let plan = build_filter_plan(&settings, &ThreadRngSampler);
            let chain = plan.video_chain().unwrap();
            let c = parse_eq_component(&chain, "contrast=");
            let s = parse_eq_component(&chain, "saturation=");
            assert!((0.9..=1.1).contains(&c));
            assert!((0.9..=1.1).contains(&s));
        }
    }
}
