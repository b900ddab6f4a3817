//! Single-copy job runner.

use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use uniq_models::{GeneratedFileInfo, ProcessSettings};

use crate::error::MediaResult;
use crate::filters::build_filter_plan;
use crate::sample::Sampler;
use crate::transcode::Transcoder;

/// Shared inputs for every copy of one batch.
#[derive(Debug, Clone, Copy)]
pub struct CopyContext<'a> {
    /// Saved source file to perturb.
    pub input: &'a Path,
    /// Directory receiving generated files.
    pub output_dir: &'a Path,
    /// Original upload name, used only for extension derivation.
    pub original_name: &'a str,
    /// Public URL root the output directory is served under.
    pub url_base: &'a str,
}

/// Generate one perturbed copy of the source file.
///
/// Draws a fresh filter plan, invokes the transcoder and resolves with
/// the copy metadata. A failed transcode rejects with the underlying
/// error untouched; a partial output file may remain on disk in that
/// case. `index` is used for diagnostics only.
pub async fn create_unique_copy(
    transcoder: &dyn Transcoder,
    ctx: CopyContext<'_>,
    settings: &ProcessSettings,
    sampler: &dyn Sampler,
    index: u32,
) -> MediaResult<GeneratedFileInfo> {
    let id = copy_id();
    let filename = output_filename(&id, ctx.original_name);
    let output = ctx.output_dir.join(&filename);

    let plan = build_filter_plan(settings, sampler);
    debug!(copy = index, filters = %plan.describe(), "applying filter plan");

    transcoder
        .apply(
            ctx.input,
            plan.video_chain().as_deref(),
            plan.audio_chain().as_deref(),
            &output,
        )
        .await?;

    info!(copy = index, file = %filename, "copy complete");

    let url = format!("{}/{}", ctx.url_base.trim_end_matches('/'), filename);
    Ok(GeneratedFileInfo {
        id,
        filename,
        url,
        filters: plan.describe(),
    })
}

/// Opaque copy id: `copy_` plus the first 8 hex chars of a v4 UUID.
fn copy_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("copy_{}", &uuid[..8])
}

/// Output filename keeps the original extension so the container
/// passes through unchanged.
fn output_filename(id: &str, original_name: &str) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_id_has_expected_shape() {
        let id = copy_id();
        assert!(id.starts_with("copy_"));
        assert_eq!(id.len(), "copy_".len() + 8);
        assert!(id["copy_".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn copy_ids_are_unique() {
        assert_ne!(copy_id(), copy_id());
    }

    #[test]
    fn output_filename_preserves_extension() {
        assert_eq!(output_filename("copy_ab12cd34", "clip.mp4"), "copy_ab12cd34.mp4");
        assert_eq!(output_filename("copy_ab12cd34", "video.final.MOV"), "copy_ab12cd34.MOV");
    }

    #[test]
    fn output_filename_without_extension() {
        assert_eq!(output_filename("copy_ab12cd34", "rawclip"), "copy_ab12cd34");
    }
}
