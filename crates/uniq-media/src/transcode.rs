//! Transcoder abstraction over the external FFmpeg binary.
//!
//! The pipeline only needs a narrow seam: apply optional video/audio
//! filter chains to an input file and write the result. Keeping it a
//! trait lets tests run the whole pipeline without a media engine.

use std::path::Path;

use async_trait::async_trait;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Applies filter chains to a media file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Transcode `input` into `output`, applying the given filter
    /// chains. Resolves on successful completion of the external
    /// process, rejects with the underlying error otherwise.
    async fn apply(
        &self,
        input: &Path,
        video_filter: Option<&str>,
        audio_filter: Option<&str>,
        output: &Path,
    ) -> MediaResult<()>;
}

/// Transcoder shelling out to the `ffmpeg` binary on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegTranscoder;

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn apply(
        &self,
        input: &Path,
        video_filter: Option<&str>,
        audio_filter: Option<&str>,
        output: &Path,
    ) -> MediaResult<()> {
        let mut cmd = FfmpegCommand::new(input, output);
        if let Some(vf) = video_filter {
            cmd = cmd.video_filter(vf);
        }
        if let Some(af) = audio_filter {
            cmd = cmd.audio_filter(af);
        }
        FfmpegRunner::new().run(&cmd).await
    }
}
