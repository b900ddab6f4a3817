//! Batch orchestration for unikalized copies.
//!
//! Copies run through a bounded worker pool, one permit by default, so
//! each transcode starts only after the previous one resolved or
//! rejected. That caps concurrent FFmpeg load per request; separate
//! requests still run independently of each other.

use std::path::Path;
use std::sync::Arc;

use futures_util::{stream, StreamExt};
use tracing::{error, info};

use uniq_models::{GeneratedFileInfo, ProcessSettings};

use crate::copy::{create_unique_copy, CopyContext};
use crate::error::{MediaError, MediaResult};
use crate::sample::{Sampler, ThreadRngSampler};
use crate::transcode::Transcoder;

/// One failed copy attempt, kept for diagnostics. The external
/// contract exposes successes only.
#[derive(Debug)]
pub struct CopyFailure {
    /// Zero-based index of the attempt within the batch.
    pub index: u32,
    pub error: MediaError,
}

/// Outcome of one batch: successes in request order, plus whatever
/// failed along the way. The batch itself never fails over individual
/// copies, even when every copy failed.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub copies: Vec<GeneratedFileInfo>,
    pub failures: Vec<CopyFailure>,
}

impl BatchOutcome {
    /// True when every requested copy completed.
    pub fn is_full_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs copy jobs against a transcoder with bounded concurrency.
pub struct BatchProcessor {
    transcoder: Arc<dyn Transcoder>,
    sampler: Arc<dyn Sampler>,
    max_concurrent: usize,
}

impl BatchProcessor {
    /// Processor with live randomness and sequential execution
    /// (worker pool of size 1).
    pub fn new(transcoder: Arc<dyn Transcoder>) -> Self {
        Self {
            transcoder,
            sampler: Arc::new(ThreadRngSampler),
            max_concurrent: 1,
        }
    }

    /// Replace the randomness source (deterministic tests).
    pub fn with_sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// Raise the worker pool size. Clamped to at least 1.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Produce `settings.copies` perturbed copies of `input`.
    ///
    /// Per-copy transcode failures are logged and collected in the
    /// outcome; they never abort the remaining copies. Only
    /// catastrophic conditions (missing input, unwritable output
    /// directory) propagate as errors.
    pub async fn process_video_batch(
        &self,
        input: &Path,
        original_name: &str,
        settings: &ProcessSettings,
        output_dir: &Path,
        url_base: &str,
    ) -> MediaResult<BatchOutcome> {
        if tokio::fs::metadata(input).await.is_err() {
            return Err(MediaError::FileNotFound(input.to_path_buf()));
        }
        tokio::fs::create_dir_all(output_dir).await?;

        let ctx = CopyContext {
            input,
            output_dir,
            original_name,
            url_base,
        };

        let results: Vec<(u32, MediaResult<GeneratedFileInfo>)> =
            stream::iter(0..settings.copies)
                .map(|i| async move {
                    let result = create_unique_copy(
                        self.transcoder.as_ref(),
                        ctx,
                        settings,
                        self.sampler.as_ref(),
                        i,
                    )
                    .await;
                    (i, result)
                })
                .buffered(self.max_concurrent)
                .collect()
                .await;

        let mut outcome = BatchOutcome::default();
        for (index, result) in results {
            match result {
                Ok(info) => outcome.copies.push(info),
                Err(e) => {
                    error!(copy = index + 1, error = %e, "failed to generate copy");
                    outcome.failures.push(CopyFailure { index, error: e });
                }
            }
        }

        info!(
            requested = settings.copies,
            succeeded = outcome.copies.len(),
            "batch complete"
        );
        Ok(outcome)
    }
}
