//! Application state.

use std::sync::Arc;

use uniq_media::{BatchProcessor, FfmpegTranscoder};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub batch: Arc<BatchProcessor>,
}

impl AppState {
    /// Create new application state wired to the real FFmpeg binary.
    pub fn new(config: ApiConfig) -> Self {
        let batch = BatchProcessor::new(Arc::new(FfmpegTranscoder))
            .with_max_concurrent(config.max_concurrent_copies);
        Self {
            config,
            batch: Arc::new(batch),
        }
    }
}
