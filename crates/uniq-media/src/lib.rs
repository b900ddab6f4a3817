#![deny(unreachable_patterns)]
//! FFmpeg CLI wrapper and randomized unikalization pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - Randomized per-copy filter chain generation
//! - A narrow `Transcoder` seam over the external binary
//! - Sequential batch orchestration with partial-success reporting

pub mod batch;
pub mod command;
pub mod copy;
pub mod error;
pub mod filters;
pub mod sample;
pub mod transcode;

pub use batch::{BatchOutcome, BatchProcessor, CopyFailure};
pub use command::{check_ffmpeg, FfmpegCommand, FfmpegRunner};
pub use copy::{create_unique_copy, CopyContext};
pub use error::{MediaError, MediaResult};
pub use filters::{build_filter_plan, FilterPlan, NO_FILTERS, PITCH_BASE_RATE};
pub use sample::{Sampler, ScriptedSampler, ThreadRngSampler};
pub use transcode::{FfmpegTranscoder, Transcoder};
