//! Shared data models for the unikalization backend.
//!
//! This crate provides Serde-serializable types for:
//! - Per-request processing settings (copy count + effect toggles)
//! - Generated copy metadata returned to clients

pub mod file_info;
pub mod settings;

// Re-export common types
pub use file_info::GeneratedFileInfo;
pub use settings::{ProcessSettings, DEFAULT_COPIES};
