//! Axum HTTP API server for video unikalization.
//!
//! This crate provides:
//! - Multipart upload endpoint driving the batch pipeline
//! - Static serving of generated copies
//! - Health endpoint

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
