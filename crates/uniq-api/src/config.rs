//! API configuration.

use std::path::PathBuf;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Directory uploaded source files are saved to
    pub upload_dir: PathBuf,
    /// Directory generated copies are written to and served from
    pub output_dir: PathBuf,
    /// Public base URL used to build retrieval links
    pub public_base_url: String,
    /// Max request body size (uploads are whole videos)
    pub max_body_size: usize,
    /// Upper bound on copies per request
    pub max_copies: u32,
    /// Worker pool size for copy jobs within one batch
    pub max_concurrent_copies: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cors_origins: vec!["*".to_string()],
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("output"),
            public_base_url: "http://localhost:4000".to_string(),
            max_body_size: 512 * 1024 * 1024, // 512MB
            max_copies: 20,
            max_concurrent_copies: 1,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            public_base_url: std::env::var("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            max_copies: std::env::var("MAX_COPIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_copies),
            max_concurrent_copies: std::env::var("MAX_CONCURRENT_COPIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_concurrent_copies),
        }
    }

    /// Public URL root the output directory is served under.
    pub fn output_url_base(&self) -> String {
        format!("{}/output", self.public_base_url.trim_end_matches('/'))
    }
}
