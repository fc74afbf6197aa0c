//! Configuration structure and defaults for the engine.
//!
//! [`EngineConfig`] carries everything an [`Engine`](super::Engine) needs to
//! run transfers: destination directory, segment count, HTTP client options,
//! and progress rendering options. Instances are normally assembled through
//! the [`EngineBuilder`](super::EngineBuilder).

use crate::progress::ProgressBarOpts;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration structure for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory where the final artifact (and its transient scratch files)
    /// are written.
    pub directory: PathBuf,
    /// Number of segments each resource is split into. Must be at least 1.
    pub parts: usize,
    /// Number of HTTP retries per request. Zero means a failed request is
    /// terminal, which is the engine's default policy.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Progress line options.
    pub progress: ProgressBarOpts,
    /// Sampling interval of the progress monitor.
    pub progress_interval: Duration,
    /// Use a one-byte range request instead of a HEAD request to determine
    /// the resource size. Helps with servers whose HEAD responses carry no
    /// usable Content-Length.
    pub use_range_for_content_length: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            parts: 4,
            retries: 0,
            proxy: None,
            headers: None,
            progress: ProgressBarOpts::default(),
            progress_interval: Duration::from_millis(500),
            use_range_for_content_length: false,
        }
    }
}
