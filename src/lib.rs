//! Shatter is a crate for downloading a file over HTTP(S) in parallel byte
//! ranges and reassembling the pieces in order.
//!
//! Given a URL, the engine probes the resource's total size, splits it into
//! contiguous segments, fetches every segment concurrently into its own
//! scratch file while a monitor task renders overall progress, and finally
//! concatenates the scratch files, in segment order, into the requested
//! output file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use shatter::{engine::EngineBuilder, transfer::Transfer, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let transfer = Transfer::try_from("https://example.com/large-file.iso")?;
//! let engine = EngineBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .parts(8)
//!     .build();
//! let completion = engine.transfer(&transfer).await?;
//! println!("saved to {:?}", completion.path());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`engine`] - The `Engine` and `EngineBuilder` orchestrating transfers
//! - [`transfer`] - The `Transfer` input and `Completion` result types
//! - [`segment`] - Range partitioning, segment fetching, and ordered merging
//! - [`progress`] - Progress line styling and the sampling monitor
//! - [`http`] - HTTP client construction and size probing
//! - [`registry`] - The bounded list of pending URLs
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod engine;
pub mod error;
pub mod http;
pub mod progress;
pub mod registry;
pub mod segment;
pub mod transfer;

pub use engine::{Engine, EngineBuilder, EngineConfig};
pub use error::{Error, Result};
pub use http::{
    create_http_client, parse_content_range_total, probe_length, probe_length_via_range,
    HttpClientConfig,
};
pub use progress::{ProgressBarOpts, ProgressMonitor};
pub use registry::{UrlRegistry, MAX_URLS, MAX_URL_LENGTH};
pub use segment::{fetch_segment, merge, partition, scratch_path, Segment};
pub use transfer::{Completion, Transfer};
