//! Core engine implementation with the transfer orchestration logic.
//!
//! This module contains the [`Engine`] struct that carries out one transfer
//! end to end: probe the resource size, partition it into segments, fan the
//! segments out to concurrently spawned fetchers while a monitor task renders
//! progress, join everything, and merge the scratch files into the final
//! artifact.
//!
//! # Examples
//!
//! ```rust,no_run
//! use shatter::engine::EngineBuilder;
//! use shatter::transfer::Transfer;
//!
//! # async fn example() -> Result<(), shatter::Error> {
//! let engine = EngineBuilder::new().parts(8).build();
//! let transfer = Transfer::try_from("https://example.com/file.zip")?;
//!
//! let completion = engine.transfer(&transfer).await?;
//! println!("{} bytes in {} parts", completion.size(), completion.parts());
//! # Ok(())
//! # }
//! ```

use super::config::EngineConfig;
use crate::error::{Error, Result};
use crate::http::{create_http_client, probe_length, probe_length_via_range, HttpClientConfig};
use crate::progress::ProgressMonitor;
use crate::registry::UrlRegistry;
use crate::segment::{fetch_segment, merge, partition, scratch_path, Segment};
use crate::transfer::{Completion, Transfer};

use futures::future::join_all;
use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Represents the transfer controller.
///
/// An engine can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use shatter::engine::EngineBuilder;
///
/// let e = EngineBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish()
    }
}

impl Engine {
    /// Creates a new Engine with the given configuration.
    pub(crate) fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where final artifacts are written.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of segments each resource is split into.
    pub fn parts(&self) -> usize {
        self.config.parts
    }

    /// Gets the number of HTTP retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets whether a range request is used to determine the resource size.
    pub fn use_range_for_content_length(&self) -> bool {
        self.config.use_range_for_content_length
    }

    /// Determine the resource size using either a HEAD request or a range
    /// request based on configuration.
    async fn probe(&self, client: &ClientWithMiddleware, transfer: &Transfer) -> Result<u64> {
        if self.config.use_range_for_content_length {
            probe_length_via_range(client, &transfer.url).await
        } else {
            probe_length(client, &transfer.url).await
        }
    }

    /// Identify which segment's scratch file holds fewer bytes than its
    /// range requested, lowest index first.
    async fn find_short_segment(&self, segments: &[Segment], scratch_paths: &[PathBuf]) -> Error {
        for (segment, scratch) in segments.iter().zip(scratch_paths.iter()) {
            let received = fs::metadata(scratch).await.map(|m| m.len()).unwrap_or(0);
            if received < segment.len {
                return Error::Fetch {
                    index: segment.index,
                    reason: format!(
                        "server returned {} of {} bytes for the requested range",
                        received, segment.len
                    ),
                };
            }
        }
        Error::Internal("transfer ended short of the probed total length".to_string())
    }

    /// Run one transfer end to end.
    ///
    /// Sequence: probe the size (fatal on failure, nothing is spawned), start
    /// a fresh progress counter and its monitor task, partition the range,
    /// spawn all fetchers concurrently, join the fetchers, join the monitor,
    /// merge the scratch files in index order.
    ///
    /// The synchronization state lives for exactly one call: every transfer
    /// gets its own counter, monitor, and scratch files.
    pub async fn transfer(&self, transfer: &Transfer) -> Result<Completion> {
        let parts = self.config.parts;
        if parts == 0 {
            return Err(Error::Internal(
                "part count must be at least 1".to_string(),
            ));
        }

        let client = create_http_client(HttpClientConfig {
            retries: self.config.retries,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })
        .map_err(|e| Error::Internal(format!("cannot build HTTP client: {}", e)))?;

        // A transfer with an unknown or zero size is refused here, before
        // any task is spawned.
        let total_length = self.probe(&client, transfer).await?;
        debug!("{} is {} bytes long", &transfer.url, total_length);

        fs::create_dir_all(&self.config.directory).await?;
        let final_path = self.config.directory.join(&transfer.filename);

        let counter = Arc::new(AtomicU64::new(0));
        let monitor = ProgressMonitor::new(
            self.config.progress.clone(),
            total_length,
            Arc::clone(&counter),
        );
        let monitor_handle = monitor.spawn(self.config.progress_interval);

        let segments = partition(total_length, parts);
        let scratch_paths: Vec<PathBuf> = segments
            .iter()
            .map(|s| scratch_path(&self.config.directory, &transfer.filename, s.index))
            .collect();

        debug!("Spawning {} segment fetchers", parts);
        let handles: Vec<_> = segments
            .iter()
            .zip(scratch_paths.iter().cloned())
            .map(|(segment, scratch)| {
                tokio::spawn(fetch_segment(
                    client.clone(),
                    transfer.url.clone(),
                    segment.clone(),
                    scratch,
                    Arc::clone(&counter),
                ))
            })
            .collect();

        let mut first_failure: Option<Error> = None;
        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            let outcome = joined.unwrap_or_else(|e| {
                Err(Error::Internal(format!(
                    "segment {} task panicked: {}",
                    index, e
                )))
            });
            if let Err(e) = outcome {
                first_failure.get_or_insert(e);
            }
        }

        // A range response can terminate cleanly while carrying fewer bytes
        // than requested. The counter then never reaches the total and the
        // monitor would wait forever, so a shortfall fails the transfer and
        // names the short segment.
        if first_failure.is_none() && counter.load(Ordering::Relaxed) < total_length {
            first_failure = Some(self.find_short_segment(&segments, &scratch_paths).await);
        }

        if let Some(failure) = first_failure {
            // The counter can never reach the total now; take the monitor
            // down instead of joining it.
            monitor_handle.abort();
            let _ = monitor_handle.await;
            return Err(failure);
        }

        monitor_handle
            .await
            .map_err(|e| Error::Internal(format!("progress monitor task failed: {}", e)))?;

        let size = merge(&scratch_paths, &final_path).await?;
        debug!("Merged {} bytes into {:?}", size, &final_path);

        Ok(Completion::new(transfer.clone(), final_path, size, parts))
    }

    /// Transfer every URL held by the registry, one after the other.
    ///
    /// Each transfer is fully parallel internally. A URL is removed from the
    /// registry once its transfer completes; failed URLs stay registered and
    /// their errors are reported in the returned list.
    pub async fn transfer_all(&self, registry: &mut UrlRegistry) -> Vec<Result<Completion>> {
        let mut outcomes = Vec::new();
        let mut index = 0;

        while index < registry.len() {
            let transfer = match registry.get(index) {
                Some(url) => Transfer::try_from(url),
                None => break,
            };

            let outcome = match transfer {
                Ok(t) => self.transfer(&t).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(completion) => {
                    let _ = registry.remove(index);
                    outcomes.push(Ok(completion));
                }
                Err(e) => {
                    outcomes.push(Err(e));
                    index += 1;
                }
            }
        }

        outcomes
    }
}
