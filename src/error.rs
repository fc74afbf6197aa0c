//! Error handling for the shatter library.
//!
//! This module provides centralized error handling for every stage of a
//! transfer. Each failure names the stage it belongs to, and the fetch and
//! merge variants carry the index of the offending segment so callers can
//! report exactly which part of the resource went wrong.

use std::io;
use thiserror::Error;

/// Errors that can happen when using shatter.
///
/// All variants are terminal for the transfer they occur in: the engine never
/// retries on its own and never attempts a partial merge.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Captures internal failures that don't fit into other categories, such
    /// as a panicked worker task or an invalid part count.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The total size of the resource could not be determined.
    ///
    /// Returned by the size probe when the metadata request fails, the server
    /// does not declare a usable length, or the declared length is zero. The
    /// engine refuses to partition a resource of unknown size, so this error
    /// is always raised before any worker task is spawned.
    #[error("cannot determine size of \"{url}\": {reason}")]
    Probe { url: String, reason: String },

    /// One segment's range fetch failed.
    ///
    /// Fatal for the whole transfer: the remaining fetchers are joined but
    /// the merger is never invoked. A truncated scratch file may remain on
    /// disk for the failing segment.
    #[error("segment {index} fetch failed: {reason}")]
    Fetch { index: usize, reason: String },

    /// A scratch file was missing or unreadable during reassembly.
    ///
    /// The final artifact is left in whatever partial state the merge
    /// reached; no atomic rename or swap is performed.
    #[error("merge failed on segment {index}")]
    Merge {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// I/O Error.
    ///
    /// Wraps file system errors outside the fetch and merge stages, such as
    /// failing to create the destination directory.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The URL registry is at capacity and cannot accept another entry.
    #[error("URL registry is full ({capacity} entries)")]
    RegistryFull { capacity: usize },

    /// The requested registry index does not exist.
    #[error("no URL at index {index} (registry holds {len})")]
    InvalidIndex { index: usize, len: usize },
}

/// Result type alias for operations that can fail with a shatter error.
pub type Result<T> = std::result::Result<T, Error>;
