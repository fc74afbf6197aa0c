//! The transfer completion report.
//!
//! A [`Completion`] is returned for every transfer that probed, fetched, and
//! merged successfully. Failed transfers surface as [`crate::Error`] values
//! instead; there is no partial-success state.

use super::transfer::Transfer;
use std::path::PathBuf;

/// Represents a successfully completed [`Transfer`].
#[derive(Debug, Clone)]
pub struct Completion {
    /// The transfer that was carried out.
    transfer: Transfer,
    /// Where the final artifact was written.
    path: PathBuf,
    /// Size of the final artifact in bytes.
    size: u64,
    /// Number of segments the resource was fetched in.
    parts: usize,
}

impl Completion {
    /// Create a new [`Completion`].
    pub fn new(transfer: Transfer, path: PathBuf, size: u64, parts: usize) -> Self {
        Self {
            transfer,
            path,
            size,
            parts,
        }
    }

    /// Get a reference to the completed transfer.
    pub fn transfer(&self) -> &Transfer {
        &self.transfer
    }

    /// Get the path of the final artifact.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the size of the final artifact in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the number of segments the resource was fetched in.
    pub fn parts(&self) -> usize {
        self.parts
    }
}
