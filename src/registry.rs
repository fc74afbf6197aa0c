//! Bounded in-memory URL registry.
//!
//! The registry is the engine's collaborator: a small ordered list of
//! pending URLs with a fixed capacity. Adding beyond the capacity is
//! rejected and leaves the list untouched; removing an entry shifts the
//! later ones down by one, preserving relative order.
//!
//! # Examples
//!
//! ```rust
//! use shatter::registry::UrlRegistry;
//!
//! let mut registry = UrlRegistry::new();
//! registry.add("https://example.com/a.bin")?;
//! registry.add("https://example.com/b.bin")?;
//! assert_eq!(registry.len(), 2);
//!
//! let removed = registry.remove(0)?;
//! assert_eq!(removed, "https://example.com/a.bin");
//! assert_eq!(registry.get(0), Some("https://example.com/b.bin"));
//! # Ok::<(), shatter::Error>(())
//! ```

use crate::error::{Error, Result};

use reqwest::Url;

/// Default maximum number of URLs a registry holds.
pub const MAX_URLS: usize = 10;

/// Maximum accepted length of a single URL, in bytes.
pub const MAX_URL_LENGTH: usize = 1000;

/// An ordered, capacity-bounded list of pending URLs.
#[derive(Debug, Clone)]
pub struct UrlRegistry {
    urls: Vec<String>,
    capacity: usize,
}

impl Default for UrlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlRegistry {
    /// Create a registry with the default capacity of [`MAX_URLS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_URLS)
    }

    /// Create a registry holding at most `capacity` URLs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a URL to the registry.
    ///
    /// Fails with [`Error::RegistryFull`] when the registry is at capacity
    /// and with [`Error::InvalidUrl`] when the URL is longer than
    /// [`MAX_URL_LENGTH`] or cannot be parsed. The list is unchanged on
    /// failure.
    pub fn add(&mut self, url: &str) -> Result<()> {
        if self.urls.len() >= self.capacity {
            return Err(Error::RegistryFull {
                capacity: self.capacity,
            });
        }
        if url.len() > MAX_URL_LENGTH {
            return Err(Error::InvalidUrl(format!(
                "URL exceeds the maximum length of {} bytes",
                MAX_URL_LENGTH
            )));
        }
        Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;

        self.urls.push(String::from(url));
        Ok(())
    }

    /// Remove the URL at `index`, shifting the later entries down by one.
    ///
    /// Returns the removed URL, or [`Error::InvalidIndex`] when `index` is
    /// out of bounds.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.urls.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.urls.len(),
            });
        }
        Ok(self.urls.remove(index))
    }

    /// Get the URL at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Iterate over the registered URLs in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Number of registered URLs.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the registry holds no URLs.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Maximum number of URLs this registry accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
