//! Builder pattern implementation for creating Engine instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use shatter::engine::EngineBuilder;
//! use std::path::PathBuf;
//!
//! let engine = EngineBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .parts(8)
//!     .build();
//! ```
//!
//! ## Hidden Progress Line
//!
//! ```rust
//! use shatter::engine::EngineBuilder;
//!
//! // Create an engine that renders nothing to the terminal.
//! let engine = EngineBuilder::hidden().build();
//! ```

use super::{config::EngineConfig, engine::Engine};
use crate::progress::ProgressBarOpts;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create an [`Engine`].
///
/// ```rust
/// # fn main()  {
/// use shatter::engine::EngineBuilder;
///
/// let e = EngineBuilder::new().parts(8).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        EngineBuilder::default()
    }

    /// Convenience function to hide the progress line.
    pub fn hidden() -> Self {
        let mut builder = EngineBuilder::default();
        builder.config.progress = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the directory where the final artifact is stored.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of segments each resource is split into.
    pub fn parts(mut self, parts: usize) -> Self {
        self.config.parts = parts;
        self
    }

    /// Set the number of HTTP retries per request.
    ///
    /// The default is zero: a failed range fetch is terminal for the whole
    /// transfer.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the proxy used for all requests.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the progress line options.
    pub fn progress(mut self, progress: ProgressBarOpts) -> Self {
        self.config.progress = progress;
        self
    }

    /// Set the sampling interval of the progress monitor.
    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.config.progress_interval = interval;
        self
    }

    /// Use a one-byte range request instead of a HEAD request to determine
    /// the resource size.
    ///
    /// This is useful when servers don't provide accurate Content-Length
    /// headers in HEAD responses but do support range requests with
    /// Content-Range responses.
    pub fn use_range_for_content_length(mut self, use_range: bool) -> Self {
        self.config.use_range_for_content_length = use_range;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    /// `HeaderMap` is a set of http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use shatter::engine::EngineBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = EngineBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: EngineBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers.
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use shatter::engine::EngineBuilder;
    ///
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = EngineBuilder::new()
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, see also [`headers()`].
    ///
    /// [`headers()`]: EngineBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Engine`] with the specified options.
    pub fn build(self) -> Engine {
        Engine::new(self.config)
    }
}
