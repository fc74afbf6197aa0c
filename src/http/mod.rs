//! HTTP plumbing: client construction and size probing.
//!
//! This module owns everything that talks to the network outside of the
//! segment fetch loop itself:
//!
//! - [`client`] - Creation of the middleware-wrapped HTTP client
//! - [`probe`] - Determining the total byte length of a remote resource
//!
//! # Examples
//!
//! ```rust
//! use shatter::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod probe;

pub use client::{create_http_client, HttpClientConfig};
pub use probe::{parse_content_range_total, probe_length, probe_length_via_range};
