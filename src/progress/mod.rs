//! Progress rendering for in-flight transfers.
//!
//! - [`style`] - Appearance options for the progress line
//! - [`monitor`] - The sampling task that renders the shared byte counter
//!
//! # Examples
//!
//! ```rust
//! use shatter::progress::ProgressBarOpts;
//!
//! // Silence the progress line entirely.
//! let opts = ProgressBarOpts::hidden();
//! assert!(!opts.is_enabled());
//! ```

pub mod monitor;
pub mod style;

pub use monitor::ProgressMonitor;
pub use style::ProgressBarOpts;
