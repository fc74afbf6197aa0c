//! Range segmentation, per-segment fetching, and ordered reassembly.
//!
//! A transfer splits the resource into contiguous byte ranges, fetches each
//! range into its own scratch file, and stitches the scratch files back
//! together in index order:
//!
//! - [`partition`] - Splitting a total length into [`Segment`]s
//! - [`fetcher`] - Streaming one segment's bytes into its scratch file
//! - [`merge`] - Concatenating the scratch files into the final artifact
//!
//! # Examples
//!
//! ```rust
//! use shatter::segment::partition;
//!
//! let segments = partition(7, 3);
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[2].end(), Some(6));
//! ```

pub mod fetcher;
pub mod merge;
pub mod partition;

pub use fetcher::{fetch_segment, scratch_path};
pub use merge::merge;
pub use partition::{partition, Segment};
