//! Transfer value types.
//!
//! - [`transfer`] - The [`Transfer`] input pair (URL + output filename)
//! - [`completion`] - The [`Completion`] result of a successful transfer
//!
//! # Examples
//!
//! ```rust
//! use shatter::transfer::Transfer;
//!
//! let transfer = Transfer::try_from("https://example.com/file.zip")?;
//! assert_eq!(transfer.filename, "file.zip");
//! # Ok::<(), shatter::Error>(())
//! ```

pub mod completion;
pub mod transfer;

pub use completion::Completion;
pub use transfer::Transfer;
