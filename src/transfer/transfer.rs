//! The transfer request type.
//!
//! A [`Transfer`] names what to fetch and what to call the final artifact.
//! It is immutable for the duration of one transfer.
//!
//! # Examples
//!
//! ```rust
//! use shatter::transfer::Transfer;
//!
//! // Create from a URL string (filename extracted automatically).
//! let transfer = Transfer::try_from("https://example.com/file.zip")?;
//! assert_eq!(transfer.filename, "file.zip");
//!
//! // Create with a custom output filename.
//! let url = reqwest::Url::parse("https://example.com/download")?;
//! let transfer = Transfer::new(&url, "custom-name.zip");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;

/// Represents one resource to be transferred.
#[derive(Debug, Clone)]
pub struct Transfer {
    /// URL of the resource to fetch.
    pub url: Url,
    /// File name used to save the final artifact on disk.
    pub filename: String,
}

impl Transfer {
    /// Creates a new [`Transfer`].
    ///
    /// When using the [`Transfer::try_from`] methods, the file name is
    /// automatically extracted from the URL instead.
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }
}

impl TryFrom<&Url> for Transfer {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .map(String::from)
            .map(|filename| Transfer {
                url: value.clone(),
                filename: form_urlencoded::parse(filename.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect(),
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Transfer {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Transfer::try_from(&u))
    }
}
