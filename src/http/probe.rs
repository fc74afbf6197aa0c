//! Size probing for remote resources.
//!
//! Before a transfer can be partitioned the engine needs the total byte
//! length of the resource. [`probe_length`] issues a body-less HEAD request
//! and reads the `Content-Length` header; [`probe_length_via_range`] asks for
//! a single byte and reads the total out of the `Content-Range` header
//! instead, which helps with servers that return unreliable lengths on HEAD.
//!
//! Both refuse to report an unknown or zero size: a transfer whose length
//! cannot be determined is rejected before any worker is spawned.

use crate::error::{Error, Result};

use reqwest::{
    header::{CONTENT_LENGTH, CONTENT_RANGE, RANGE},
    Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

fn probe_error(url: &Url, reason: impl std::fmt::Display) -> Error {
    Error::Probe {
        url: url.to_string(),
        reason: format!("{}", reason),
    }
}

/// Determine the total byte length of a resource with a HEAD request.
///
/// Returns [`Error::Probe`] if the request fails, the response carries an
/// error status, the `Content-Length` header is missing or unparseable, or
/// the declared length is zero.
pub async fn probe_length(client: &ClientWithMiddleware, url: &Url) -> Result<u64> {
    debug!("Probing size of {}", url);
    let res = client
        .head(url.clone())
        .send()
        .await
        .map_err(|e| probe_error(url, e))?;
    res.error_for_status_ref().map_err(|e| probe_error(url, e))?;

    let declared = res
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    match declared {
        Some(0) => Err(probe_error(url, "resource reports a length of zero")),
        Some(length) => Ok(length),
        None => Err(probe_error(url, "no usable Content-Length header")),
    }
}

/// Determine the total byte length of a resource with a one-byte range request.
///
/// Requests `bytes=0-0` and parses the total out of the `Content-Range`
/// response header. Subject to the same refusal rules as [`probe_length`].
pub async fn probe_length_via_range(client: &ClientWithMiddleware, url: &Url) -> Result<u64> {
    debug!("Probing size of {} via range request", url);
    let res = client
        .get(url.clone())
        .header(RANGE, "bytes=0-0")
        .send()
        .await
        .map_err(|e| probe_error(url, e))?;
    res.error_for_status_ref().map_err(|e| probe_error(url, e))?;

    let total = res
        .headers()
        .get(CONTENT_RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_content_range_total);

    match total {
        Some(0) => Err(probe_error(url, "resource reports a length of zero")),
        Some(length) => Ok(length),
        None => Err(probe_error(url, "no usable Content-Range header")),
    }
}

/// Parse a `Content-Range` header value to extract the total size.
///
/// The header format is `bytes start-end/total`; this returns the number
/// after the slash, or `None` if the header does not parse.
///
/// # Example
///
/// ```rust
/// use shatter::http::parse_content_range_total;
///
/// let total = parse_content_range_total("bytes 0-1023/2048");
/// assert_eq!(total, Some(2048));
/// ```
pub fn parse_content_range_total(content_range: &str) -> Option<u64> {
    content_range
        .split('/')
        .next_back()
        .and_then(|size| size.trim().parse::<u64>().ok())
}
