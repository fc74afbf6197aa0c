//! Per-segment fetch worker.
//!
//! Each segment of a transfer is fetched by one independently spawned task
//! running [`fetch_segment`]. The worker requests its byte range, streams the
//! response body into a scratch file it owns exclusively, and bumps the
//! shared progress counter as chunks arrive. The counter is the only state
//! shared between workers; every update is an atomic read-modify-write, so
//! concurrent increments are never lost.
//!
//! A transport or I/O failure mid-stream, or a server answering the range
//! request with anything other than 206, ends the worker early with
//! [`Error::Fetch`], leaving a truncated scratch file behind. The
//! orchestrator treats that as fatal for the whole transfer.

use crate::error::{Error, Result};
use crate::segment::partition::Segment;

use futures::StreamExt;
use reqwest::{header::RANGE, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Path of the scratch file holding one segment's bytes, deterministic by
/// segment index.
pub fn scratch_path(directory: &Path, filename: &str, index: usize) -> PathBuf {
    directory.join(format!("{}.part{}", filename, index))
}

/// Fetch one segment of `url` into the scratch file at `scratch`.
///
/// Streams the response for `bytes=[start, end]` chunk by chunk, appending
/// each chunk to the scratch file and adding its length to `counter`. Empty
/// segments skip the network entirely but still create their (empty) scratch
/// file so the merger finds every part.
pub async fn fetch_segment(
    client: ClientWithMiddleware,
    url: Url,
    segment: Segment,
    scratch: PathBuf,
    counter: Arc<AtomicU64>,
) -> Result<()> {
    let index = segment.index;
    let fail = |reason: String| Error::Fetch { index, reason };

    debug!("Creating scratch file {:?}", &scratch);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&scratch)
        .await
        .map_err(|e| fail(format!("cannot create scratch file: {}", e)))?;

    // Degenerate partitions produce empty segments with nothing to request.
    let Some(range) = segment.range_header() else {
        return Ok(());
    };

    debug!("Fetching segment {} of {} ({})", index, url, range);
    let res = client
        .get(url.clone())
        .header(RANGE, range)
        .send()
        .await
        .map_err(|e| fail(format!("{}", e)))?;

    res.error_for_status_ref()
        .map_err(|e| fail(format!("{}", e)))?;

    // A 200 here means the server ignored the range request and is sending
    // the whole resource; writing that into one segment's scratch file would
    // corrupt the merge.
    if res.status() != StatusCode::PARTIAL_CONTENT {
        return Err(fail(format!(
            "server ignored the range request and answered {}",
            res.status()
        )));
    }

    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item.map_err(|e| fail(format!("{}", e)))?;
        let chunk_size = chunk.len() as u64;

        file.write_all_buf(&mut chunk)
            .await
            .map_err(|e| fail(format!("cannot write scratch file: {}", e)))?;

        counter.fetch_add(chunk_size, Ordering::Relaxed);
    }

    file.flush()
        .await
        .map_err(|e| fail(format!("cannot flush scratch file: {}", e)))?;

    debug!("Segment {} complete", index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_path_is_deterministic() {
        let dir = Path::new("/tmp/downloads");
        assert_eq!(
            scratch_path(dir, "file.bin", 0),
            PathBuf::from("/tmp/downloads/file.bin.part0")
        );
        assert_eq!(
            scratch_path(dir, "file.bin", 7),
            PathBuf::from("/tmp/downloads/file.bin.part7")
        );
    }

    #[tokio::test]
    async fn test_empty_segment_creates_empty_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = scratch_path(dir.path(), "out.bin", 2);
        let client = crate::http::create_http_client(Default::default()).unwrap();
        let counter = Arc::new(AtomicU64::new(0));

        let segment = Segment {
            index: 2,
            start: 0,
            len: 0,
        };
        let url = Url::parse("http://127.0.0.1:9/never-contacted").unwrap();
        fetch_segment(client, url, segment, scratch.clone(), Arc::clone(&counter))
            .await
            .unwrap();

        assert!(scratch.exists());
        assert_eq!(std::fs::metadata(&scratch).unwrap().len(), 0);
        assert_eq!(counter.load(Ordering::Relaxed), 0);
    }
}
