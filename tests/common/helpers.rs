#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Creates a temporary directory for testing purposes.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content whose bytes depend on their position, so any
/// reordering or duplication during a merge shows up as a mismatch.
pub fn position_dependent_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| ((i * 31) % 251) as u8).collect()
}

/// Creates random test file content.
pub fn random_content(size: usize) -> Vec<u8> {
    use rand::Rng;
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random()).collect()
}

/// Asserts that a file exists at the given path.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Installs a tracing subscriber honoring RUST_LOG, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// How the fixture server treats GET requests carrying a `Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureBehavior {
    /// Answer 206 with exactly the requested slice.
    Normal,
    /// Answer the range starting at this offset with a 500, simulating one
    /// segment's transport failing.
    FailRangeAt(u64),
    /// Answer 206 but send only the first half of each requested slice, with
    /// a Content-Length matching the short body so the stream ends cleanly.
    ShortRanges,
    /// Ignore the `Range` header entirely and answer 200 with the full body.
    IgnoreRange,
}

/// A minimal in-process HTTP server for deterministic transfer tests.
///
/// It answers HEAD requests with the body length, GET requests carrying a
/// `Range` header according to the configured [`FixtureBehavior`], and plain
/// GET requests with the whole body.
pub struct FixtureServer {
    addr: SocketAddr,
    accept_loop: JoinHandle<()>,
}

impl FixtureServer {
    pub fn url(&self, filename: &str) -> String {
        format!("http://{}/{}", self.addr, filename)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

/// Spawns a fixture server serving `body` for every path.
pub async fn spawn_fixture_server(body: Vec<u8>) -> FixtureServer {
    spawn_fixture_server_with(body, FixtureBehavior::Normal).await
}

/// Spawns a fixture server that fails the range starting at `fail_range_start`.
pub async fn spawn_fixture_server_failing(
    body: Vec<u8>,
    fail_range_start: Option<u64>,
) -> FixtureServer {
    let behavior = match fail_range_start {
        Some(start) => FixtureBehavior::FailRangeAt(start),
        None => FixtureBehavior::Normal,
    };
    spawn_fixture_server_with(body, behavior).await
}

/// Spawns a fixture server with the given range behavior.
pub async fn spawn_fixture_server_with(
    body: Vec<u8>,
    behavior: FixtureBehavior,
) -> FixtureServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let body = Arc::new(body);

    let accept_loop = tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let body = Arc::clone(&body);
            tokio::spawn(async move {
                let _ = handle_connection(stream, body, behavior).await;
            });
        }
    });

    FixtureServer { addr, accept_loop }
}

async fn handle_connection(
    mut stream: TcpStream,
    body: Arc<Vec<u8>>,
    behavior: FixtureBehavior,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf).to_string();
    let mut lines = request.lines();
    let request_line = lines.next().unwrap_or_default();
    let method = request_line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let mut range = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("range"))
        .and_then(|(_, v)| parse_range(v.trim()));
    if behavior == FixtureBehavior::IgnoreRange {
        range = None;
    }

    if method == "HEAD" {
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nAccept-Ranges: bytes\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).await?;
        return stream.shutdown().await;
    }

    match range {
        Some((start, end)) if (start as usize) < body.len() => {
            if behavior == FixtureBehavior::FailRangeAt(start) {
                let head =
                    "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
                stream.write_all(head.as_bytes()).await?;
            } else {
                let end = end.min(body.len() as u64 - 1);
                let slice = &body[start as usize..=end as usize];
                // ShortRanges still advertises the full requested range, but
                // sends a truncated body with a matching Content-Length so the
                // connection ends without a transport error.
                let sent = if behavior == FixtureBehavior::ShortRanges {
                    &slice[..slice.len() / 2]
                } else {
                    slice
                };
                let head = format!(
                    "HTTP/1.1 206 Partial Content\r\nContent-Length: {}\r\nContent-Range: bytes {}-{}/{}\r\nConnection: close\r\n\r\n",
                    sent.len(),
                    start,
                    end,
                    body.len()
                );
                stream.write_all(head.as_bytes()).await?;
                stream.write_all(sent).await?;
            }
        }
        _ => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).await?;
            stream.write_all(&body).await?;
        }
    }
    stream.shutdown().await
}

fn parse_range(value: &str) -> Option<(u64, u64)> {
    let value = value.strip_prefix("bytes=")?;
    let (start, end) = value.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}
