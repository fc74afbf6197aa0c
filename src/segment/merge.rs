//! Ordered reassembly of scratch files.
//!
//! Once every fetcher has terminated, [`merge`] concatenates the scratch
//! files in ascending segment index order into the final artifact and deletes
//! each scratch file after consuming it. Byte order across the concatenation
//! reconstructs the original resource exactly; no segment is skipped,
//! duplicated, or reordered.
//!
//! A missing or unreadable scratch file aborts the merge with
//! [`Error::Merge`] naming the offending index. The final artifact is left in
//! whatever partial state it reached.

use crate::error::{Error, Result};

use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

/// Concatenate the scratch files at `parts` (in slice order, which is segment
/// index order) into `final_path`, deleting each scratch file once consumed.
///
/// Returns the total number of bytes written to the final artifact.
pub async fn merge(parts: &[PathBuf], final_path: &Path) -> Result<u64> {
    debug!("Merging {} parts into {:?}", parts.len(), final_path);
    let mut output = fs::File::create(final_path).await?;
    let mut written = 0u64;

    for (index, part) in parts.iter().enumerate() {
        let mut scratch = fs::File::open(part)
            .await
            .map_err(|source| Error::Merge { index, source })?;

        written += tokio::io::copy(&mut scratch, &mut output)
            .await
            .map_err(|source| Error::Merge { index, source })?;

        fs::remove_file(part)
            .await
            .map_err(|source| Error::Merge { index, source })?;
        debug!("Merged and removed part {} ({:?})", index, part);
    }

    output.flush().await?;
    Ok(written)
}
