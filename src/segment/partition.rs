//! Range partitioning.
//!
//! [`partition`] divides `[0, total_length - 1]` into `parts` contiguous,
//! non-overlapping byte ranges with no gaps. All segments get
//! `total_length / parts` bytes except the last, which absorbs the remainder
//! so the union always covers the whole resource exactly.
//!
//! Asking for more parts than there are bytes is allowed: the leading
//! segments come out empty and the last one carries everything. The partition
//! invariant holds either way.

/// One contiguous byte range of the target resource, assigned to a single
/// fetch worker.
///
/// A segment covers the inclusive range `[start, start + len - 1]`. Segments
/// with `len == 0` are empty and fetch nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position of this segment within the transfer, starting at 0. Scratch
    /// files are named after it and the merger consumes them in this order.
    pub index: usize,
    /// Offset of the first byte of the range.
    pub start: u64,
    /// Number of bytes in the range.
    pub len: u64,
}

impl Segment {
    /// Offset of the last byte of the range (inclusive), or `None` for an
    /// empty segment.
    pub fn end(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.start + self.len - 1)
        }
    }

    /// Whether this segment covers no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `Range` header value requesting exactly this segment's bytes, or
    /// `None` for an empty segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shatter::segment::Segment;
    ///
    /// let segment = Segment { index: 1, start: 2, len: 2 };
    /// assert_eq!(segment.range_header(), Some("bytes=2-3".to_string()));
    /// ```
    pub fn range_header(&self) -> Option<String> {
        self.end().map(|end| format!("bytes={}-{}", self.start, end))
    }
}

/// Split `total_length` bytes into `parts` contiguous segments.
///
/// Every segment but the last has `total_length / parts` bytes; the last one
/// runs to `total_length - 1` regardless of the division remainder.
///
/// Both `total_length` and `parts` must be at least 1; the engine validates
/// this before calling.
///
/// # Example
///
/// ```rust
/// use shatter::segment::partition;
///
/// let segments = partition(7, 3);
/// let spans: Vec<_> = segments.iter().map(|s| (s.start, s.end())).collect();
/// assert_eq!(spans, vec![(0, Some(1)), (2, Some(3)), (4, Some(6))]);
/// ```
pub fn partition(total_length: u64, parts: usize) -> Vec<Segment> {
    debug_assert!(total_length >= 1);
    debug_assert!(parts >= 1);

    let chunk = total_length / parts as u64;
    (0..parts)
        .map(|index| {
            let start = index as u64 * chunk;
            let len = if index == parts - 1 {
                // Last segment absorbs the remainder.
                total_length - start
            } else {
                chunk
            };
            Segment { index, start, len }
        })
        .collect()
}
