//! Property-style tests for the range partitioner.

use shatter::segment::partition;

/// The union of the returned segments covers exactly [0, total - 1] with no
/// gaps and no overlaps, for a spread of totals and part counts.
#[test]
fn test_partition_is_gapless_and_non_overlapping() {
    use rand::Rng;
    let mut rng = rand::rng();

    let mut cases: Vec<(u64, usize)> = vec![
        (1, 1),
        (7, 3),
        (10, 10),
        (11, 10),
        (4096, 5),
        (1_000_000, 32),
    ];
    for _ in 0..50 {
        cases.push((rng.random_range(1..100_000), rng.random_range(1..64)));
    }

    for (total, parts) in cases {
        let segments = partition(total, parts);
        assert_eq!(segments.len(), parts, "total={} parts={}", total, parts);

        let mut covered = 0u64;
        let mut next_start = 0u64;
        for segment in &segments {
            if segment.is_empty() {
                continue;
            }
            assert_eq!(
                segment.start, next_start,
                "gap or overlap at segment {} (total={} parts={})",
                segment.index, total, parts
            );
            covered += segment.len;
            next_start = segment.end().unwrap() + 1;
        }
        assert_eq!(covered, total, "total={} parts={}", total, parts);
        assert_eq!(segments.last().unwrap().end(), Some(total - 1));
    }
}

/// The documented reference case: 7 bytes over 3 parts gives sizes 2, 2, 3.
#[test]
fn test_reference_degenerate_partition() {
    let segments = partition(7, 3);
    let spans: Vec<(u64, Option<u64>)> =
        segments.iter().map(|s| (s.start, s.end())).collect();
    assert_eq!(spans, vec![(0, Some(1)), (2, Some(3)), (4, Some(6))]);
    let sizes: Vec<u64> = segments.iter().map(|s| s.len).collect();
    assert_eq!(sizes, vec![2, 2, 3]);
}

#[test]
fn test_range_headers_are_inclusive() {
    let segments = partition(100, 4);
    let headers: Vec<_> = segments.iter().filter_map(|s| s.range_header()).collect();
    assert_eq!(
        headers,
        vec!["bytes=0-24", "bytes=25-49", "bytes=50-74", "bytes=75-99"]
    );
}
