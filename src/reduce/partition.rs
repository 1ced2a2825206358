//! Chunk boundary computation for the parallel reduction.
//!
//! The input is split into contiguous, non-overlapping ranges that together
//! cover `0..len` in order. Chunk sizes are `len / workers` rounded down,
//! with the remainder absorbed by the last chunk rather than forming an
//! extra one.

use std::ops::Range;

/// Compute the chunk boundaries for `len` elements across up to `workers`
/// chunks.
///
/// `workers` is clamped to `len` so that no chunk is ever empty; callers
/// must reject `workers == 0` before getting here. An empty input yields no
/// chunks at all.
pub fn chunk_bounds(len: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers > 0, "worker count validated by caller");

    if len == 0 {
        return Vec::new();
    }

    let workers = workers.min(len);
    let chunk_size = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == workers - 1 {
                // Last chunk absorbs the remainder.
                len
            } else {
                start + chunk_size
            };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        let bounds = chunk_bounds(12, 4);
        assert_eq!(bounds, vec![0..3, 3..6, 6..9, 9..12]);
    }

    #[test]
    fn remainder_goes_to_last_chunk() {
        let bounds = chunk_bounds(10, 3);
        assert_eq!(bounds, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_bounds(0, 4).is_empty());
    }

    #[test]
    fn workers_clamped_to_length() {
        let bounds = chunk_bounds(3, 8);
        assert_eq!(bounds, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn single_worker_gets_everything() {
        assert_eq!(chunk_bounds(7, 1), vec![0..7]);
    }

    #[test]
    fn chunks_are_exhaustive_and_ordered() {
        for len in [1usize, 2, 5, 17, 100, 101] {
            for workers in 1..=12 {
                let bounds = chunk_bounds(len, workers);
                assert!(bounds.len() <= workers);
                assert!(bounds.len() <= len);

                // Consecutive ranges must tile 0..len exactly.
                let mut cursor = 0;
                for range in &bounds {
                    assert_eq!(range.start, cursor);
                    assert!(range.end > range.start);
                    cursor = range.end;
                }
                assert_eq!(cursor, len);
            }
        }
    }

    #[test]
    fn last_chunk_size_is_bounded() {
        for len in [10usize, 23, 99] {
            for workers in 1..=10 {
                let bounds = chunk_bounds(len, workers);
                let effective = workers.min(len);
                let chunk_size = len / effective;
                let last = bounds.last().unwrap();
                let last_len = last.end - last.start;
                assert!(last_len >= chunk_size);
                assert!(last_len < chunk_size + effective);
            }
        }
    }
}
