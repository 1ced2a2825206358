//! Parallel chunked reduction.
//!
//! Splits a sequence into contiguous chunks, sums each chunk on its own
//! blocking task with no shared mutable state, and combines the partial
//! sums once every task has finished. Tasks are created per call and torn
//! down after collection; there is no persistent pool.

pub mod partition;

use std::iter::Sum;
use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

pub use partition::chunk_bounds;

#[derive(Debug, thiserror::Error)]
pub enum ReduceError {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("worker for chunk {chunk} failed: {reason}")]
    WorkerFailure { chunk: usize, reason: String },

    #[error("could not run worker for chunk {chunk}: no execution context available")]
    ResourceExhausted { chunk: usize },
}

/// Sum `values` using up to `workers` parallel tasks.
///
/// The worker count is clamped to the sequence length, so no task ever
/// receives an empty chunk; an empty sequence returns the additive identity
/// without spawning anything. Any worker failing aborts the whole call -
/// there is no partial-result fallback.
pub async fn chunked_sum<T>(values: &[T], workers: usize) -> Result<T, ReduceError>
where
    T: Copy + Send + Sync + Default + Sum<T> + 'static,
{
    if workers == 0 {
        return Err(ReduceError::InvalidWorkerCount);
    }

    if values.is_empty() {
        return Ok(T::default());
    }

    let bounds = partition::chunk_bounds(values.len(), workers);
    debug!(
        "Reducing {} elements across {} chunks",
        values.len(),
        bounds.len()
    );

    // One shared read-only copy of the input; each task reads only its own
    // disjoint range.
    let shared: Arc<[T]> = Arc::from(values);

    let handles: Vec<_> = bounds
        .into_iter()
        .map(|range| {
            let data = Arc::clone(&shared);
            tokio::task::spawn_blocking(move || data[range].iter().copied().sum::<T>())
        })
        .collect();

    // Reduction barrier: wait for every worker before combining anything.
    let joined = join_all(handles).await;

    let mut partials = Vec::with_capacity(joined.len());
    for (chunk, result) in joined.into_iter().enumerate() {
        match result {
            Ok(partial) => partials.push(partial),
            Err(err) if err.is_panic() => {
                return Err(ReduceError::WorkerFailure {
                    chunk,
                    reason: panic_reason(err.into_panic()),
                });
            }
            Err(_) => return Err(ReduceError::ResourceExhausted { chunk }),
        }
    }

    Ok(partials.into_iter().sum())
}

fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sums_one_through_ten_with_three_workers() {
        let values: Vec<i64> = (1..=10).collect();
        // Chunks [1,2,3] [4,5,6] [7,8,9,10] -> 6 + 15 + 34.
        assert_eq!(chunked_sum(&values, 3).await.unwrap(), 55);
    }

    #[tokio::test]
    async fn empty_sequence_returns_zero() {
        let values: Vec<i64> = Vec::new();
        assert_eq!(chunked_sum(&values, 4).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn one_worker_matches_one_element_per_worker() {
        let values: Vec<i64> = (1..=37).map(|i| i * 3 - 7).collect();
        let expected: i64 = values.iter().sum();
        assert_eq!(chunked_sum(&values, 1).await.unwrap(), expected);
        assert_eq!(
            chunked_sum(&values, values.len()).await.unwrap(),
            expected
        );
    }

    #[tokio::test]
    async fn matches_sequential_sum_for_many_worker_counts() {
        let values: Vec<i64> = (0..1000).map(|i| i * i - 500).collect();
        let expected: i64 = values.iter().sum();
        for workers in [1, 2, 3, 7, 16, 999, 1000, 5000] {
            assert_eq!(chunked_sum(&values, workers).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn float_sum_is_close_to_sequential() {
        let values: Vec<f64> = (1..=10_000).map(|i| 1.0 / i as f64).collect();
        let expected: f64 = values.iter().sum();
        let total = chunked_sum(&values, 8).await.unwrap();
        assert!((total - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn zero_workers_is_rejected_before_dispatch() {
        let values = vec![1i64, 2, 3];
        let err = chunked_sum(&values, 0).await.unwrap_err();
        assert!(matches!(err, ReduceError::InvalidWorkerCount));
    }

    #[test]
    fn resource_exhaustion_message_names_the_worker_shortage() {
        let err = ReduceError::ResourceExhausted { chunk: 2 };
        let message = err.to_string();
        assert!(message.contains("chunk 2"));
        assert!(message.contains("no execution context available"));
    }

    #[tokio::test]
    async fn worker_panic_fails_the_whole_reduction() {
        #[derive(Clone, Copy, Debug, Default)]
        struct Poison;

        impl std::iter::Sum for Poison {
            fn sum<I: Iterator<Item = Poison>>(_: I) -> Self {
                panic!("poisoned chunk")
            }
        }

        let values = vec![Poison; 6];
        let err = chunked_sum(&values, 2).await.unwrap_err();
        match err {
            ReduceError::WorkerFailure { reason, .. } => {
                assert!(reason.contains("poisoned chunk"));
            }
            other => panic!("expected WorkerFailure, got {other:?}"),
        }
    }
}
