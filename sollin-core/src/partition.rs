//! Deterministic edge-range partitioning.
//!
//! Every worker derives its own slice of the edge list from
//! `(edge_count, worker_count, rank)` alone, so no communication is needed to
//! agree on the split. The first `edge_count % worker_count` ranks receive one
//! extra edge.

use std::{num::NonZeroUsize, ops::Range};

use crate::{Result, error::SollinError, graph::EdgeId};

/// Returns the half-open edge-id range owned by `rank`.
///
/// # Errors
/// Returns [`SollinError::InvalidRank`] when `rank >= worker_count`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use sollin_core::edge_range;
///
/// let workers = NonZeroUsize::new(3).expect("non-zero");
/// assert_eq!(edge_range(10, workers, 0)?, 0..4);
/// assert_eq!(edge_range(10, workers, 1)?, 4..7);
/// assert_eq!(edge_range(10, workers, 2)?, 7..10);
/// # Ok::<(), sollin_core::SollinError>(())
/// ```
pub fn edge_range(
    edge_count: usize,
    worker_count: NonZeroUsize,
    rank: usize,
) -> Result<Range<EdgeId>> {
    let workers = worker_count.get();
    if rank >= workers {
        return Err(SollinError::InvalidRank {
            rank,
            worker_count: workers,
        });
    }

    let base = edge_count / worker_count;
    let extra = edge_count % worker_count;
    let start = rank * base + rank.min(extra);
    let len = if rank < extra { base + 1 } else { base };
    Ok(start..start + len)
}

/// Returns every worker's range in rank order.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use sollin_core::partitions;
///
/// let ranges = partitions(2, NonZeroUsize::new(4).expect("non-zero"));
/// assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);
/// ```
#[must_use]
pub fn partitions(edge_count: usize, worker_count: NonZeroUsize) -> Vec<Range<EdgeId>> {
    (0..worker_count.get())
        .filter_map(|rank| edge_range(edge_count, worker_count, rank).ok())
        .collect()
}
