//! Builder utilities for configuring Sollin runs.
//!
//! Validates the worker group configuration before constructing [`Sollin`]
//! instances.

use std::{num::NonZeroUsize, thread};

use crate::{Result, error::SollinError, sollin::Sollin};

/// Configures and constructs [`Sollin`] instances.
///
/// # Examples
/// ```
/// use sollin_core::SollinBuilder;
///
/// let sollin = SollinBuilder::new()
///     .with_worker_count(4)
///     .with_edge_recording(false)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(sollin.worker_count().get(), 4);
/// assert!(!sollin.records_edges());
/// ```
#[derive(Debug, Clone)]
pub struct SollinBuilder {
    worker_count: usize,
    record_edges: bool,
}

impl Default for SollinBuilder {
    fn default() -> Self {
        Self {
            worker_count: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            record_edges: true,
        }
    }
}

impl SollinBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// The worker count defaults to the available parallelism of the host, or
    /// one when that cannot be determined.
    ///
    /// # Examples
    /// ```
    /// use sollin_core::SollinBuilder;
    ///
    /// let builder = SollinBuilder::new();
    /// assert!(builder.worker_count() >= 1);
    /// assert!(builder.records_edges());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of workers in the group.
    ///
    /// # Examples
    /// ```
    /// use sollin_core::SollinBuilder;
    ///
    /// let builder = SollinBuilder::new().with_worker_count(3);
    /// assert_eq!(builder.worker_count(), 3);
    /// ```
    #[must_use]
    pub const fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Returns the configured worker count.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Controls whether the selected edge ids are kept in the result.
    ///
    /// # Examples
    /// ```
    /// use sollin_core::SollinBuilder;
    ///
    /// let builder = SollinBuilder::new().with_edge_recording(false);
    /// assert!(!builder.records_edges());
    /// ```
    #[must_use]
    pub const fn with_edge_recording(mut self, record_edges: bool) -> Self {
        self.record_edges = record_edges;
        self
    }

    /// Returns `true` when selected edge ids will be recorded.
    #[must_use]
    pub const fn records_edges(&self) -> bool {
        self.record_edges
    }

    /// Validates the configuration and constructs a [`Sollin`] instance.
    ///
    /// # Errors
    /// Returns [`SollinError::InvalidWorkerCount`] when the worker count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use sollin_core::{SollinBuilder, SollinErrorCode};
    ///
    /// let err = SollinBuilder::new()
    ///     .with_worker_count(0)
    ///     .build()
    ///     .expect_err("zero workers must be rejected");
    /// assert_eq!(err.code(), SollinErrorCode::InvalidWorkerCount);
    /// ```
    pub fn build(self) -> Result<Sollin> {
        let worker_count =
            NonZeroUsize::new(self.worker_count).ok_or(SollinError::InvalidWorkerCount {
                got: self.worker_count,
            })?;

        Ok(Sollin::new(worker_count, self.record_edges))
    }
}
