//! Error types for the Sollin core library.
//!
//! Defines the error enums exposed by the public API, their stable codes, and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::EdgeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating a [`crate::Graph`].
///
/// Every variant is fatal before the first iteration; no partial graph is
/// accepted.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared zero vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// Position of the offending edge in the edge list.
        edge: EdgeId,
        /// The out-of-range vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a weight that cannot be totally ordered.
    #[error("edge {edge} has a weight that is not totally ordered")]
    InvalidWeight {
        /// Position of the offending edge in the edge list.
        edge: EdgeId,
    },
    /// The number of supplied edges differs from the declared edge count.
    #[error("graph declared {declared} edges but {found} were supplied")]
    EdgeCountMismatch {
        /// Edge count announced by the input header.
        declared: usize,
        /// Edge count actually present.
        found: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph declared zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge carried a weight that cannot be totally ordered.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// The number of supplied edges differs from the declared count.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "GRAPH_EDGE_COUNT_MISMATCH",
    }
}

/// An error raised by a [`crate::Collective`] implementation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TransportError {
    /// Another member of the group failed and the group was torn down.
    #[error("a peer failed before reaching the collective")]
    PeerFailed,
    /// Members contributed buffers of different lengths to one collective.
    #[error("collective buffer has length {found} but the peer sent {expected}")]
    LengthMismatch {
        /// Length announced by the sending member.
        expected: usize,
        /// Length of the local buffer.
        found: usize,
    },
    /// Members contributed buffers of different element types to one
    /// collective.
    #[error("collective payload type does not match the local buffer")]
    PayloadMismatch,
    /// A member addressed a rank outside the group.
    #[error("rank {rank} is outside a group of {size}")]
    InvalidRank {
        /// The requested rank.
        rank: usize,
        /// Number of members in the group.
        size: usize,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TransportError`] variants.
    enum TransportErrorCode for TransportError {
        /// Another member of the group failed.
        PeerFailed => PeerFailed => "TRANSPORT_PEER_FAILED",
        /// Members contributed buffers of different lengths.
        LengthMismatch => LengthMismatch { .. } => "TRANSPORT_LENGTH_MISMATCH",
        /// Members contributed buffers of different element types.
        PayloadMismatch => PayloadMismatch => "TRANSPORT_PAYLOAD_MISMATCH",
        /// A member addressed a rank outside the group.
        InvalidRank => InvalidRank { .. } => "TRANSPORT_INVALID_RANK",
        /// A synchronisation primitive became poisoned.
        LockPoisoned => LockPoisoned { .. } => "TRANSPORT_LOCK_POISONED",
    }
}

/// Error type produced when configuring or running [`crate::Sollin`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SollinError {
    /// The worker count must be greater than zero.
    #[error("worker_count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// A worker rank fell outside the configured group.
    #[error("rank {rank} is outside a group of {worker_count} workers")]
    InvalidRank {
        /// The offending rank.
        rank: usize,
        /// Number of workers in the group.
        worker_count: usize,
    },
    /// The graph has more than one connected component, so no spanning tree
    /// exists.
    #[error(
        "graph is disconnected: {remaining} components remain after {iterations} iterations"
    )]
    DisconnectedGraph {
        /// Components left when the run stopped.
        remaining: usize,
        /// Iterations completed before the run stopped.
        iterations: usize,
    },
    /// Accumulating the tree weight overflowed the weight type.
    #[error("MST weight overflowed while adding edge {edge} in iteration {iteration}")]
    WeightOverflow {
        /// Edge whose weight could not be added.
        edge: EdgeId,
        /// Iteration in which the overflow occurred.
        iteration: usize,
    },
    /// A worker thread panicked.
    #[error("worker {rank} panicked")]
    WorkerPanicked {
        /// Rank of the worker that panicked.
        rank: usize,
    },
    /// A collective operation failed.
    #[error("worker transport failed: {source}")]
    Transport {
        /// Underlying transport failure.
        #[from]
        source: TransportError,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("invariant violated: {invariant} (index {index}, bound {bound})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The index that violated the invariant.
        index: usize,
        /// The bound the index was checked against.
        bound: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SollinError`] variants.
    enum SollinErrorCode for SollinError {
        /// The worker count must be greater than zero.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "SOLLIN_INVALID_WORKER_COUNT",
        /// A worker rank fell outside the configured group.
        InvalidRank => InvalidRank { .. } => "SOLLIN_INVALID_RANK",
        /// The graph has more than one connected component.
        DisconnectedGraph => DisconnectedGraph { .. } => "SOLLIN_DISCONNECTED_GRAPH",
        /// Accumulating the tree weight overflowed the weight type.
        WeightOverflow => WeightOverflow { .. } => "SOLLIN_WEIGHT_OVERFLOW",
        /// A worker thread panicked.
        WorkerPanicked => WorkerPanicked { .. } => "SOLLIN_WORKER_PANICKED",
        /// A collective operation failed.
        TransportFailure => Transport { .. } => "SOLLIN_TRANSPORT_FAILURE",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "SOLLIN_INVARIANT_VIOLATION",
    }
}

impl SollinError {
    /// Retrieve the inner [`TransportErrorCode`] when the error originated in a
    /// collective operation.
    #[must_use]
    pub const fn transport_code(&self) -> Option<TransportErrorCode> {
        match self {
            Self::Transport { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Returns `true` when the error only reports that some other worker
    /// failed first.
    pub(crate) const fn is_secondary(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: TransportError::PeerFailed
            }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SollinError>;
