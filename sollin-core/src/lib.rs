//! Sollin core library.
//!
//! Computes minimum spanning trees with a parallel Borůvka/Sollin engine. A
//! fixed group of workers each scans a contiguous slice of the edge list for
//! the cheapest edge leaving every component, the findings are reduced to a
//! leader, and the leader merges components in a union-find forest before
//! broadcasting the new state. The loop repeats until a single component
//! remains.
//!
//! # Quick start
//!
//! ```
//! use sollin_core::{Edge, Graph, SollinBuilder};
//!
//! let graph = Graph::new(
//!     4,
//!     vec![
//!         Edge::new(0, 1, 10_u64),
//!         Edge::new(0, 2, 6),
//!         Edge::new(0, 3, 5),
//!         Edge::new(1, 3, 15),
//!         Edge::new(2, 3, 4),
//!     ],
//! )?;
//! let sollin = SollinBuilder::new().with_worker_count(2).build()?;
//! let tree = sollin.run(&graph)?;
//! assert_eq!(tree.total_weight(), 19);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the engine emits:
//!
//! - `sollin_iterations_total` (counter)
//! - `sollin_merges_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boruvka;
mod builder;
mod error;
mod graph;
mod partition;
mod result;
mod sollin;
mod transport;
mod weight;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    boruvka::{CheapestEdgeReducer, CheapestEdges, DisjointSetForest, iteration_bound, run_worker},
    builder::SollinBuilder,
    error::{
        GraphError, GraphErrorCode, Result, SollinError, SollinErrorCode, TransportError,
        TransportErrorCode,
    },
    graph::{Edge, EdgeId, Graph},
    partition::{edge_range, partitions},
    result::SpanningTree,
    sollin::Sollin,
    transport::{Collective, LEADER_RANK, SharedMemoryMember},
    weight::Weight,
};
