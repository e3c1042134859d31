//! Leader-only merge step.
//!
//! The reduced vector may name the same edge for both of its components, and
//! an earlier merge in the sweep can join two components whose later entries
//! still point at each other. Every candidate is therefore re-validated
//! against the live forest before it is accepted. Slots are visited in vertex
//! order so the set of skipped duplicates is deterministic.

use crate::{
    Result,
    error::SollinError,
    graph::{EdgeId, Graph},
    weight::Weight,
};

use super::{dsu::DisjointSetForest, reduce::CheapestEdges};

/// Run state owned by the leader between its merge and the next broadcast.
#[derive(Clone, Debug)]
pub(super) struct MergeCoordinator<W> {
    remaining: usize,
    total_weight: W,
    selected: Vec<EdgeId>,
    record_edges: bool,
}

impl<W: Weight> MergeCoordinator<W> {
    pub(super) fn new(vertex_count: usize, record_edges: bool) -> Self {
        Self {
            remaining: vertex_count,
            total_weight: W::ZERO,
            selected: Vec::new(),
            record_edges,
        }
    }

    #[rustfmt::skip]
    pub(super) fn remaining(&self) -> usize { self.remaining }

    #[rustfmt::skip]
    pub(super) fn total_weight(&self) -> W { self.total_weight }

    pub(super) fn into_selected(self) -> Vec<EdgeId> {
        self.selected
    }

    /// Applies the reduced choices to `forest` and returns how many components
    /// were merged.
    pub(super) fn merge(
        &mut self,
        graph: &Graph<W>,
        forest: &mut DisjointSetForest,
        cheapest: &CheapestEdges,
        iteration: usize,
    ) -> Result<usize> {
        let mut merged = 0;
        for &candidate in cheapest.slots() {
            let Some(id) = candidate else {
                continue;
            };
            let edge = graph.edge(id).ok_or(SollinError::InvariantViolation {
                invariant: "reduced candidate must be an edge of the graph",
                index: id,
                bound: graph.edge_count(),
            })?;

            let source_root = forest.find(edge.source());
            let target_root = forest.find(edge.target());
            if source_root == target_root {
                continue;
            }

            self.total_weight = self
                .total_weight
                .checked_accumulate(edge.weight())
                .ok_or(SollinError::WeightOverflow { edge: id, iteration })?;
            forest.union(source_root, target_root);
            self.remaining -= 1;
            merged += 1;
            if self.record_edges {
                self.selected.push(id);
            }
        }
        Ok(merged)
    }
}
