//! Local cheapest-edge discovery over one worker's edge range.

use std::{cmp::Ordering, ops::Range};

use crate::{
    Result,
    error::SollinError,
    graph::{EdgeId, Graph},
    weight::Weight,
};

use super::{dsu::DisjointSetForest, reduce::CheapestEdges};

/// Records, for every component touched by `range`, the cheapest edge that
/// leaves it.
///
/// Edges whose endpoints already share a root are skipped. Within the range a
/// later edge only displaces a stored one when it is strictly lighter, so
/// equal weights keep the lower edge id.
pub(super) fn find_cheapest_edges<W: Weight>(
    graph: &Graph<W>,
    range: Range<EdgeId>,
    forest: &mut DisjointSetForest,
    cheapest: &mut CheapestEdges,
) -> Result<()> {
    let edges = graph
        .edges()
        .get(range.clone())
        .ok_or(SollinError::InvariantViolation {
            invariant: "worker edge range must lie within the edge list",
            index: range.end,
            bound: graph.edge_count(),
        })?;

    let slots = cheapest.slots_mut();
    for (id, edge) in range.zip(edges) {
        let source_root = forest.find(edge.source());
        let target_root = forest.find(edge.target());
        if source_root == target_root {
            continue;
        }

        for root in [source_root, target_root] {
            let slot = &mut slots[root];
            let displaces = match *slot {
                None => true,
                Some(current) => {
                    graph.edges()[current].weight().compare(&edge.weight()) == Ordering::Greater
                }
            };
            if displaces {
                *slot = Some(id);
            }
        }
    }

    Ok(())
}
