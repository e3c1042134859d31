//! Sequential Kruskal oracle for property verification.

/// Minimum spanning forest computed by the oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: u64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest by sorting edges on
/// `(weight, edge id)` and adding every edge that joins two trees.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, u64)],
) -> OracleForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&id| (edges[id].2, id));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: vertex_count,
    };
    for id in order {
        let (source, target, weight) = edges[id];
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        if source_root != target_root {
            parent[target_root] = source_root;
            forest.total_weight += weight;
            forest.edge_count += 1;
            forest.component_count -= 1;
        }
    }
    forest
}

/// Finds the root of `node` with path halving.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_vertex_graph_weighs_nineteen() {
        let edges = [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)];
        assert_eq!(
            sequential_kruskal(4, &edges),
            OracleForest {
                total_weight: 19,
                edge_count: 3,
                component_count: 1,
            }
        );
    }

    #[test]
    fn counts_components_of_a_forest() {
        let edges = [(0, 1, 3), (2, 3, 4), (3, 2, 1)];
        assert_eq!(
            sequential_kruskal(5, &edges),
            OracleForest {
                total_weight: 4,
                edge_count: 2,
                component_count: 3,
            }
        );
    }
}
