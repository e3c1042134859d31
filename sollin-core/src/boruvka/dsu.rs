//! Union-find (disjoint set union) forest over vertex ids.
//!
//! Every worker owns one forest. The leader's copy is authoritative and is the
//! only one on which [`DisjointSetForest::union`] is ever called; followers
//! overwrite their parent array from the leader's broadcast at the start of
//! each iteration. Path compression in [`DisjointSetForest::find`] only
//! rewrites the caller's own copy and never changes which root a vertex
//! reports, so compressed copies stay interchangeable with the broadcast one.

/// Parent and rank arrays of a union-find forest.
///
/// # Examples
/// ```
/// use sollin_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// let root = forest.union(0, 1);
/// forest.union(2, 3);
/// assert_eq!(forest.find(1), root);
/// assert_ne!(forest.find(0), forest.find(3));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSetForest {
    /// Creates `n` singleton sets, `parent[i] = i` and `rank[i] = 0`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the number of vertices tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the parent array.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parent }

    /// Returns the parent array for overwriting by a broadcast.
    pub(crate) fn parents_mut(&mut self) -> &mut [usize] {
        &mut self.parent
    }

    /// Returns the representative of `node`'s set, compressing the path.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right` and returns the surviving
    /// root.
    ///
    /// The lower-rank root is attached under the higher-rank one. On equal
    /// ranks `right`'s root is attached under `left`'s and the survivor's rank
    /// grows by one.
    ///
    /// # Panics
    /// Panics when either id is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::test_utils::suite_proptest_config;

    #[test]
    fn starts_with_singletons() {
        let mut forest = DisjointSetForest::new(3);
        assert_eq!(forest.parents(), &[0, 1, 2]);
        assert!((0..3).all(|node| forest.find(node) == node));
    }

    #[test]
    fn equal_ranks_attach_right_under_left() {
        let mut forest = DisjointSetForest::new(2);
        assert_eq!(forest.union(0, 1), 0);
        assert_eq!(forest.parents(), &[0, 0]);
        assert_eq!(forest.rank, vec![1, 0]);
    }

    #[test]
    fn lower_rank_root_attaches_under_higher_rank() {
        let mut forest = DisjointSetForest::new(3);
        forest.union(1, 2);
        assert_eq!(forest.union(0, 2), 1);
        assert_eq!(forest.find(0), 1);
        assert_eq!(forest.rank[1], 1);
    }

    #[test]
    fn find_compresses_paths_without_changing_roots() {
        let mut forest = DisjointSetForest::new(4);
        forest.parents_mut().copy_from_slice(&[0, 0, 1, 2]);
        assert_eq!(forest.find(3), 0);
        assert_eq!(forest.parents(), &[0, 0, 0, 0]);
    }

    #[test]
    fn union_of_members_of_one_set_is_a_no_op() {
        let mut forest = DisjointSetForest::new(3);
        forest.union(0, 1);
        let before = forest.clone();
        assert_eq!(forest.union(1, 0), 0);
        assert_eq!(forest, before);
    }

    proptest! {
        #![proptest_config(suite_proptest_config(256))]

        #[test]
        fn find_is_idempotent_after_any_unions(
            node_count in 1_usize..64,
            unions in proptest::collection::vec((0_usize..64, 0_usize..64), 0..128),
        ) {
            let mut forest = DisjointSetForest::new(node_count);
            for (left, right) in unions {
                forest.union(left % node_count, right % node_count);
            }
            for node in 0..node_count {
                let root = forest.find(node);
                prop_assert_eq!(forest.find(root), root);
                prop_assert_eq!(forest.parents()[root], root);
            }
        }

        #[test]
        fn compressed_copies_report_the_same_roots(
            node_count in 1_usize..48,
            unions in proptest::collection::vec((0_usize..48, 0_usize..48), 0..96),
            queries in proptest::collection::vec(0_usize..48, 0..48),
        ) {
            let mut authoritative = DisjointSetForest::new(node_count);
            for (left, right) in unions {
                authoritative.union(left % node_count, right % node_count);
            }
            let mut snapshot = authoritative.clone();
            for query in queries {
                snapshot.find(query % node_count);
            }
            for node in 0..node_count {
                prop_assert_eq!(snapshot.find(node), authoritative.find(node));
            }
        }
    }
}
