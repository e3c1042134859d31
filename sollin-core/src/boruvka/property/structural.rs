//! Property 2: structural invariants of the returned tree.
//!
//! For connected fixtures the selected edges must number `V - 1`, be
//! distinct, form an acyclic spanning subgraph, and sum to the reported
//! weight. The component history must start at `V`, strictly decrease to
//! one, and the run must finish within the iteration bound.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningTree, iteration_bound};

use super::{equivalence::run_fixture, oracle::find_root, types::SollinFixture};

pub(super) fn run_structural_invariants_property(fixture: &SollinFixture) -> TestCaseResult {
    let Ok(tree) = run_fixture(fixture, fixture.worker_count)? else {
        // Disconnected fixtures are covered by the oracle property.
        return Ok(());
    };

    check_edges(fixture, &tree)?;
    check_history(fixture, &tree)
}

fn check_edges(fixture: &SollinFixture, tree: &SpanningTree<u64>) -> TestCaseResult {
    let expected = fixture.vertex_count - 1;
    if tree.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges, expected {expected} ({})",
            tree.edges().len(),
            fixture.describe(),
        )));
    }

    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut total = 0_u64;
    for &id in tree.edges() {
        let (source, target, weight) = *fixture.edges.get(id).ok_or_else(|| {
            TestCaseError::fail(format!("edge id {id} is out of range ({})", fixture.describe()))
        })?;
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        if source_root == target_root {
            return Err(TestCaseError::fail(format!(
                "edge {id} closes a cycle or repeats an edge ({})",
                fixture.describe(),
            )));
        }
        parent[target_root] = source_root;
        total += weight;
    }

    if total != tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "selected edges sum to {total} but reported weight is {} ({})",
            tree.total_weight(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn check_history(fixture: &SollinFixture, tree: &SpanningTree<u64>) -> TestCaseResult {
    let history = tree.component_history();
    if history.first() != Some(&fixture.vertex_count) || history.last() != Some(&1) {
        return Err(TestCaseError::fail(format!(
            "history {history:?} must run from {} to 1 ({})",
            fixture.vertex_count,
            fixture.describe(),
        )));
    }
    if history.windows(2).any(|pair| pair[1] >= pair[0]) {
        return Err(TestCaseError::fail(format!(
            "history {history:?} is not strictly decreasing ({})",
            fixture.describe(),
        )));
    }
    if history.len() != tree.iterations() + 1 {
        return Err(TestCaseError::fail(format!(
            "history has {} entries for {} iterations ({})",
            history.len(),
            tree.iterations(),
            fixture.describe(),
        )));
    }

    let bound = iteration_bound(fixture.vertex_count);
    if tree.iterations() > bound {
        return Err(TestCaseError::fail(format!(
            "{} iterations exceed the bound of {bound} ({})",
            tree.iterations(),
            fixture.describe(),
        )));
    }
    Ok(())
}
