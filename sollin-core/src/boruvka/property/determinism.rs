//! Property 3: independence from the worker count and the edge order.
//!
//! The `(weight, edge id)` ranking fixes which edge every component selects,
//! so the exact selection must match between one worker and the fixture's
//! worker count, and between repeated runs. Reversing the edge list changes
//! edge ids but never the total weight.

use std::num::NonZeroUsize;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeId, Result, SpanningTree, sollin::Sollin};

use super::{equivalence::run_fixture, types::SollinFixture};

const REPETITIONS: usize = 3;

/// Everything in a run's outcome except the worker count.
type Selection = Result<(u64, Vec<EdgeId>, usize, Vec<usize>)>;

fn selection(outcome: Result<SpanningTree<u64>>) -> Selection {
    outcome.map(|tree| {
        (
            tree.total_weight(),
            tree.edges().to_vec(),
            tree.iterations(),
            tree.component_history().to_vec(),
        )
    })
}

pub(super) fn run_worker_count_independence_property(fixture: &SollinFixture) -> TestCaseResult {
    let baseline = selection(run_fixture(fixture, 1)?);
    for run in 0..REPETITIONS {
        let outcome = selection(run_fixture(fixture, fixture.worker_count)?);
        if outcome != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: {outcome:?} differs from the single-worker {baseline:?} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

pub(super) fn run_edge_order_independence_property(fixture: &SollinFixture) -> TestCaseResult {
    let workers = NonZeroUsize::new(fixture.worker_count)
        .ok_or_else(|| TestCaseError::fail("fixture worker count must be non-zero"))?;
    let sollin = Sollin::new(workers, false);
    let forward = sollin.run(&fixture.graph().map_err(TestCaseError::fail)?);
    let reversed = sollin.run(&fixture.reversed_graph().map_err(TestCaseError::fail)?);

    let same = match (&forward, &reversed) {
        (Ok(left), Ok(right)) => left.total_weight() == right.total_weight(),
        (Err(left), Err(right)) => left.code() == right.code(),
        _ => false,
    };
    if same {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "forward {forward:?} and reversed {reversed:?} disagree ({})",
            fixture.describe(),
        )))
    }
}
