//! Graph generation strategies for the Sollin property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing case can be
//! replayed from its distribution and seed alone.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::types::{SollinFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay smaller to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WORKERS: usize = 8;

/// Generates fixtures across every distribution, biased towards ties.
pub(super) fn sollin_fixture_strategy() -> impl Strategy<Value = SollinFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one explicitly chosen distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> SollinFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            random_pairs(rng, MAX_VERTICES, (0.2, 0.6), |r| r.gen_range(1..1_000_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_pairs(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            random_pairs(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| r.gen_range(1..1_000))
        }
        WeightDistribution::Disconnected => disconnected(rng),
    };

    SollinFixture {
        vertex_count,
        edges,
        worker_count: rng.gen_range(1..=MAX_WORKERS),
        distribution,
    }
}

/// Adds each unordered pair with a sampled probability, plus a path over a
/// shuffled vertex order so the graph is always connected. Path weights come
/// from the same generator as the rest.
fn random_pairs(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u64,
) -> (usize, Vec<(usize, usize, u64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                edges.push(oriented(rng, source, target, w));
            }
        }
    }
    for (source, target) in shuffled_path(rng, 0, vertex_count) {
        let w = weight(rng);
        edges.push((source, target, w));
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, u64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges: Vec<_> = shuffled_path(rng, 0, vertex_count)
        .into_iter()
        .map(|(source, target)| (source, target, rng.gen_range(1..100)))
        .collect();
    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push((source, target, rng.gen_range(1..100)));
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, u64)>) {
    let mut vertex_count = 0;
    let mut edges = Vec::new();
    for _ in 0..rng.gen_range(2..=4) {
        let size = rng.gen_range(1..=12);
        for (source, target) in shuffled_path(rng, vertex_count, size) {
            edges.push((source, target, rng.gen_range(1..50)));
        }
        for _ in 0..size {
            let source = vertex_count + rng.gen_range(0..size);
            let target = vertex_count + rng.gen_range(0..size);
            edges.push((source, target, rng.gen_range(1..50)));
        }
        vertex_count += size;
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Returns the edges of a path visiting `offset..offset + size` in random
/// order.
fn shuffled_path(rng: &mut SmallRng, offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (offset..offset + size).collect();
    order.shuffle(rng);
    order.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

fn oriented(rng: &mut SmallRng, source: usize, target: usize, weight: u64) -> (usize, usize, u64) {
    if rng.gen_bool(0.5) {
        (source, target, weight)
    } else {
        (target, source, weight)
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
