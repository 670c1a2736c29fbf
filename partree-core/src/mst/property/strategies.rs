//! Strategy builders for merge loop property tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Connected distributions always start from a
//! random spanning path so every generated graph is connected; the
//! disconnected distribution builds isolated components.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 24;
/// Upper bound (exclusive) for continuous weights.
const MAX_WEIGHT: u32 = 10_000;

/// Generates fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Connected topology helper ───────────────────────────────────────────

/// Builds a connected topology: a random spanning path followed by each
/// remaining pair with probability sampled from `edge_prob_range`.
fn connected_pairs(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
) -> (usize, Vec<(usize, usize)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let mut pairs = spanning_path(vertex_count, rng);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                pairs.push((i, j));
            }
        }
    }

    (vertex_count, pairs)
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph where each edge has a distinct weight, so the minimum
/// spanning tree is unique.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, pairs) = connected_pairs(rng, MAX_VERTICES, (0.1, 0.4));
    let mut weights: Vec<u32> = (1..).take(pairs.len()).collect();
    shuffle(&mut weights, rng);

    MstFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .zip(weights)
            .map(|((a, b), w)| (a, b, w))
            .collect(),
        distribution: WeightDistribution::Unique,
    }
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// This is the most important stress case for the insertion-order
/// tie-break and for stale-edge discarding.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<u32> = (0..weight_pool_size)
        .map(|_| rng.gen_range(1_u32..=10))
        .collect();
    let (vertex_count, pairs) = connected_pairs(rng, MAX_VERTICES, (0.3, 0.7));

    MstFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .map(|(a, b)| (a, b, weight_pool[rng.gen_range(0..weight_pool.len())]))
            .collect(),
        distribution: WeightDistribution::ManyIdentical,
    }
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph from a random spanning path plus a small
/// number of extra edges, which may duplicate existing pairs or be
/// self-loops.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges: Vec<(usize, usize, u32)> = spanning_path(vertex_count, rng)
        .into_iter()
        .map(|(a, b)| (a, b, rng.gen_range(0..MAX_WEIGHT)))
        .collect();

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        edges.push((i, j, rng.gen_range(0..MAX_WEIGHT)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph, with vertex count
/// capped at [`DENSE_MAX_VERTICES`].
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, pairs) = connected_pairs(rng, DENSE_MAX_VERTICES, (0.7, 0.95));

    MstFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .map(|(a, b)| (a, b, rng.gen_range(0..MAX_WEIGHT)))
            .collect(),
        distribution: WeightDistribution::Dense,
    }
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each internally connected. No
/// cross-component edges are created.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();

    // Vertices are interleaved across components so the collection order
    // does not group a component together.
    let mut labels: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut labels, rng);

    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &component_sizes {
        let members = &labels[offset..offset + size];
        for (a, b) in spanning_path(size, rng) {
            edges.push((members[a], members[b], rng.gen_range(0..MAX_WEIGHT)));
        }
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.3) {
                    edges.push((members[i], members[j], rng.gen_range(0..MAX_WEIGHT)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns the pairs of a random Hamiltonian path over `0..vertex_count`.
fn spanning_path(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    perm.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually because we want biased weighting (ManyIdentical is the most
// important stress case).
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
