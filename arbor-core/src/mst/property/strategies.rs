//! Strategy builders for MST property-based tests.
//!
//! Every generator writes symmetric weights into a row-major buffer. The
//! connected distributions lay down a random spanning chain first, so only
//! [`WeightDistribution::Disconnected`] fixtures lack a spanning tree.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{AdjacencyMatrix, pairwise_distances};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs and point clouds.
const DENSE_MAX_NODES: usize = 24;

/// Generates MST fixtures covering every weight distribution, biased
/// towards tied weights.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::PointCloud),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_random_graph(rng, MAX_NODES, (0.2, 0.6), |r| {
            r.gen_range(0.1..100.0)
        })
        .into_fixture(distribution),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_random_graph(rng, DENSE_MAX_NODES, (0.7, 0.95), |r| {
            r.gen_range(0.1..100.0)
        })
        .into_fixture(distribution),
        WeightDistribution::PointCloud => generate_point_cloud(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Symmetric row-major weight buffer under construction.
struct WeightBuffer {
    order: usize,
    weights: Vec<f64>,
}

impl WeightBuffer {
    fn new(order: usize) -> Self {
        Self {
            order,
            weights: vec![0.0; order * order],
        }
    }

    fn set(&mut self, a: usize, b: usize, weight: f64) {
        self.weights[a * self.order + b] = weight;
        self.weights[b * self.order + a] = weight;
    }

    /// Links `vertices` into a chain in the given order.
    fn chain(&mut self, vertices: &[usize], mut weight: impl FnMut() -> f64) {
        for pair in vertices.windows(2) {
            self.set(pair[0], pair[1], weight());
        }
    }

    fn into_fixture(self, distribution: WeightDistribution) -> MstFixture {
        let graph = AdjacencyMatrix::try_from_row_major(self.order, self.weights)
            .expect("generated weights must form a valid graph");
        MstFixture {
            graph,
            distribution,
        }
    }
}

/// Builds a random spanning chain, then adds each remaining pair with a
/// sampled probability.
fn generate_random_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> WeightBuffer {
    let order = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut buffer = WeightBuffer::new(order);

    let mut perm: Vec<usize> = (0..order).collect();
    perm.shuffle(rng);
    for pair in perm.windows(2) {
        buffer.set(pair[0], pair[1], weight(rng));
    }

    for i in 0..order {
        for j in (i + 1)..order {
            if rng.gen_bool(edge_probability) {
                buffer.set(i, j, weight(rng));
            }
        }
    }
    buffer
}

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    generate_random_graph(rng, MAX_NODES, (0.3, 0.7), |r| {
        pool[r.gen_range(0..pool.len())]
    })
    .into_fixture(WeightDistribution::ManyIdentical)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let order = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut buffer = WeightBuffer::new(order);
    let mut perm: Vec<usize> = (0..order).collect();
    perm.shuffle(rng);
    for pair in perm.windows(2) {
        buffer.set(pair[0], pair[1], rng.gen_range(0.1..100.0));
    }

    let extra_count = rng.gen_range(order / 2..=order);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..order);
        let j = rng.gen_range(0..order);
        if i != j {
            buffer.set(i, j, rng.gen_range(0.1..100.0));
        }
    }
    buffer.into_fixture(WeightDistribution::Sparse)
}

fn generate_point_cloud(rng: &mut SmallRng) -> MstFixture {
    let count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let dimensions = rng.gen_range(2..=3);
    let points: Vec<Vec<f64>> = (0..count)
        .map(|_| (0..dimensions).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    let graph = pairwise_distances(&points).expect("generated points are finite and uniform");
    MstFixture {
        graph,
        distribution: WeightDistribution::PointCloud,
    }
}

/// Generates two to four components, each connected internally, with the
/// vertices of each component scattered across the index range.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let order: usize = sizes.iter().sum();
    let mut perm: Vec<usize> = (0..order).collect();
    perm.shuffle(rng);

    let mut buffer = WeightBuffer::new(order);
    let mut offset = 0;
    for size in sizes {
        let members = &perm[offset..offset + size];
        buffer.chain(members, || rng.gen_range(0.1..100.0));
        for (index, &a) in members.iter().enumerate() {
            for &b in &members[index + 1..] {
                if rng.gen_bool(0.4) {
                    buffer.set(a, b, rng.gen_range(0.1..100.0));
                }
            }
        }
        offset += size;
    }
    buffer.into_fixture(WeightDistribution::Disconnected)
}
