//! Property-based tests for the BFS distance oracle.
//!
//! Compares BFS distances against a dense Floyd-Warshall oracle on small
//! random graphs, checks that the streamed diameter agrees with the matrix
//! diameter, and checks that shortcuts never widen a ring.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::test_utils::suite_proptest_config;
use crate::{Graph, RingGraph, ShortcutSampler, ShortcutSet};

use super::{UNREACHABLE, all_pairs_distances, diameter, graph_diameter};

/// Shape of the generated graph.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
enum Topology {
    /// Independent coin flip per node pair.
    Random,
    /// Ring plus a few random shortcuts.
    RingWithShortcuts,
    /// Two random halves with no edge between them.
    Split,
}

#[derive(Clone, Debug)]
struct Fixture {
    node_count: usize,
    pairs: Vec<(usize, usize)>,
}

fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate(topology, &mut rng)
    })
}

fn generate(topology: Topology, rng: &mut SmallRng) -> Fixture {
    match topology {
        Topology::Random => {
            let node_count = rng.gen_range(1..=24);
            let probability = rng.gen_range(0.05..0.5);
            Fixture {
                node_count,
                pairs: random_pairs(0..node_count, probability, rng),
            }
        }
        Topology::RingWithShortcuts => {
            let node_count = rng.gen_range(3..=24);
            let ring = RingGraph::build(node_count).unwrap_or_else(|err| panic!("{err}"));
            let k = rng.gen_range(0..=ring.eligible_shortcut_count().min(6));
            let shortcuts = ShortcutSampler::new(&ring)
                .sample(k, rng)
                .unwrap_or_else(|err| panic!("{err}"));
            let pairs = ring
                .edges()
                .chain(shortcuts.iter().copied())
                .map(|edge| (edge.low(), edge.high()))
                .collect();
            Fixture { node_count, pairs }
        }
        Topology::Split => {
            let left = rng.gen_range(1..=10);
            let right = rng.gen_range(1..=10);
            let mut pairs = random_pairs(0..left, 0.4, rng);
            pairs.extend(random_pairs(left..left + right, 0.4, rng));
            Fixture {
                node_count: left + right,
                pairs,
            }
        }
    }
}

fn random_pairs(
    nodes: std::ops::Range<usize>,
    probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for a in nodes.clone() {
        for b in (a + 1)..nodes.end {
            if rng.gen_bool(probability) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

/// Dense all-pairs shortest paths used as the reference answer.
fn floyd_warshall(fixture: &Fixture) -> Vec<Vec<u32>> {
    let n = fixture.node_count;
    let mut dist = vec![vec![UNREACHABLE; n]; n];
    for (node, row) in dist.iter_mut().enumerate() {
        row[node] = 0;
    }
    for &(a, b) in &fixture.pairs {
        dist[a][b] = 1;
        dist[b][a] = 1;
    }
    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                let (left, right) = (dist[from][via], dist[via][to]);
                if left != UNREACHABLE && right != UNREACHABLE && left + right < dist[from][to] {
                    dist[from][to] = left + right;
                }
            }
        }
    }
    dist
}

fn build(fixture: &Fixture) -> Graph {
    Graph::from_edges(fixture.node_count, fixture.pairs.iter().copied())
        .unwrap_or_else(|err| panic!("fixture edges must be valid: {err}"))
}

fn run_oracle_equivalence(fixture: &Fixture) -> Result<(), TestCaseError> {
    let graph = build(fixture);
    let matrix = all_pairs_distances(&graph);
    let expected = floyd_warshall(fixture);
    for (from, row) in expected.iter().enumerate() {
        prop_assert_eq!(matrix.row(from), Some(row.as_slice()));
    }
    Ok(())
}

fn run_streamed_diameter_agreement(fixture: &Fixture) -> Result<(), TestCaseError> {
    let graph = build(fixture);
    prop_assert_eq!(graph_diameter(&graph), diameter(&all_pairs_distances(&graph)));
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn bfs_matches_floyd_warshall(fixture in fixture_strategy()) {
        run_oracle_equivalence(&fixture)?;
    }

    #[test]
    fn streamed_diameter_matches_matrix_diameter(fixture in fixture_strategy()) {
        run_streamed_diameter_agreement(&fixture)?;
    }

    #[test]
    fn a_single_shortcut_never_widens_the_ring(
        n in 4_usize..40,
        a in 0_usize..40,
        b in 0_usize..40,
    ) {
        let ring = RingGraph::build(n).unwrap_or_else(|err| panic!("{err}"));
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b && !ring.is_ring_adjacent(a, b));
        let layout = ShortcutSet::from_pairs(&ring, [(a, b)])
            .unwrap_or_else(|err| panic!("{err}"));
        let graph = Graph::with_shortcuts(&ring, &layout.shortcuts)
            .unwrap_or_else(|err| panic!("{err}"));
        let before = graph_diameter(&Graph::ring(&ring)).unwrap_or_else(|err| panic!("{err}"));
        let after = graph_diameter(&graph).unwrap_or_else(|err| panic!("{err}"));
        prop_assert!(after <= before, "{} widened {}", after, before);
    }
}

#[rstest::rstest]
#[case::random(Topology::Random, 42)]
#[case::random_alt(Topology::Random, 999)]
#[case::ring(Topology::RingWithShortcuts, 42)]
#[case::ring_alt(Topology::RingWithShortcuts, 7777)]
#[case::split(Topology::Split, 42)]
fn oracle_equivalence_on_fixed_seeds(#[case] topology: Topology, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate(topology, &mut rng);
    run_oracle_equivalence(&fixture).expect("BFS must match the oracle");
    run_streamed_diameter_agreement(&fixture).expect("diameters must agree");
}
