//! Unit tests for the BFS distance oracle.

use rstest::rstest;

use crate::{RingGraph, ShortcutSet};

use super::*;

fn ring_graph(n: usize) -> Graph {
    Graph::ring(&RingGraph::build(n).expect("valid ring"))
}

fn ring_with(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let ring = RingGraph::build(n).expect("valid ring");
    let layout = ShortcutSet::from_pairs(&ring, pairs.iter().copied()).expect("valid pairs");
    Graph::with_shortcuts(&ring, &layout.shortcuts).expect("layout fits the ring")
}

#[rstest]
#[case(3, 1)]
#[case(4, 2)]
#[case(6, 3)]
#[case(7, 3)]
#[case(10, 5)]
#[case(101, 50)]
fn bare_ring_diameter_is_half_the_ring(#[case] n: usize, #[case] expected: u32) {
    let graph = ring_graph(n);
    let matrix = all_pairs_distances(&graph);
    assert_eq!(diameter(&matrix), Ok(expected));
    assert_eq!(graph_diameter(&graph), Ok(expected));
}

#[test]
fn single_opposite_shortcut_keeps_ten_ring_diameter() {
    // Nodes 2 and 7 stay five hops apart around either side of the chord.
    let graph = ring_with(10, &[(0, 5)]);
    assert_eq!(graph_diameter(&graph), Ok(5));
    assert_eq!(all_pairs_distances(&graph).get(2, 7), Some(5));
}

#[test]
fn crossing_shortcuts_shrink_a_twelve_ring() {
    let graph = ring_with(12, &[(0, 6), (3, 9)]);
    assert_eq!(graph_diameter(&graph), Ok(4));
}

#[test]
fn matrix_is_symmetric_with_zero_diagonal() {
    let graph = ring_with(12, &[(0, 6), (3, 9)]);
    let matrix = all_pairs_distances(&graph);
    for from in 0..12 {
        assert_eq!(matrix.get(from, from), Some(0));
        for to in 0..12 {
            assert_eq!(matrix.get(from, to), matrix.get(to, from));
        }
    }
    assert!(matrix.is_connected());
}

#[test]
fn disconnected_graph_measures_reachable_pairs_only() {
    let graph = Graph::from_edges(5, [(0, 1), (1, 2), (3, 4)]).expect("valid pairs");
    let matrix = all_pairs_distances(&graph);
    assert_eq!(matrix.get(0, 3), None);
    assert_eq!(matrix.row(0), Some(&[0, 1, 2, UNREACHABLE, UNREACHABLE][..]));
    assert_eq!(matrix.unreachable_pairs(), 6);
    assert!(!matrix.is_connected());
    assert_eq!(diameter(&matrix), Ok(2));
    assert_eq!(graph_diameter(&graph), Ok(2));
}

#[rstest]
#[case::no_nodes(0, vec![])]
#[case::single_node(1, vec![])]
#[case::isolated_nodes(4, vec![])]
fn graphs_without_reachable_pairs_have_no_diameter(
    #[case] node_count: usize,
    #[case] pairs: Vec<(usize, usize)>,
) {
    let graph = Graph::from_edges(node_count, pairs).expect("valid pairs");
    let expected = Err(SweepError::EmptyGraph { node_count });
    assert_eq!(diameter(&all_pairs_distances(&graph)), expected);
    assert_eq!(graph_diameter(&graph), expected);
}

#[test]
fn out_of_range_lookups_return_none() {
    let matrix = all_pairs_distances(&ring_graph(4));
    assert_eq!(matrix.get(4, 0), None);
    assert_eq!(matrix.row(9), None);
    assert_eq!(matrix.eccentricity(9), None);
}

#[test]
fn eccentricity_reflects_hub_position() {
    let graph = ring_with(9, &[(0, 3), (0, 6)]);
    let matrix = all_pairs_distances(&graph);
    assert_eq!(matrix.eccentricity(0), Some(2));
    assert_eq!(matrix.eccentricity(2), Some(4));
    assert_eq!(diameter(&matrix), Ok(4));
}
