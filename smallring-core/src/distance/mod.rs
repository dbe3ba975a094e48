//! All-pairs shortest paths and graph diameter for unweighted graphs.
//!
//! Distances come from one breadth-first search per source node, which costs
//! `O(n * (n + e))` and matches an all-pairs shortest path algorithm exactly
//! on unweighted graphs. With the `parallel` feature the rows of the
//! [`DistanceMatrix`] are filled concurrently on the Rayon pool.
//!
//! Unreachable pairs are stored as [`UNREACHABLE`] and are ignored when taking
//! the diameter, so disconnected graphs are measured over the pairs that do
//! connect. [`DistanceMatrix::unreachable_pairs`] reports how many do not.

use std::collections::VecDeque;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Result, error::SweepError, graph::Graph};

/// Sentinel stored for pairs with no connecting path.
pub const UNREACHABLE: u32 = u32::MAX;

/// Row-major `n x n` table of hop counts.
///
/// The matrix is symmetric with a zero diagonal. It is never mutated after
/// [`all_pairs_distances`] returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    node_count: usize,
    distances: Vec<u32>,
}

impl DistanceMatrix {
    /// Returns the number of nodes covered by the matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the hop count between `from` and `to`, or `None` when the pair
    /// is unreachable or out of range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        self.distances
            .get(from * self.node_count + to)
            .copied()
            .filter(|&hops| hops != UNREACHABLE)
    }

    /// Returns the raw row for `from`, including [`UNREACHABLE`] entries.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[u32]> {
        if from >= self.node_count {
            return None;
        }
        let start = from * self.node_count;
        self.distances.get(start..start + self.node_count)
    }

    /// Returns the largest finite distance from `from` to any other node.
    #[must_use]
    pub fn eccentricity(&self, from: usize) -> Option<u32> {
        self.row(from).and_then(|row| row_maximum(from, row))
    }

    /// Counts unordered pairs of distinct nodes with no connecting path.
    #[must_use]
    pub fn unreachable_pairs(&self) -> usize {
        (0..self.node_count)
            .filter_map(|from| self.row(from).map(|row| (from, row)))
            .map(|(from, row)| {
                row.iter()
                    .skip(from + 1)
                    .filter(|&&hops| hops == UNREACHABLE)
                    .count()
            })
            .sum()
    }

    /// Returns `true` when every pair of nodes is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.unreachable_pairs() == 0
    }
}

/// Computes shortest-path hop counts between every pair of nodes.
///
/// Disconnected graphs are accepted; their missing paths are recorded as
/// [`UNREACHABLE`].
///
/// # Examples
/// ```
/// use smallring_core::{Graph, RingGraph, all_pairs_distances, diameter};
///
/// let ring = RingGraph::build(6).expect("valid ring");
/// let matrix = all_pairs_distances(&Graph::ring(&ring));
/// assert_eq!(matrix.get(0, 3), Some(3));
/// assert_eq!(matrix.get(1, 5), Some(2));
/// assert_eq!(diameter(&matrix).expect("ring is connected"), 3);
/// ```
#[must_use]
pub fn all_pairs_distances(graph: &Graph) -> DistanceMatrix {
    let node_count = graph.node_count();
    let mut distances = vec![UNREACHABLE; node_count * node_count];
    if node_count > 0 {
        fill_rows(graph, &mut distances);
    }
    DistanceMatrix {
        node_count,
        distances,
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(graph: &Graph, distances: &mut [u32]) {
    distances
        .par_chunks_mut(graph.node_count())
        .enumerate()
        .for_each_init(VecDeque::new, |queue, (source, row)| {
            breadth_first(graph, source, row, queue);
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(graph: &Graph, distances: &mut [u32]) {
    let mut queue = VecDeque::new();
    for (source, row) in distances.chunks_mut(graph.node_count()).enumerate() {
        breadth_first(graph, source, row, &mut queue);
    }
}

/// Returns the largest finite distance between two distinct nodes.
///
/// # Errors
/// Returns [`SweepError::EmptyGraph`] when no pair of distinct nodes is
/// connected, which includes graphs with zero or one node.
pub fn diameter(matrix: &DistanceMatrix) -> Result<u32> {
    (0..matrix.node_count())
        .filter_map(|from| matrix.eccentricity(from))
        .max()
        .ok_or(SweepError::EmptyGraph {
            node_count: matrix.node_count(),
        })
}

/// Computes the diameter without materialising the distance matrix.
///
/// Produces the same value as `diameter(&all_pairs_distances(graph))` while
/// holding a single row of `n` distances. Sweeps call this once per trial and
/// parallelise across trials instead of across rows.
///
/// # Errors
/// Returns [`SweepError::EmptyGraph`] when no pair of distinct nodes is
/// connected.
///
/// # Examples
/// ```
/// use smallring_core::{Graph, RingGraph, ShortcutSet, graph_diameter};
///
/// let ring = RingGraph::build(12).expect("valid ring");
/// assert_eq!(graph_diameter(&Graph::ring(&ring)).expect("connected"), 6);
///
/// let layout = ShortcutSet::from_pairs(&ring, [(0, 6), (3, 9)]).expect("valid pairs");
/// let graph = Graph::with_shortcuts(&ring, &layout.shortcuts).expect("layout fits the ring");
/// assert_eq!(graph_diameter(&graph).expect("connected"), 4);
/// ```
pub fn graph_diameter(graph: &Graph) -> Result<u32> {
    let node_count = graph.node_count();
    let mut row = vec![UNREACHABLE; node_count];
    let mut queue = VecDeque::with_capacity(node_count);
    let mut widest: Option<u32> = None;

    for source in 0..node_count {
        row.fill(UNREACHABLE);
        breadth_first(graph, source, &mut row, &mut queue);
        if let Some(eccentricity) = row_maximum(source, &row) {
            widest = Some(widest.map_or(eccentricity, |current| current.max(eccentricity)));
        }
    }

    widest.ok_or(SweepError::EmptyGraph { node_count })
}

/// Fills `row` with hop counts from `source`; `row` must start as all
/// [`UNREACHABLE`].
fn breadth_first(graph: &Graph, source: usize, row: &mut [u32], queue: &mut VecDeque<usize>) {
    queue.clear();
    row[source] = 0;
    queue.push_back(source);
    while let Some(node) = queue.pop_front() {
        let next = row[node] + 1;
        for &neighbour in graph.neighbours(node) {
            if row[neighbour] == UNREACHABLE {
                row[neighbour] = next;
                queue.push_back(neighbour);
            }
        }
    }
}

fn row_maximum(source: usize, row: &[u32]) -> Option<u32> {
    row.iter()
        .enumerate()
        .filter(|&(target, &hops)| target != source && hops != UNREACHABLE)
        .map(|(_, &hops)| hops)
        .max()
}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
