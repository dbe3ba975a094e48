//! Undirected, unweighted graphs in compressed adjacency form.
//!
//! Each trial assembles a fresh [`Graph`] from the shared ring and its own
//! shortcut set, hands it to the distance oracle, and drops it. Adjacency is
//! stored as one flat neighbour array indexed by per-node offsets so BFS reads
//! contiguous memory.

use std::collections::BTreeSet;

use crate::{Result, error::SweepError, ring::Edge, ring::RingGraph, shortcuts::ShortcutSet};

/// An undirected graph over nodes `0..node_count` without duplicate edges.
///
/// # Examples
/// ```
/// use smallring_core::{Graph, RingGraph, ShortcutSet};
///
/// let ring = RingGraph::build(10).expect("valid ring");
/// let layout = ShortcutSet::from_pairs(&ring, [(0, 5)]).expect("valid pair");
/// let graph = Graph::with_shortcuts(&ring, &layout.shortcuts).expect("layout fits the ring");
/// assert_eq!(graph.edge_count(), 11);
/// assert_eq!(graph.degree(0), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    offsets: Vec<usize>,
    neighbours: Vec<usize>,
}

impl Graph {
    /// Builds the bare ring.
    #[must_use]
    pub fn ring(ring: &RingGraph) -> Self {
        Self::from_canonical(ring.node_count(), ring.edges())
    }

    /// Builds the ring plus `shortcuts`.
    ///
    /// Shortcuts that coincide with a ring edge of `ring` are skipped so the
    /// union never holds duplicates, even for a set built against another
    /// ring.
    ///
    /// # Errors
    /// Returns [`SweepError::NodeOutOfRange`] when a shortcut names a node
    /// outside `ring`.
    pub fn with_shortcuts(ring: &RingGraph, shortcuts: &ShortcutSet) -> Result<Self> {
        let node_count = ring.node_count();
        if let Some(edge) = shortcuts.iter().find(|edge| !edge.fits(node_count)) {
            return Err(SweepError::NodeOutOfRange {
                node: edge.high(),
                node_count,
            });
        }
        let extra = shortcuts
            .iter()
            .copied()
            .filter(|edge| !ring.is_ring_adjacent(edge.low(), edge.high()));
        Ok(Self::from_canonical(node_count, ring.edges().chain(extra)))
    }

    /// Builds a graph from arbitrary undirected node pairs.
    ///
    /// Pairs are canonicalised and duplicates collapse. Graphs built this way
    /// may be disconnected and may have fewer than three nodes.
    ///
    /// # Errors
    /// Returns [`SweepError::NodeOutOfRange`] when an endpoint is not below
    /// `node_count` and [`SweepError::SelfLoop`] for pairs that repeat a node.
    pub fn from_edges<I>(node_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut edges = BTreeSet::new();
        for (a, b) in pairs {
            let edge = Edge::new(a, b)?;
            if !edge.fits(node_count) {
                return Err(SweepError::NodeOutOfRange {
                    node: edge.high(),
                    node_count,
                });
            }
            edges.insert(edge);
        }
        Ok(Self::from_canonical(node_count, edges.iter().copied()))
    }

    fn from_canonical<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
        I::IntoIter: Clone,
    {
        let edges = edges.into_iter();
        let mut offsets = vec![0_usize; node_count + 1];
        for edge in edges.clone() {
            offsets[edge.low() + 1] += 1;
            offsets[edge.high() + 1] += 1;
        }
        for node in 0..node_count {
            offsets[node + 1] += offsets[node];
        }

        let mut cursor = offsets.clone();
        let mut neighbours = vec![0_usize; offsets[node_count]];
        for edge in edges {
            neighbours[cursor[edge.low()]] = edge.high();
            cursor[edge.low()] += 1;
            neighbours[cursor[edge.high()]] = edge.low();
            cursor[edge.high()] += 1;
        }

        Self {
            offsets,
            neighbours,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbours.len() / 2
    }

    /// Returns the neighbours of `node`, or an empty slice for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        match (self.offsets.get(node), self.offsets.get(node + 1)) {
            (Some(&start), Some(&end)) => &self.neighbours[start..end],
            _ => &[],
        }
    }

    /// Returns the number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }
}
