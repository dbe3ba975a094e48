//! Ring topology and canonical undirected edges.
//!
//! A [`RingGraph`] is the immutable base of every trial: nodes `0..n` with
//! ring edges `(i, (i + 1) mod n)`. It is shared by reference across trials and
//! worker threads and never mutated after [`RingGraph::build`].

use std::fmt;

use crate::{Result, error::SweepError};

/// An undirected edge in canonical form (`low < high`).
///
/// # Examples
/// ```
/// use smallring_core::Edge;
///
/// let edge = Edge::new(7, 2).expect("distinct endpoints");
/// assert_eq!((edge.low(), edge.high()), (2, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Builds a canonical edge from two endpoints in either order.
    ///
    /// # Errors
    /// Returns [`SweepError::SelfLoop`] when `a == b`.
    pub fn new(a: usize, b: usize) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(SweepError::SelfLoop { node: a }),
        }
    }

    /// Builds an edge whose endpoints are already known to be ordered and distinct.
    pub(crate) fn ordered(low: usize, high: usize) -> Self {
        debug_assert!(low < high, "edge endpoints must be ordered");
        Self { low, high }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn low(&self) -> usize { self.low }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn high(&self) -> usize { self.high }

    /// Returns `true` when both endpoints lie in `[0, node_count)`.
    #[must_use]
    pub fn fits(&self, node_count: usize) -> bool {
        self.high < node_count
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// An undirected cycle over nodes `0..n`.
///
/// # Examples
/// ```
/// use smallring_core::RingGraph;
///
/// let ring = RingGraph::build(6).expect("six nodes form a ring");
/// assert_eq!(ring.edges().count(), 6);
/// assert!(ring.is_ring_adjacent(0, 5));
/// assert!(!ring.is_ring_adjacent(0, 3));
/// assert_eq!(ring.eligible_shortcut_count(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingGraph {
    node_count: usize,
}

impl RingGraph {
    /// Smallest ring that is a simple cycle.
    pub const MIN_NODES: usize = 3;

    /// Builds a ring over `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`SweepError::InvalidSize`] when `node_count < 3`.
    pub fn build(node_count: usize) -> Result<Self> {
        if node_count < Self::MIN_NODES {
            return Err(SweepError::InvalidSize { got: node_count });
        }
        Ok(Self { node_count })
    }

    /// Returns the number of nodes on the ring.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Iterates the `n` ring edges in canonical form.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + Clone + '_ {
        let n = self.node_count;
        (0..n).map(move |i| {
            let next = (i + 1) % n;
            Edge::ordered(i.min(next), i.max(next))
        })
    }

    /// Returns `true` when `a` and `b` are neighbours on the ring, that is
    /// when `(a - b) mod n` is `1` or `n - 1`.
    #[must_use]
    pub fn is_ring_adjacent(&self, a: usize, b: usize) -> bool {
        let n = self.node_count;
        let delta = (a % n).abs_diff(b % n);
        delta == 1 || delta == n - 1
    }

    /// Number of node pairs that may carry a shortcut: `n * (n - 3) / 2`.
    ///
    /// Saturates at `usize::MAX` for rings too large to count exactly.
    #[must_use]
    pub fn eligible_shortcut_count(&self) -> usize {
        let n = self.node_count;
        let (even, other) = if n % 2 == 0 {
            (n / 2, n - 3)
        } else {
            (n, (n - 3) / 2)
        };
        even.saturating_mul(other)
    }

    /// Diameter of the bare ring, `floor(n / 2)`.
    #[must_use]
    pub fn natural_diameter(&self) -> usize {
        self.node_count / 2
    }

    /// Checks that `node` is a member of the ring.
    ///
    /// # Errors
    /// Returns [`SweepError::NodeOutOfRange`] when `node >= n`.
    pub fn check_node(&self, node: usize) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(SweepError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }
}
