//! Shortcut sets and explicit shortcut layouts.
//!
//! A [`ShortcutSet`] holds canonical edges that are in range, not self-loops,
//! not ring-adjacent and pairwise distinct. Sets are produced either by the
//! random [`crate::ShortcutSampler`] or from caller-specified layouts: a list
//! of node pairs ([`ShortcutSet::from_pairs`]) or a hub joined to several
//! targets ([`ShortcutSet::star`]).

use std::collections::{BTreeSet, btree_set};

use tracing::warn;

use crate::{Result, error::SweepError, ring::Edge, ring::RingGraph};

/// A validated set of shortcut edges for one ring.
///
/// # Examples
/// ```
/// use smallring_core::{RingGraph, ShortcutSet};
///
/// let ring = RingGraph::build(10).expect("valid ring");
/// let layout = ShortcutSet::from_pairs(&ring, [(5, 0), (0, 5), (3, 4)])
///     .expect("pairs are in range");
/// assert_eq!(layout.shortcuts.len(), 1);
/// assert_eq!(layout.redundant.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutSet {
    edges: BTreeSet<Edge>,
}

/// A normalised shortcut layout together with the pairs that were dropped
/// because the ring already joins them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutLayout {
    /// Shortcuts that will be added to the ring.
    pub shortcuts: ShortcutSet,
    /// Ring-adjacent pairs that would duplicate a ring edge, sorted.
    pub redundant: Vec<Edge>,
}

impl ShortcutSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of shortcuts.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the set holds no shortcuts.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns `true` when `edge` is already in the set.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Iterates shortcuts in ascending `(low, high)` order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Inserts an edge that the caller has already validated against the ring.
    ///
    /// Returns `false` when the edge was present.
    pub(crate) fn insert_unchecked(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Normalises a list of node pairs into a layout for `ring`.
    ///
    /// Pairs are canonicalised, deduplicated and sorted. Ring-adjacent pairs
    /// are moved to [`ShortcutLayout::redundant`] instead of being added.
    ///
    /// # Errors
    /// Returns [`SweepError::NodeOutOfRange`] when a node is not on the ring
    /// and [`SweepError::SelfLoop`] when a pair repeats a node.
    pub fn from_pairs<I>(ring: &RingGraph, pairs: I) -> Result<ShortcutLayout>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut candidates = BTreeSet::new();
        for (a, b) in pairs {
            ring.check_node(a)?;
            ring.check_node(b)?;
            candidates.insert(Edge::new(a, b)?);
        }
        Ok(Self::partition(ring, candidates))
    }

    /// Builds a star layout joining `center` to every target.
    ///
    /// Targets outside the ring or equal to `center` are dropped, duplicates
    /// collapse, and ring-adjacent targets are reported as redundant. An empty
    /// target list yields an empty layout.
    ///
    /// # Errors
    /// Returns [`SweepError::NodeOutOfRange`] when `center` is not on the ring
    /// and [`SweepError::NoValidTargets`] when targets were supplied but none
    /// survived filtering.
    pub fn star<I>(ring: &RingGraph, center: usize, targets: I) -> Result<ShortcutLayout>
    where
        I: IntoIterator<Item = usize>,
    {
        ring.check_node(center)?;
        let mut supplied = false;
        let mut candidates = BTreeSet::new();
        for target in targets {
            supplied = true;
            if target < ring.node_count() && target != center {
                candidates.insert(Edge::new(center, target)?);
            }
        }
        if supplied && candidates.is_empty() {
            return Err(SweepError::NoValidTargets { center });
        }
        Ok(Self::partition(ring, candidates))
    }

    fn partition(ring: &RingGraph, candidates: BTreeSet<Edge>) -> ShortcutLayout {
        let (redundant, edges): (Vec<Edge>, Vec<Edge>) = candidates
            .into_iter()
            .partition(|edge| ring.is_ring_adjacent(edge.low(), edge.high()));
        if !redundant.is_empty() {
            warn!(
                redundant = redundant.len(),
                node_count = ring.node_count(),
                "ring-adjacent pairs are redundant as shortcuts and were skipped"
            );
        }
        ShortcutLayout {
            shortcuts: Self {
                edges: edges.into_iter().collect(),
            },
            redundant,
        }
    }
}

impl<'a> IntoIterator for &'a ShortcutSet {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
