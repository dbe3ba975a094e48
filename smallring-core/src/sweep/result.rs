//! Aggregated sweep output.

use std::slice;

/// Mean, minimum and maximum diameter over the trials of one shortcut count.
///
/// # Examples
/// ```
/// use smallring_core::SweepPoint;
///
/// let point = SweepPoint::from_diameters(4, &[5, 4, 4, 3]).expect("four trials");
/// assert_eq!(point.mean_diameter(), 4.0);
/// assert_eq!((point.min_diameter(), point.max_diameter()), (3, 5));
/// assert_eq!(point.trials(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    shortcut_count: usize,
    mean_diameter: f64,
    min_diameter: u32,
    max_diameter: u32,
    trials: usize,
}

impl SweepPoint {
    /// Summarises the diameters measured for `shortcut_count`.
    ///
    /// Returns `None` when `diameters` is empty.
    #[must_use]
    pub fn from_diameters(shortcut_count: usize, diameters: &[u32]) -> Option<Self> {
        let min_diameter = diameters.iter().copied().min()?;
        let max_diameter = diameters.iter().copied().max()?;
        let total: u64 = diameters.iter().map(|&d| u64::from(d)).sum();
        Some(Self {
            shortcut_count,
            mean_diameter: total as f64 / diameters.len() as f64,
            min_diameter,
            max_diameter,
            trials: diameters.len(),
        })
    }

    /// Number of shortcuts added in every trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn shortcut_count(&self) -> usize { self.shortcut_count }

    /// Arithmetic mean of the trial diameters.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean_diameter(&self) -> f64 { self.mean_diameter }

    /// Smallest trial diameter.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_diameter(&self) -> u32 { self.min_diameter }

    /// Largest trial diameter.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_diameter(&self) -> u32 { self.max_diameter }

    /// Number of trials aggregated.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> usize { self.trials }
}

/// One [`SweepPoint`] per configured shortcut count, in configuration order.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepResult {
    node_count: usize,
    seed: u64,
    points: Vec<SweepPoint>,
}

impl SweepResult {
    pub(crate) fn new(node_count: usize, seed: u64, points: Vec<SweepPoint>) -> Self {
        Self {
            node_count,
            seed,
            points,
        }
    }

    /// Ring size the sweep ran on.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Base seed the sweep was configured with.
    ///
    /// Replaying the configuration with this seed reproduces the result when
    /// the default [`crate::SeededTrials`] factory is used.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Returns the aggregated points.
    #[must_use]
    #[rustfmt::skip]
    pub fn points(&self) -> &[SweepPoint] { &self.points }

    /// Iterates the points in configuration order.
    pub fn iter(&self) -> slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }

    /// Returns `(shortcut_count, mean_diameter)` pairs, the series a plot
    /// of the sweep would draw.
    pub fn mean_series(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.points
            .iter()
            .map(|point| (point.shortcut_count, point.mean_diameter))
    }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.points.len() }

    /// Returns `true` when no shortcut counts were configured.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a SweepPoint;
    type IntoIter = slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
