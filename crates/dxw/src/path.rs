//! Warping path types for DTW alignment.

use serde::Serialize;

use crate::tie_break::Direction;

/// A single cell of a warping path, matching sample `i` of the first signal
/// with sample `j` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct WarpStep {
    /// Index in the first signal.
    pub i: usize,
    /// Index in the second signal.
    pub j: usize,
}

impl WarpStep {
    /// Create a step at `(i, j)`.
    #[must_use]
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl From<WarpStep> for [usize; 2] {
    fn from(step: WarpStep) -> Self {
        [step.i, step.j]
    }
}

impl From<WarpStep> for (usize, usize) {
    fn from(step: WarpStep) -> Self {
        (step.i, step.j)
    }
}

/// An ordered sequence of warping steps from `(0, 0)` to `(n-1, m-1)`.
///
/// Consecutive steps advance `i`, `j`, or both by exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarpPath(Vec<WarpStep>);

impl WarpPath {
    pub(crate) fn new(steps: Vec<WarpStep>) -> Self {
        debug_assert!(!steps.is_empty());
        Self(steps)
    }

    /// Return the warping steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps. Never true for a computed path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the first step, always `(0, 0)` for a computed path.
    #[must_use]
    pub fn first(&self) -> Option<WarpStep> {
        self.0.first().copied()
    }

    /// Return the last step, the bottom-right cell of the cost matrix.
    #[must_use]
    pub fn last(&self) -> Option<WarpStep> {
        self.0.last().copied()
    }

    /// Return the shape of the path viewed as a 2-column index array: `(len, 2)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.0.len(), 2)
    }

    /// Copy the path out as `[i, j]` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<[usize; 2]> {
        self.0.iter().map(|s| [s.i, s.j]).collect()
    }

    /// Iterate over the moves between consecutive steps, head to tail.
    ///
    /// Each item names the backtracking move that links a step to its
    /// predecessor, so a path of `len` steps yields `len - 1` directions.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.windows(2).filter_map(|pair| {
            Direction::between((pair[0].i, pair[0].j), (pair[1].i, pair[1].j))
        })
    }
}

impl<'a> IntoIterator for &'a WarpPath {
    type Item = &'a WarpStep;
    type IntoIter = std::slice::Iter<'a, WarpStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
