//! Alignment entry points: the configurable [`Dxw`] aligner and [`compute_alignment`].

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::backtrack::backtrack_with;
use crate::cost::CostMatrix;
use crate::error::DxwError;
use crate::path::WarpPath;
use crate::signal::{Signal, SignalView};
use crate::tie_break::TieBreak;

/// Result of aligning two signals: the optimal path and the matrix it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alignment {
    /// Optimal warping path from `(0, 0)` to the bottom-right cell.
    pub path: WarpPath,
    /// Cumulative cost matrix of shape `(a.len(), b.len())`.
    pub cost: CostMatrix,
}

impl Alignment {
    /// Return the total cost along the optimal path (the bottom-right matrix cell).
    #[must_use]
    pub fn accumulated_cost(&self) -> f64 {
        self.cost.accumulated_cost()
    }

    /// Split into `(path, cost)`.
    #[must_use]
    pub fn into_parts(self) -> (WarpPath, CostMatrix) {
        (self.path, self.cost)
    }
}

/// Immutable aligner configuration. Thread-safe and copyable.
///
/// Construct via [`Dxw::new`] (or `Default`), then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter   | Default                        |
/// |-------------|--------------------------------|
/// | `tie_break` | [`TieBreak::VerticalFirst`]    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dxw {
    tie_break: TieBreak,
}

impl Dxw {
    /// Create an aligner with the default tie-break policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy used to settle equal-cost predecessors while backtracking.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Return the tie-break policy.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Build the cumulative cost matrix between two signals.
    ///
    /// Runs in O(n * m) time and space. There is no windowing.
    #[must_use]
    pub fn cost_matrix(&self, a: SignalView<'_>, b: SignalView<'_>) -> CostMatrix {
        CostMatrix::build(a, b)
    }

    /// Recover the optimal warping path from a cost matrix with the configured policy.
    #[must_use]
    pub fn backtrack(&self, cost: &CostMatrix) -> WarpPath {
        backtrack_with(cost, self.tie_break)
    }

    /// Compute the cost matrix and optimal warping path between two signals.
    #[must_use]
    #[instrument(skip(a, b), fields(a_len = a.len(), b_len = b.len()))]
    pub fn align(&self, a: SignalView<'_>, b: SignalView<'_>) -> Alignment {
        let cost = self.cost_matrix(a, b);
        let path = self.backtrack(&cost);
        Alignment { path, cost }
    }

    /// Align every candidate against one reference signal.
    ///
    /// Candidates are aligned in parallel using rayon. The output has one
    /// entry per candidate, in input order, each identical to
    /// `self.align(reference, candidate.as_view())`.
    #[must_use]
    #[instrument(skip(self, reference, candidates), fields(reference_len = reference.len(), n = candidates.len()))]
    pub fn align_batch(&self, reference: SignalView<'_>, candidates: &[Signal]) -> Vec<Alignment> {
        let alignments: Vec<Alignment> = candidates
            .par_iter()
            .map(|candidate| self.align(reference, candidate.as_view()))
            .collect();
        debug!(n = alignments.len(), "batch alignment complete");
        alignments
    }
}

/// Compute the warping path and cumulative cost matrix between two raw sequences.
///
/// Validates both inputs, builds the cost matrix, then backtracks with the
/// default [`TieBreak::VerticalFirst`] policy. Nothing is returned on error.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DxwError::EmptySignal`] | `s1` or `s2` is empty |
/// | [`DxwError::NonFiniteValue`] | Any sample is NaN or infinite |
pub fn compute_alignment(s1: &[f64], s2: &[f64]) -> Result<(WarpPath, CostMatrix), DxwError> {
    let a = SignalView::new(s1)?;
    let b = SignalView::new(s2)?;
    Ok(Dxw::new().align(a, b).into_parts())
}
