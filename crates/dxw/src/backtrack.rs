//! Optimal warping path recovery from a completed cost matrix.

use tracing::{debug, instrument};

use crate::cost::CostMatrix;
use crate::path::{WarpPath, WarpStep};
use crate::tie_break::{Direction, TieBreak};

/// Walk from the bottom-right cell to `(0, 0)`, taking the cheapest predecessor at each step.
///
/// On the first row only `Left` is possible and on the first column only
/// `Up`; elsewhere `tie_break` settles equal costs. The path is collected
/// tail to head and reversed before returning.
#[instrument(skip(cost), fields(rows = cost.rows(), cols = cost.cols()))]
pub(crate) fn backtrack_with(cost: &CostMatrix, tie_break: TieBreak) -> WarpPath {
    let (rows, cols) = cost.shape();
    debug_assert!(rows > 0 && cols > 0, "cost matrix must be non-empty");

    let mut i = rows - 1;
    let mut j = cols - 1;
    let mut steps = Vec::with_capacity(rows + cols - 1);
    steps.push(WarpStep { i, j });

    while i > 0 || j > 0 {
        let dir = if i == 0 {
            Direction::Left
        } else if j == 0 {
            Direction::Up
        } else {
            tie_break.choose(cost[(i - 1, j)], cost[(i, j - 1)], cost[(i - 1, j - 1)])
        };
        match dir {
            Direction::Up => i -= 1,
            Direction::Left => j -= 1,
            Direction::Diagonal => {
                i -= 1;
                j -= 1;
            }
        }
        steps.push(WarpStep { i, j });
    }

    steps.reverse();
    debug!(steps = steps.len(), "warping path complete");
    WarpPath::new(steps)
}

/// Recover the optimal warping path using the default [`TieBreak::VerticalFirst`] policy.
///
/// The returned path starts at `(0, 0)` and ends at
/// `(cost.rows() - 1, cost.cols() - 1)`.
#[must_use]
pub fn backtrack(cost: &CostMatrix) -> WarpPath {
    backtrack_with(cost, TieBreak::default())
}
