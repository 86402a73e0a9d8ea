//! Predecessor moves and the tie-break policy used during backtracking.

use serde::Serialize;

/// A single backtracking move from cell `(i, j)` towards `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Move to `(i - 1, j)`: one sample of the first signal maps onto a repeated sample of the second.
    Up,
    /// Move to `(i, j - 1)`.
    Left,
    /// Move to `(i - 1, j - 1)`: a one-to-one match.
    Diagonal,
}

impl Direction {
    /// Return the predecessor of `(i, j)` reached by this move.
    ///
    /// Returns `None` if the move would leave the matrix.
    #[must_use]
    pub fn predecessor(self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up => Some((i.checked_sub(1)?, j)),
            Self::Left => Some((i, j.checked_sub(1)?)),
            Self::Diagonal => Some((i.checked_sub(1)?, j.checked_sub(1)?)),
        }
    }

    /// Classify the forward step `from -> to` as the move that undoes it.
    ///
    /// Returns `None` unless `to` is `from` advanced by `(1, 0)`, `(0, 1)` or `(1, 1)`.
    #[must_use]
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let di = to.0.checked_sub(from.0)?;
        let dj = to.1.checked_sub(from.1)?;
        match (di, dj) {
            (1, 0) => Some(Self::Up),
            (0, 1) => Some(Self::Left),
            (1, 1) => Some(Self::Diagonal),
            _ => None,
        }
    }
}

/// Order in which equal-cost predecessors are preferred during backtracking.
///
/// Several optimal paths can exist when cumulative costs tie exactly. Every
/// policy yields a path of the same accumulated cost; they differ only in
/// which of the tied cells is visited. Cells on the first row or column are
/// always forced moves, whatever the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer `Up`, then `Left`, then `Diagonal`. Canonical output.
    #[default]
    VerticalFirst,

    /// Prefer `Left`, then `Up`, then `Diagonal`.
    HorizontalFirst,

    /// Prefer `Diagonal`, then `Up`, then `Left`.
    DiagonalFirst,
}

impl TieBreak {
    /// Return the three moves in descending preference.
    #[must_use]
    pub fn priority(self) -> [Direction; 3] {
        match self {
            Self::VerticalFirst => [Direction::Up, Direction::Left, Direction::Diagonal],
            Self::HorizontalFirst => [Direction::Left, Direction::Up, Direction::Diagonal],
            Self::DiagonalFirst => [Direction::Diagonal, Direction::Up, Direction::Left],
        }
    }

    /// Pick the cheapest move given the costs of the up, left and diagonal predecessors.
    ///
    /// The first move in [`priority`][Self::priority] whose cost equals the
    /// minimum wins.
    #[must_use]
    pub fn choose(self, up: f64, left: f64, diagonal: f64) -> Direction {
        let min = up.min(left).min(diagonal);
        let [first, second, third] = self.priority();
        let cost_of = |d: Direction| match d {
            Direction::Up => up,
            Direction::Left => left,
            Direction::Diagonal => diagonal,
        };
        if cost_of(first) == min {
            first
        } else if cost_of(second) == min {
            second
        } else {
            third
        }
    }
}
