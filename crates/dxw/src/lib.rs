//! Dynamic {Time, Depth, Whatever} Warping.
//!
//! Pure math library with no I/O. Aligns two 1-D signals of possibly different
//! lengths by building the cumulative absolute-difference cost matrix and
//! backtracking the optimal warping path through it.
//!
//! ```
//! let s1 = [1.0, 1.0, 3.0, 1.0, 1.0, 3.0, 1.0, 1.0];
//! let s2 = [1.0, 3.0, 1.0, 3.0, 1.0];
//! let (path, cost) = dxw::compute_alignment(&s1, &s2).unwrap();
//! assert_eq!(cost.shape(), (8, 5));
//! assert_eq!(path.shape(), (8, 2));
//! assert_eq!(path.to_pairs().first(), Some(&[0, 0]));
//! ```

mod align;
mod backtrack;
mod cost;
mod error;
mod path;
mod signal;
mod tie_break;

pub use align::{Alignment, Dxw, compute_alignment};
pub use backtrack::backtrack;
pub use cost::{CostMatrix, build_cost};
pub use error::DxwError;
pub use path::{WarpPath, WarpStep};
pub use signal::{Signal, SignalView};
pub use tie_break::{Direction, TieBreak};
