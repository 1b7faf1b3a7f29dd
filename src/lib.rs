#![warn(missing_docs)]

//! # `charcoal`
//!
//! A solver for region-shading grid puzzles. An N×N grid is partitioned
//! into disjoint regions, some carrying a symmetry symbol, and every cell
//! must be shaded black or white so that all of the following hold:
//!
//! - no two orthogonally adjacent cells are both black;
//! - a region marked `S` shades its bounding rectangle 180°-rotationally
//!   symmetric, and one marked `A` never shades a cell together with its
//!   rotated counterpart;
//! - where a region ends to the south or east, the straight run of cells
//!   reaching into a third region must contain a black cell;
//! - every white cell keeps a white orthogonal neighbor;
//! - no diagonally connected chain of black cells touches the grid rim
//!   twice (an impassable wall), and no such chain closes into a loop.
//!
//! Begin with [`Board::from_regions`], or use the one-call [`solve`]
//! wrapper.
//!
//! # Internals
//! This crate is driven by expressing the shading rules as a Boolean
//! satisfiability problem, extracting a model from the solver, and
//! re-expressing the grid accordingly. Every rule above except the last
//! has an exact clause form and is stated up front. The wall and loop
//! rules are global topology: forbidding every possible wall and loop in
//! advance is hopeless, so they are refuted lazily. Each time the engine
//! proposes a model, the topology oracle sweeps it; a violation found is
//! trimmed to its load-bearing cells and forbidden with a single new
//! clause, and the incremental engine searches on with everything it has
//! learned so far. The model carries no objective, so the returned
//! coloring is whichever feasible point the engine reaches first.

pub use board::{Board, SolvedBoard};
pub use error::{InputError, SolveError};
pub use location::Location;
pub use region::SizeLimits;

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod location;
pub(crate) mod logic;
pub(crate) mod oracle;
pub(crate) mod region;
pub(crate) mod solver;
pub(crate) mod step;

/// Validate `regions` and solve the puzzle in one call.
///
/// Returns the row-major token grid of a valid coloring, or `Ok(None)`
/// when the partition admits none.
pub fn solve(
    regions: &[std::collections::HashMap<String, String>],
) -> Result<Option<Vec<Vec<String>>>, SolveError> {
    let board = Board::from_regions(regions)?;
    Ok(board.solve()?.map(|solved| solved.tokens()))
}
