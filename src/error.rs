use thiserror::Error;

use crate::location::Location;

/// Structural problems with a caller-supplied region partition.
///
/// Every variant means the input itself is malformed; retrying the same
/// call cannot succeed.
#[derive(Debug, Error)]
pub enum InputError {
    /// A coordinate key did not parse as two non-negative integers.
    #[error("coordinate {token:?} is not an \"x,y\" pair of non-negative integers")]
    Coordinate {
        /// The offending coordinate key as given.
        token: String,
    },
    /// The maximum x and y coordinates differ, so the grid is not square.
    #[error("the amount of rows and columns of the grid are not equal (max x {max_x}, max y {max_y})")]
    Shape {
        /// Largest x coordinate seen across all regions.
        max_x: usize,
        /// Largest y coordinate seen across all regions.
        max_y: usize,
    },
    /// The grid's side length falls outside the configured window.
    #[error("side length {len} is outside the supported range {min}..={max}")]
    Size {
        /// The side length implied by the input.
        len: usize,
        /// Smallest accepted side length.
        min: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// Some cells of the square are not covered by any region.
    #[error("some regions are not filled; missing coordinates: {missing:?}")]
    Coverage {
        /// Uncovered locations, in column-major order.
        missing: Vec<Location>,
    },
    /// A region entry carried an unrecognized symbol token.
    #[error("invalid region symbol {token:?}, must be empty or \"S\"/\"A\"")]
    Symbol {
        /// The offending symbol token as given.
        token: String,
    },
}

/// Errors surfaced by [`Board::solve`](crate::Board::solve).
#[derive(Debug, Error)]
pub enum SolveError {
    /// The region partition is malformed; see [`InputError`].
    #[error(transparent)]
    Input(#[from] InputError),
    /// The solving engine failed. The input may be well-formed but
    /// unprocessable by this deployment.
    #[error("solving engine failure: {0}")]
    Engine(String),
}
