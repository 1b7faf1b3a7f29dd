use strum::VariantArray;

use crate::location::Location;

/// A unit move on the grid. Out-of-bounds steps wrap below zero and are
/// caught by the bounds filter in [`Step::neighbors`].
pub(crate) trait Step: Sized + Copy + VariantArray {
    fn attempt_from(&self, location: Location) -> Location;

    /// All in-bounds neighbors of `location` on a `len`-sided grid, in
    /// variant order.
    fn neighbors(len: usize, location: Location) -> Vec<Location> {
        Self::VARIANTS
            .iter()
            .map(|dir| dir.attempt_from(location))
            .filter(|loc| loc.0 < len && loc.1 < len)
            .collect()
    }
}

/// The four orthogonal steps; the adjacency relation for the local
/// shading rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, VariantArray)]
pub(crate) enum OrthoStep {
    Up,
    Down,
    Left,
    Right,
}

impl Step for OrthoStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}

/// The four diagonal steps; the adjacency relation for both topology
/// checks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, VariantArray)]
pub(crate) enum DiagStep {
    UpLeft,
    UpRight,
    DownRight,
    DownLeft,
}

impl Step for DiagStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UpLeft => location.offset_by((-1, -1)),
            Self::UpRight => location.offset_by((1, -1)),
            Self::DownRight => location.offset_by((1, 1)),
            Self::DownLeft => location.offset_by((-1, 1)),
        }
    }
}
