use ndarray::Ix;

type Coord = usize;

/// A location `(x, y)` on the grid. The top left corner is `Location(0, 0)`;
/// `y` grows southward.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// `(row, column)` index into the row-major cell array.
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on the rim of a `len`-sided grid.
    pub(crate) fn on_rim(&self, len: Coord) -> bool {
        self.0 == 0 || self.1 == 0 || self.0 == len - 1 || self.1 == len - 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
