use std::fmt::{self, Display, Formatter};

/// Cell shade. `Grey` is the pre-solve placeholder and never appears in a
/// solved grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Color {
    White,
    #[default]
    Grey,
    Black,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "W",
            Self::Grey => "G",
            Self::Black => "B",
        })
    }
}

/// Region symmetry marker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Symbol {
    #[default]
    None,
    /// `"S"`: the shading of the region's bounding rectangle must be
    /// invariant under 180° rotation.
    Symmetric,
    /// `"A"`: no cell and its 180°-rotated counterpart may both be black.
    Asymmetric,
}

impl Symbol {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "" => Some(Self::None),
            "S" => Some(Self::Symmetric),
            "A" => Some(Self::Asymmetric),
            _ => None,
        }
    }

    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Symmetric => "/S",
            Self::Asymmetric => "/A",
        }
    }
}

/// One grid cell. A border flag is true where the owning region does not
/// extend across that edge.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Cell {
    pub(crate) color: Color,
    /// The marker carried by this cell's own input entry; the region-wide
    /// symbol lives on [`Region`](crate::region::Region).
    pub(crate) symbol: Symbol,
    pub(crate) region: usize,
    pub(crate) north: bool,
    pub(crate) east: bool,
    pub(crate) south: bool,
    pub(crate) west: bool,
}
