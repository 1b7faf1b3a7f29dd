use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use ndarray::Array2;

use crate::cell::{Cell, Color};
use crate::error::{InputError, SolveError};
use crate::location::Location;
use crate::region::{parse_regions, Region, SizeLimits};
use crate::solver::ShadingSolver;
use crate::step::{OrthoStep, Step};

/// A validated puzzle grid: the cell index plus the region partition.
///
/// Build one with [`Board::from_regions`], then consume it with
/// [`Board::solve`].
pub struct Board {
    pub(crate) len: usize,
    pub(crate) cells: Array2<Cell>,
    pub(crate) regions: Vec<Region>,
}

impl Board {
    /// Validate a region partition and index its cells.
    ///
    /// Each mapping in `input` is one region, from coordinate `"x,y"` to
    /// symbol (`""`, `"S"`, or `"A"`). See [`InputError`] for the ways a
    /// partition can be rejected.
    pub fn from_regions(input: &[HashMap<String, String>]) -> Result<Self, InputError> {
        Self::from_regions_with_limits(input, SizeLimits::default())
    }

    /// As [`Board::from_regions`], with a caller-chosen size window.
    pub fn from_regions_with_limits(
        input: &[HashMap<String, String>],
        limits: SizeLimits,
    ) -> Result<Self, InputError> {
        let (len, cells, regions) = parse_regions(input, limits)?;
        Ok(Self { len, cells, regions })
    }

    /// Solve the puzzle. `Ok(None)` means the partition is valid but
    /// admits no coloring.
    pub fn solve(mut self) -> Result<Option<SolvedBoard>, SolveError> {
        let outcome = match ShadingSolver::new(&self).solve()? {
            None => return Ok(None),
            Some(outcome) => outcome,
        };

        for (index, cell) in self.cells.indexed_iter_mut() {
            cell.color = if outcome.blacks[index] {
                Color::Black
            } else {
                Color::White
            };
        }

        Ok(Some(SolvedBoard {
            len: self.len,
            cells: self.cells,
            cuts_added: outcome.cuts_added,
        }))
    }

    pub(crate) fn orthogonal_neighbors(&self, location: Location) -> Vec<Location> {
        OrthoStep::neighbors(self.len, location)
    }

    /// Scan straight south from `location` (inclusive) until the run has
    /// touched three distinct regions. `None` if the grid ends first.
    pub(crate) fn southward_run(&self, location: Location) -> Option<Vec<Location>> {
        self.run(location, |loc| Location(loc.0, loc.1 + 1))
    }

    /// Scan straight east from `location` (inclusive) until the run has
    /// touched three distinct regions. `None` if the grid ends first.
    pub(crate) fn eastward_run(&self, location: Location) -> Option<Vec<Location>> {
        self.run(location, |loc| Location(loc.0 + 1, loc.1))
    }

    fn run(&self, start: Location, advance: impl Fn(Location) -> Location) -> Option<Vec<Location>> {
        let mut cells = Vec::new();
        // a run crosses at most a handful of regions; linear scan beats hashing
        let mut regions_seen: Vec<usize> = Vec::new();
        let mut cursor = start;
        while cursor.0 < self.len && cursor.1 < self.len {
            cells.push(cursor);
            let region = self.cells[cursor.as_index()].region;
            if !regions_seen.contains(&region) {
                regions_seen.push(region);
                if regions_seen.len() >= 3 {
                    return Some(cells);
                }
            }
            cursor = advance(cursor);
        }
        None
    }
}

/// A fully colored grid, as produced by [`Board::solve`].
pub struct SolvedBoard {
    len: usize,
    cells: Array2<Cell>,
    cuts_added: usize,
}

impl SolvedBoard {
    /// How many topology cuts the engine had to learn before this
    /// coloring was accepted. Diagnostic only.
    pub fn cuts_added(&self) -> usize {
        self.cuts_added
    }

    /// The grid's side length.
    pub fn side_len(&self) -> usize {
        self.len
    }

    /// Row-major token grid: `"W"` or `"B"`, suffixed `"/S"` or `"/A"` on
    /// the cell whose input entry carried the region's symbol.
    pub fn tokens(&self) -> Vec<Vec<String>> {
        (0..self.len)
            .map(|y| {
                (0..self.len)
                    .map(|x| {
                        let cell = &self.cells[Location(x, y).as_index()];
                        format!("{}{}", cell.color, cell.symbol.suffix())
                    })
                    .collect()
            })
            .collect()
    }
}

impl Display for SolvedBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.tokens() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
