use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::{Cell, Symbol};
use crate::error::InputError;
use crate::location::Location;
use crate::step::{OrthoStep, Step};

/// Accepted side lengths for a puzzle grid.
///
/// The default window matches the serving deployment; batch tooling that
/// sweeps small boards may lower `min_len`.
#[derive(Clone, Copy, Debug)]
pub struct SizeLimits {
    /// Smallest accepted side length.
    pub min_len: usize,
    /// Largest accepted side length.
    pub max_len: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { min_len: 5, max_len: 23 }
    }
}

/// A group of cells treated as one puzzle unit, optionally carrying a
/// symmetry symbol.
#[derive(Clone, Debug)]
pub(crate) struct Region {
    pub(crate) cells: Vec<Location>,
    pub(crate) symbol: Symbol,
}

/// Validate a region partition and build the cell index for it.
///
/// Checks run in order: coordinate syntax, squareness, size window, full
/// coverage of the square, symbol vocabulary. The first failure wins.
pub(crate) fn parse_regions(
    input: &[HashMap<String, String>],
    limits: SizeLimits,
) -> Result<(usize, Array2<Cell>, Vec<Region>), InputError> {
    let mut max_x = 0;
    let mut max_y = 0;
    let mut parsed: Vec<Vec<(Location, &str)>> = Vec::with_capacity(input.len());

    for mapping in input {
        let mut entries = Vec::with_capacity(mapping.len());
        for (coord, token) in mapping {
            let location = parse_coordinate(coord)?;
            max_x = max_x.max(location.0);
            max_y = max_y.max(location.1);
            entries.push((location, token.as_str()));
        }
        // mapping order is arbitrary; fix it so downstream clause emission
        // (and with it the engine's search) is reproducible
        entries.sort_unstable_by_key(|(location, _)| location.as_index());
        parsed.push(entries);
    }

    if max_x != max_y {
        return Err(InputError::Shape { max_x, max_y });
    }
    // coordinates near usize::MAX must fail the size check, not overflow
    let len = max_x.saturating_add(1);
    if len < limits.min_len || len > limits.max_len {
        return Err(InputError::Size { len, min: limits.min_len, max: limits.max_len });
    }

    let mut covered = Array2::from_elem((len, len), false);
    for (location, _) in parsed.iter().flatten() {
        covered[location.as_index()] = true;
    }
    let missing = (0..len)
        .cartesian_product(0..len)
        .map(|(x, y)| Location(x, y))
        .filter(|location| !covered[location.as_index()])
        .collect_vec();
    if !missing.is_empty() {
        return Err(InputError::Coverage { missing });
    }

    let mut cells = Array2::from_elem((len, len), Cell::default());
    let mut regions = Vec::with_capacity(parsed.len());
    for (id, entries) in parsed.iter().enumerate() {
        let mut symbol = Symbol::None;
        let mut members = Vec::with_capacity(entries.len());
        for &(location, token) in entries {
            let marker = Symbol::parse(token)
                .ok_or_else(|| InputError::Symbol { token: token.to_owned() })?;
            if marker != Symbol::None {
                symbol = marker;
            }
            cells[location.as_index()] = Cell {
                symbol: marker,
                region: id,
                ..Cell::default()
            };
            members.push(location);
        }
        regions.push(Region { cells: members, symbol });
    }

    for region in &regions {
        mark_borders(region, &mut cells);
    }

    Ok((len, cells, regions))
}

/// Flag each member cell's edges where the region does not continue. The
/// grid rim counts as a border.
fn mark_borders(region: &Region, cells: &mut Array2<Cell>) {
    let members: HashSet<Location> = region.cells.iter().copied().collect();
    for &location in &region.cells {
        let cell = &mut cells[location.as_index()];
        cell.north = !members.contains(&OrthoStep::Up.attempt_from(location));
        cell.south = !members.contains(&OrthoStep::Down.attempt_from(location));
        cell.west = !members.contains(&OrthoStep::Left.attempt_from(location));
        cell.east = !members.contains(&OrthoStep::Right.attempt_from(location));
    }
}

fn parse_coordinate(token: &str) -> Result<Location, InputError> {
    let bad = || InputError::Coordinate { token: token.to_owned() };
    let (x, y) = token.split_once(',').ok_or_else(bad)?;
    Ok(Location(
        x.trim().parse().map_err(|_| bad())?,
        y.trim().parse().map_err(|_| bad())?,
    ))
}
