//! Topology checks over a fully colored candidate grid.
//!
//! Both global rules are stated over diagonal adjacency: the wall rule
//! rejects any diagonally connected black component touching the grid rim
//! more than once (such a wall fences off part of the grid), and the loop
//! rule rejects any closed cycle of diagonally connected black cells. A
//! found violation is trimmed to its load-bearing cells before the caller
//! turns it into a cut.
//!
//! Everything here is pure over one [`Candidate`]; no state survives a
//! check, which keeps the checks unit-testable without an engine.

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::location::Location;
use crate::step::{DiagStep, Step};

/// One integer-feasible coloring proposed by the engine; `true` is black.
pub(crate) struct Candidate {
    len: usize,
    pub(crate) blacks: Array2<bool>,
    /// Diagonal adjacency between black cells.
    graph: UnGraphMap<Location, ()>,
}

impl Candidate {
    pub(crate) fn new(len: usize, blacks: Array2<bool>) -> Self {
        let mut graph = UnGraphMap::new();
        for (index, &black) in blacks.indexed_iter() {
            if black {
                let _ = graph.add_node(Location::from(index));
            }
        }
        for node in graph.nodes().collect::<Vec<_>>() {
            for neighbor in DiagStep::neighbors(len, node) {
                if graph.contains_node(neighbor) {
                    let _ = graph.add_edge(node, neighbor, ());
                }
            }
        }
        Self { len, blacks, graph }
    }
}

/// Scan for a diagonally connected black component touching the rim more
/// than once. Returns the pruned cells of the first violation found, in
/// visit order.
pub(crate) fn boundary_wall(candidate: &Candidate) -> Option<Vec<Location>> {
    let mut checked = Array2::from_elem(candidate.blacks.raw_dim(), false);

    for (index, &black) in candidate.blacks.indexed_iter() {
        let start = Location::from(index);
        if !black || !start.on_rim(candidate.len) || checked[index] {
            continue;
        }

        let mut rim_touches = 0usize;
        let mut trail = Trail::new(candidate.len);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            if trail.contains(cell) {
                continue;
            }
            trail.push(cell);
            checked[cell.as_index()] = true;
            if cell.on_rim(candidate.len) {
                rim_touches += 1;
                if rim_touches > 1 {
                    // wall found; no need to walk the rest of the component
                    break;
                }
            }
            stack.extend(candidate.graph.neighbors(cell));
        }

        if rim_touches > 1 {
            return Some(trail.pruned(candidate, PruneMode::OpenPath));
        }
    }

    None
}

/// Scan for a cycle among diagonally connected black cells. Returns the
/// pruned cells of the first cycle found, in visit order.
pub(crate) fn diagonal_loop(candidate: &Candidate) -> Option<Vec<Location>> {
    let mut checked = Array2::from_elem(candidate.blacks.raw_dim(), false);

    for (index, &black) in candidate.blacks.indexed_iter() {
        let start = Location::from(index);
        if !black || checked[index] {
            continue;
        }

        let mut trail = Trail::new(candidate.len);
        let mut stack: Vec<(Location, Option<Location>)> = vec![(start, None)];
        let mut loop_found = false;
        'walk: while let Some((cell, came_from)) = stack.pop() {
            if trail.contains(cell) {
                continue;
            }
            trail.push(cell);
            checked[cell.as_index()] = true;
            for neighbor in candidate.graph.neighbors(cell) {
                // a visited neighbor other than the one we came from
                // closes a cycle
                if Some(neighbor) != came_from && trail.contains(neighbor) {
                    loop_found = true;
                    break 'walk;
                }
                stack.push((neighbor, Some(cell)));
            }
        }

        if loop_found {
            return Some(trail.pruned(candidate, PruneMode::ClosedLoop));
        }
    }

    None
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PruneMode {
    /// Wall violations: rim cells are the wall's endpoints and stay even
    /// when only one visited neighbor remains.
    OpenPath,
    /// Loop violations: any dangling cell may go.
    ClosedLoop,
}

/// Cells visited by one traversal, in visit order.
struct Trail {
    len: usize,
    member: Array2<bool>,
    order: Vec<Location>,
}

impl Trail {
    fn new(len: usize) -> Self {
        Self {
            len,
            member: Array2::from_elem((len, len), false),
            order: Vec::new(),
        }
    }

    fn contains(&self, location: Location) -> bool {
        self.member[location.as_index()]
    }

    fn push(&mut self, location: Location) {
        self.member[location.as_index()] = true;
        self.order.push(location);
    }

    fn remove(&mut self, location: Location) {
        self.member[location.as_index()] = false;
        self.order.retain(|existing| *existing != location);
    }

    /// Strip cells with exactly one visited diagonal neighbor until a
    /// fixpoint, leaving only the cells load-bearing for the violation.
    /// The smaller the set, the stronger the cut built from it.
    fn pruned(mut self, candidate: &Candidate, mode: PruneMode) -> Vec<Location> {
        loop {
            let dangling = self.order.iter().copied().find(|&cell| {
                if mode == PruneMode::OpenPath && cell.on_rim(self.len) {
                    return false;
                }
                candidate
                    .graph
                    .neighbors(cell)
                    .filter(|&neighbor| self.contains(neighbor))
                    .count()
                    == 1
            });
            match dangling {
                Some(cell) => self.remove(cell),
                None => break,
            }
        }
        self.order
    }
}
