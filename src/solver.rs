//! Constraint building and the lazy-cut search loop.
//!
//! The static model (selector exclusivity, symbol patterns, black
//! non-adjacency, three-region runs, the white-neighbor floor) goes to the
//! engine up front. The two topology rules cannot be stated statically at
//! practical size, so each candidate the engine produces is handed to the
//! [`oracle`](crate::oracle); a violation becomes one blocking clause over
//! its pruned cells and the search resumes with the engine's learned state
//! intact.

use itertools::Itertools;
use log::{debug, info};
use ndarray::Array2;
use varisat::{CnfFormula, ExtendFormula, Solver, Var};

use crate::board::Board;
use crate::cell::Symbol;
use crate::error::SolveError;
use crate::location::Location;
use crate::logic;
use crate::oracle::{boundary_wall, diagonal_loop, Candidate};
use crate::region::Region;

/// Per-cell selector pair in the engine's variable space. Exactly one of
/// the two holds in any model.
#[derive(Clone, Copy)]
struct CellVars {
    black: Var,
    white: Var,
}

/// A coloring accepted by every static constraint and every learned cut,
/// translated out of the engine's variable space.
pub(crate) struct Outcome {
    pub(crate) blacks: Array2<bool>,
    pub(crate) cuts_added: usize,
}

/// Builds the model for one board and drives the engine through the
/// lazy-cut loop. One instance per solve call; nothing is shared.
pub(crate) struct ShadingSolver<'a> {
    board: &'a Board,
    vars: Array2<CellVars>,
}

impl<'a> ShadingSolver<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        let len = board.len;
        let vars = Array2::from_shape_fn((len, len), |(row, col)| {
            let base = 2 * (row * len + col);
            CellVars {
                black: Var::from_index(base),
                white: Var::from_index(base + 1),
            }
        });
        Self { board, vars }
    }

    #[inline]
    fn black(&self, location: Location) -> Var {
        self.vars[location.as_index()].black
    }

    #[inline]
    fn white(&self, location: Location) -> Var {
        self.vars[location.as_index()].white
    }

    /// Run the engine to a verdict: a coloring, or proof that none exists.
    pub(crate) fn solve(&self) -> Result<Option<Outcome>, SolveError> {
        let len = self.board.len;
        let mut engine = Solver::new();
        engine.add_formula(&self.static_formula());

        let mut cuts_added = 0usize;
        loop {
            let feasible = engine
                .solve()
                .map_err(|failure| SolveError::Engine(failure.to_string()))?;
            if !feasible {
                info!("no coloring exists; search closed after {cuts_added} cuts");
                return Ok(None);
            }

            let model = engine.model().ok_or_else(|| {
                SolveError::Engine("engine reported feasible but yielded no model".to_owned())
            })?;
            let blacks = Array2::from_shape_fn((len, len), |index| {
                model[self.vars[index].black.index()].is_positive()
            });
            let candidate = Candidate::new(len, blacks);

            // at most one cut per rule family per candidate; later
            // violations surface on later candidates
            let mut cuts = Vec::with_capacity(2);
            if let Some(wall) = boundary_wall(&candidate) {
                debug!("rim-to-rim wall through {} cells, cutting", wall.len());
                cuts.push(wall);
            }
            if let Some(cycle) = diagonal_loop(&candidate) {
                debug!("diagonal loop through {} cells, cutting", cycle.len());
                cuts.push(cycle);
            }

            if cuts.is_empty() {
                info!("coloring found after {cuts_added} cuts");
                return Ok(Some(Outcome {
                    blacks: candidate.blacks,
                    cuts_added,
                }));
            }

            for cut in cuts {
                // the violating cells may never all be black again
                engine.add_clause(&logic::not_all(
                    cut.iter().map(|&location| self.black(location)),
                ));
                cuts_added += 1;
            }
        }
    }

    /// Every constraint knowable before search begins.
    fn static_formula(&self) -> CnfFormula {
        let mut formula = CnfFormula::new();
        let len = self.board.len;
        let locations = (0..len)
            .cartesian_product(0..len)
            .map(|(y, x)| Location(x, y))
            .collect_vec();

        for &location in &locations {
            for clause in logic::exactly_one_of(self.black(location), self.white(location)) {
                formula.add_clause(&clause);
            }
        }

        for region in &self.board.regions {
            if region.symbol != Symbol::None {
                self.add_symbol_clauses(&mut formula, region);
            }
        }

        for &location in &locations {
            // no two orthogonally adjacent cells are both black
            for neighbor in self.board.orthogonal_neighbors(location) {
                if location < neighbor {
                    formula.add_clause(&logic::not_both(self.black(location), self.black(neighbor)));
                }
            }
        }

        // wherever a region ends to the south or east, a straight run that
        // reaches a third region must contain a black cell
        for &location in &locations {
            let cell = &self.board.cells[location.as_index()];
            if cell.south {
                if let Some(run) = self.board.southward_run(location) {
                    formula.add_clause(
                        &run.iter().map(|&spot| self.black(spot).positive()).collect_vec(),
                    );
                }
            }
            if cell.east {
                if let Some(run) = self.board.eastward_run(location) {
                    formula.add_clause(
                        &run.iter().map(|&spot| self.black(spot).positive()).collect_vec(),
                    );
                }
            }
        }

        // white-neighbor floor: a white cell keeps at least one white
        // orthogonal neighbor; a necessary proxy for the single connected
        // white area, the rest is enforced by the lazy cuts
        for &location in &locations {
            let neighbors = self.board.orthogonal_neighbors(location);
            formula.add_clause(&logic::implies_any(
                self.white(location),
                neighbors.iter().map(|&neighbor| self.white(neighbor)),
            ));
        }

        formula
    }

    /// Project the region onto its bounding rectangle and constrain each
    /// member against its 180°-rotated counterpart.
    fn add_symbol_clauses(&self, formula: &mut CnfFormula, region: &Region) {
        let Some(&first) = region.cells.first() else {
            return;
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.0, first.0, first.1, first.1);
        for location in &region.cells {
            min_x = min_x.min(location.0);
            max_x = max_x.max(location.0);
            min_y = min_y.min(location.1);
            max_y = max_y.max(location.1);
        }
        let rotated = |location: Location| {
            Location(min_x + max_x - location.0, min_y + max_y - location.1)
        };

        for &location in &region.cells {
            let twin = rotated(location);
            let paired = region.cells.contains(&twin);
            match region.symbol {
                Symbol::Symmetric => {
                    if twin == location {
                        continue;
                    }
                    if !paired {
                        // counterpart is a hole in the rectangle; the
                        // pattern can only hold if this cell stays white
                        formula.add_clause(&[self.black(location).negative()]);
                    } else if location < twin {
                        for clause in logic::same_value(self.black(location), self.black(twin)) {
                            formula.add_clause(&clause);
                        }
                    }
                }
                Symbol::Asymmetric => {
                    if twin == location {
                        // its own counterpart; "not both black" collapses
                        // to "not black"
                        formula.add_clause(&[self.black(location).negative()]);
                    } else if paired && location < twin {
                        formula.add_clause(&logic::not_both(self.black(location), self.black(twin)));
                    }
                }
                Symbol::None => unreachable!("caller filters unmarked regions"),
            }
        }
    }
}
