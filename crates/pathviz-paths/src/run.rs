//! A single suspendable search run and the events it emits.

use pathviz_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::frontier::{Expansion, Frontier};
use crate::neighbors::Neighbors;
use crate::path::{path_cost, reconstruct};
use crate::space::SearchSpace;
use crate::traits::TerrainModel;

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end was reached. `path` runs from start to end inclusive; `cost`
    /// is its weighted cost (diagonal steps ×1.41), reported for every
    /// algorithm even if it did not order by cost.
    Found { path: Vec<Point>, cost: f64 },
    /// The frontier ran dry before the end was reached.
    NotFound,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound => None,
        }
    }

    /// The found path's cost, if any.
    pub fn cost(&self) -> Option<f64> {
        match self {
            Self::Found { cost, .. } => Some(*cost),
            Self::NotFound => None,
        }
    }
}

/// One renderable step of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A cell other than start/end came off the frontier.
    Visit(Point),
    /// An interior cell of the reconstructed path, emitted start to end.
    Path(Point),
    /// The run is over; nothing follows.
    Done(Outcome),
}

/// Counters kept while a run progresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Frontier pops, the start cell included.
    pub expanded: usize,
    /// `Visit` events emitted.
    pub visited: usize,
    /// `Path` events emitted.
    pub path_cells: usize,
}

#[derive(Debug)]
enum Phase {
    Searching(Frontier),
    Tracing {
        path: Vec<Point>,
        cost: f64,
        next: usize,
    },
    Finished,
}

/// An in-progress search that advances only when asked.
///
/// Each [`step`](Run::step) performs exactly one unit of work: one frontier
/// pop while searching, or one path cell while tracing. Dropping the run
/// cancels it; nothing outside the run is ever mutated.
///
/// `Run` is also an [`Iterator`] over the visible events, skipping steps
/// that produce none. It ends after [`SearchEvent::Done`] or after the first
/// error.
#[derive(Debug)]
pub struct Run {
    algorithm: Algorithm,
    start: Point,
    end: Point,
    space: SearchSpace,
    nbuf: Neighbors,
    phase: Phase,
    stats: RunStats,
}

impl Run {
    /// Begin a search from `start` to `end`.
    ///
    /// Terrain costs are captured now; later changes to `terrain` do not
    /// affect this run. Blocking terrain under `start` or `end` is not
    /// special-cased. Fails with [`SearchError::InvalidEndpoints`] when the
    /// endpoints coincide or either lies outside `grid`.
    pub fn start<T: TerrainModel + ?Sized>(
        algorithm: Algorithm,
        start: Point,
        end: Point,
        grid: &Grid,
        terrain: &T,
    ) -> Result<Self, SearchError> {
        if start == end || !grid.contains(start) || !grid.contains(end) {
            return Err(SearchError::InvalidEndpoints { start, end });
        }
        let space = SearchSpace::capture(grid, terrain);
        let frontier = Frontier::new(algorithm, &space, start, end);
        log::debug!("{algorithm} run started: {start} -> {end} on {}", grid.bounds());
        Ok(Self {
            algorithm,
            start,
            end,
            space,
            nbuf: Neighbors::new(),
            phase: Phase::Searching(frontier),
            stats: RunStats::default(),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start_cell(&self) -> Point {
        self.start
    }

    pub fn end_cell(&self) -> Point {
        self.end
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Whether `Done` has been emitted or the run failed.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Perform one unit of work.
    ///
    /// Returns `Ok(None)` when the step had nothing to show (expanding the
    /// start cell) and always once the run is finished. A
    /// [`SearchError::BrokenChain`] finishes the run.
    pub fn step(&mut self) -> Result<Option<SearchEvent>, SearchError> {
        let expansion = match &mut self.phase {
            Phase::Searching(frontier) => frontier.expand(&self.space, &mut self.nbuf),
            Phase::Tracing { .. } => return Ok(Some(self.trace())),
            Phase::Finished => return Ok(None),
        };

        match expansion {
            Expansion::Expanded(cell) => {
                self.stats.expanded += 1;
                if cell == self.start || cell == self.end {
                    return Ok(None);
                }
                self.stats.visited += 1;
                Ok(Some(SearchEvent::Visit(cell)))
            }
            Expansion::Reached => {
                self.stats.expanded += 1;
                let Phase::Searching(frontier) = &self.phase else {
                    return Ok(None);
                };
                match reconstruct(frontier.predecessors(), self.start, self.end) {
                    Ok(path) => {
                        let cost = path_cost(&self.space, &path);
                        self.phase = Phase::Tracing {
                            path,
                            cost,
                            next: 1,
                        };
                        Ok(Some(self.trace()))
                    }
                    Err(e) => {
                        log::error!("{} run aborted: {e}", self.algorithm);
                        self.phase = Phase::Finished;
                        Err(e)
                    }
                }
            }
            Expansion::Exhausted => {
                log::info!("no path found ({})", self.algorithm);
                self.phase = Phase::Finished;
                Ok(Some(SearchEvent::Done(Outcome::NotFound)))
            }
        }
    }

    /// Emit the next interior path cell, or `Done` once they are all out.
    fn trace(&mut self) -> SearchEvent {
        if let Phase::Tracing { path, next, .. } = &mut self.phase {
            if *next + 1 < path.len() {
                let cell = path[*next];
                *next += 1;
                self.stats.path_cells += 1;
                return SearchEvent::Path(cell);
            }
        }
        match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Tracing { path, cost, .. } => {
                log::debug!(
                    "{} found a path of {} cells, cost {cost:.2}",
                    self.algorithm,
                    path.len()
                );
                SearchEvent::Done(Outcome::Found { path, cost })
            }
            // Only reachable from the Tracing phase.
            _ => SearchEvent::Done(Outcome::NotFound),
        }
    }
}

impl Iterator for Run {
    type Item = Result<SearchEvent, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.is_finished() {
            match self.step() {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Run a search to completion and return only its outcome.
pub fn find_path<T: TerrainModel + ?Sized>(
    algorithm: Algorithm,
    start: Point,
    end: Point,
    grid: &Grid,
    terrain: &T,
) -> Result<Outcome, SearchError> {
    let run = Run::start(algorithm, start, end, grid, terrain)?;
    for event in run {
        if let SearchEvent::Done(outcome) = event? {
            return Ok(outcome);
        }
    }
    Ok(Outcome::NotFound)
}
