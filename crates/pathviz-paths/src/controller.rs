//! Ownership of the single active run.

use std::fmt;
use std::ops::ControlFlow;
use std::time::Duration;

use pathviz_core::{Board, Grid, Point, TerrainRegistry};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::run::{Outcome, Run, SearchEvent};
use crate::traits::TerrainModel;

/// Pacing for drivers that animate a run.
///
/// The engine itself never waits; only [`RunController::drive`] consults
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Pause after each rendered event.
    pub step_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(20),
        }
    }
}

/// Identifier handed out for each started run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Controller state.
///
/// `Idle → Running → {Found, NotFound}`; starting, canceling or clearing
/// the board returns to `Idle` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Found,
    NotFound,
}

/// Owns at most one [`Run`].
///
/// Starting a new run discards the active one immediately. Events are pulled
/// with [`next_event`](Self::next_event); a discarded run can never produce
/// another event because it no longer exists.
#[derive(Debug)]
pub struct RunController {
    config: RunConfig,
    active: Option<Run>,
    state: RunState,
    last_id: Option<RunId>,
    next_id: u64,
}

impl Default for RunController {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl RunController {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            active: None,
            state: RunState::Idle,
            last_id: None,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RunConfig {
        &mut self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Id of the active run, or of the last one started.
    pub fn run_id(&self) -> Option<RunId> {
        self.last_id
    }

    /// The active run, if any.
    pub fn active(&self) -> Option<&Run> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Cancel whatever is running and start a new search.
    ///
    /// On [`SearchError::InvalidEndpoints`] the previous run is still gone
    /// and the controller is `Idle`.
    pub fn start<T: TerrainModel + ?Sized>(
        &mut self,
        algorithm: Algorithm,
        start: Point,
        end: Point,
        grid: &Grid,
        terrain: &T,
    ) -> Result<RunId, SearchError> {
        self.cancel();
        let run = Run::start(algorithm, start, end, grid, terrain)?;
        let id = RunId(self.next_id);
        self.next_id += 1;
        self.active = Some(run);
        self.state = RunState::Running;
        self.last_id = Some(id);
        log::debug!("{id}: {algorithm} running");
        Ok(id)
    }

    /// [`start`](Self::start) using the board's markers and terrain.
    pub fn start_on_board(
        &mut self,
        algorithm: Algorithm,
        board: &Board,
        registry: &TerrainRegistry,
    ) -> Result<RunId, SearchError> {
        self.start(
            algorithm,
            board.start(),
            board.end(),
            board.grid(),
            &board.view(registry),
        )
    }

    /// Drop the active run without a completion event and go `Idle`.
    ///
    /// Returns whether a run was actually discarded.
    pub fn cancel(&mut self) -> bool {
        let discarded = self.active.take().is_some();
        if let Some(id) = self.last_id.filter(|_| discarded) {
            log::debug!("{id}: canceled");
        }
        self.state = RunState::Idle;
        discarded
    }

    /// Pull the next visible event of the active run.
    ///
    /// Returns `None` when no run is active. After `Done` or an error the run
    /// is released.
    pub fn next_event(&mut self) -> Option<Result<SearchEvent, SearchError>> {
        let item = self.active.as_mut()?.next();
        match &item {
            Some(Ok(SearchEvent::Done(outcome))) => {
                self.state = if outcome.is_found() {
                    RunState::Found
                } else {
                    RunState::NotFound
                };
                self.active = None;
            }
            Some(Ok(_)) => {}
            Some(Err(_)) | None => {
                self.state = RunState::Idle;
                self.active = None;
            }
        }
        item
    }

    /// Reset all terrain except the markers to the default.
    ///
    /// A running search is canceled first. Returns the number of cells reset.
    pub fn clear_board(&mut self, board: &mut Board) -> usize {
        self.cancel();
        board.clear()
    }

    /// Pump the active run to the end, handing each event to `render` and
    /// then calling `wait` with the configured delay.
    ///
    /// `render` may return [`ControlFlow::Break`] to cancel the run. Returns
    /// the outcome if the run finished, `None` if it was canceled or no run
    /// was active.
    pub fn drive<R, W>(&mut self, mut render: R, mut wait: W) -> Result<Option<Outcome>, SearchError>
    where
        R: FnMut(&SearchEvent) -> ControlFlow<()>,
        W: FnMut(Duration),
    {
        while let Some(item) = self.next_event() {
            let event = item?;
            if render(&event).is_break() {
                self.cancel();
                return Ok(None);
            }
            if let SearchEvent::Done(outcome) = event {
                return Ok(Some(outcome));
            }
            wait(self.config.step_delay);
        }
        Ok(None)
    }
}
