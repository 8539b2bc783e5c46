//! Run orchestration: start/stop, the auto-advance cadence, and the two
//! terminal conditions (all-dead and stalled).

use std::collections::VecDeque;
use std::time::Duration;

use tracing::info;

use crate::model::config::AppConfig;
use crate::model::engine::{self, StepOutcome};
use crate::model::error::{Result, SimError};
use crate::model::grid::{CellState, GridSnapshot, GridState};
use crate::model::history::RunEvent;

/// Lifecycle of the auto-advance loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not running; the grid is freely editable.
    Idle,
    /// Auto-advance is active.
    Running,
    /// Terminal: the grid became all Dead.
    StoppedEmpty,
    /// Terminal: the grid state repeated.
    StoppedStalled,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::StoppedEmpty | RunState::StoppedStalled)
    }
}

/// What the caller should do after a scheduled [`RunController::advance`].
///
/// The controller never owns a timer. The caller (an event loop, or a test
/// driving the controller synchronously) schedules the next invocation
/// when told to, and stops scheduling on `Halt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Schedule the next advance after this delay.
    Continue(Duration),
    /// Stop scheduling: a terminal state was reached or the run is over.
    Halt,
}

/// Drives repeated engine steps over a grid it exclusively owns.
///
/// Interactive editing is routed through [`toggle`](Self::toggle) and
/// [`clear`](Self::clear) so it can be rejected while a run is active;
/// notifications accumulate in an internal queue the presentation layer
/// drains once per frame.
pub struct RunController {
    grid: GridState,
    state: RunState,
    /// Input snapshot of the most recently completed step of this run.
    previous: Option<GridSnapshot>,
    generation: u64,
    step_interval: Duration,
    events: VecDeque<RunEvent>,
}

impl RunController {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let grid = GridState::new(config.grid.rows, config.grid.columns)?;
        Ok(Self::with_grid(grid, config.step_interval()))
    }

    /// Builds a controller around an existing grid, e.g. one pre-seeded
    /// with a pattern.
    pub fn with_grid(grid: GridState, step_interval: Duration) -> Self {
        Self {
            grid,
            state: RunState::Idle,
            previous: None,
            generation: 0,
            step_interval,
            events: VecDeque::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Number of completed engine steps since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Flips one cell. Rejected while a run is active.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState> {
        if self.is_running() {
            return Err(SimError::EditWhileRunning);
        }
        self.grid.toggle(row, col)
    }

    /// Resets every cell to Dead. Rejected while a run is active.
    pub fn clear(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(SimError::EditWhileRunning);
        }
        self.grid.clear();
        Ok(())
    }

    /// Begins a run. Idempotent: returns false without side effects when
    /// already Running. Starting discards the previous run's retained
    /// snapshot, so the first step of a run never stall-triggers.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = RunState::Running;
        self.previous = None;
        self.events.push_back(RunEvent::started(self.generation));
        info!(generation = self.generation, "updates started");
        true
    }

    /// Halts an active run. A no-op unless Running.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Idle;
        self.events.push_back(RunEvent::stopped(self.generation));
        info!(generation = self.generation, "updates stopped");
    }

    /// Performs one scheduled step of an active run and classifies it.
    ///
    /// The grid snapshot taken on entry is compared against the input
    /// snapshot of the previous completed step; if they match, the run
    /// stalled and no further step is taken. Otherwise the engine steps
    /// and an all-Dead result ends the run. Both terminal transitions
    /// queue a notification before halting.
    pub fn advance(&mut self) -> Directive {
        if !self.is_running() {
            return Directive::Halt;
        }

        let current = self.grid.snapshot();
        if self.previous.as_ref() == Some(&current) {
            self.state = RunState::StoppedStalled;
            self.events.push_back(RunEvent::stalled(self.generation));
            info!(generation = self.generation, "grid state unchanged, stopping updates");
            return Directive::Halt;
        }
        self.previous = Some(current);

        let outcome = self.step_once();
        if outcome.after.is_all_dead() {
            self.state = RunState::StoppedEmpty;
            self.events.push_back(RunEvent::all_dead(self.generation));
            info!(generation = self.generation, "all cells dead, stopping updates");
            return Directive::Halt;
        }

        Directive::Continue(self.step_interval)
    }

    /// Forces exactly one engine step, regardless of the run state.
    ///
    /// Policy: terminal conditions are not evaluated or reported here, and
    /// the controller is left Idle afterward even when invoked while
    /// Running. The outcome is returned so the caller can re-render or
    /// inspect the change.
    pub fn single_step(&mut self) -> StepOutcome {
        let outcome = self.step_once();
        self.state = RunState::Idle;
        self.previous = None;
        outcome
    }

    fn step_once(&mut self) -> StepOutcome {
        let outcome = engine::step(&mut self.grid);
        self.generation += 1;
        outcome
    }

    /// Takes all notifications queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        self.events.drain(..).collect()
    }
}
