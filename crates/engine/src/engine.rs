//! Engine - owns one game and drives it from the scheduler
//!
//! The host feeds key commands in with [`Engine::key`] and calls
//! [`Engine::advance`] with the current clock. Everything that is due runs in
//! queue order: gravity ticks advance the game, redraw ticks and accepted
//! commands mark the frame dirty, and one render happens at the end.

use tracing::debug;

use crate::config::Config;
use crate::core::{GameState, TickOutcome};
use crate::scheduler::{Event, Scheduler, TimerId, TimerKind};
use crate::surface::DrawSurface;
use crate::types::{GameAction, GRAVITY_MS};
use crate::view::CanvasView;

/// What one [`Engine::advance`] call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub ticks: u32,
    pub commands: u32,
    pub applied: u32,
    pub lines: u32,
    pub restarts: u32,
    pub rendered: bool,
}

pub struct Engine {
    state: GameState,
    scheduler: Scheduler,
    gravity: TimerId,
    redraw: TimerId,
    view: CanvasView,
    stopped: bool,
}

impl Engine {
    /// Wrap a game and start both timers at `now_ms`.
    pub fn new(state: GameState, redraw_ms: u64, now_ms: u64) -> Self {
        let mut scheduler = Scheduler::new();
        let gravity = scheduler.every(TimerKind::Gravity, GRAVITY_MS, now_ms);
        let redraw = scheduler.every(TimerKind::Redraw, redraw_ms, now_ms);
        Self {
            state,
            scheduler,
            gravity,
            redraw,
            view: CanvasView::default(),
            stopped: false,
        }
    }

    /// Build a fresh game from host configuration.
    pub fn from_config(config: &Config, now_ms: u64) -> Self {
        let state = match config.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        Self::new(state, config.redraw_ms, now_ms)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn move_left(&mut self) -> bool {
        self.state.apply_action(GameAction::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.state.apply_action(GameAction::MoveRight)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.state.apply_action(GameAction::SoftDrop)
    }

    pub fn rotate(&mut self) -> bool {
        self.state.apply_action(GameAction::Rotate)
    }

    /// Run one gravity step at `now_ms`.
    ///
    /// A step that restarts the game also restarts the gravity phase, so the
    /// new game's first fall comes one full period after `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let outcome = self.state.tick();
        if matches!(outcome, TickOutcome::Restarted { .. }) && !self.stopped {
            self.scheduler.rearm(self.gravity, now_ms);
        }
        outcome
    }

    /// Draw the current frame. Returns false when there is no surface.
    pub fn render(&self, surface: Option<&mut dyn DrawSurface>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        let snap = self.state.snapshot();
        self.view.draw(&snap, surface);
        true
    }

    /// Queue a key command that arrived at `now_ms`. Ignored after stop.
    pub fn key(&mut self, action: GameAction, now_ms: u64) {
        if self.stopped {
            return;
        }
        self.scheduler.push_input(action, now_ms);
    }

    /// Deliver everything due at or before `now_ms`, then render once if the
    /// frame is dirty.
    pub fn advance(&mut self, now_ms: u64, surface: Option<&mut dyn DrawSurface>) -> StepReport {
        let mut report = StepReport::default();
        if self.stopped {
            return report;
        }

        let mut dirty = false;
        while let Some(due) = self.scheduler.pop_due(now_ms) {
            match due.event {
                Event::Timer(TimerKind::Gravity) => {
                    report.ticks += 1;
                    match self.tick(due.at_ms) {
                        TickOutcome::Fell => {}
                        TickOutcome::Locked { lines } => report.lines += lines as u32,
                        TickOutcome::Restarted { lines } => {
                            report.lines += lines as u32;
                            report.restarts += 1;
                        }
                    }
                }
                Event::Timer(TimerKind::Redraw) => dirty = true,
                Event::Input(action) => {
                    report.commands += 1;
                    if self.state.apply_action(action) {
                        report.applied += 1;
                        dirty = true;
                    }
                }
            }
        }

        if dirty {
            report.rendered = self.render(surface);
        }
        report
    }

    /// Earliest instant the host needs to call [`Engine::advance`] again
    pub fn next_due_ms(&self) -> Option<u64> {
        if self.stopped {
            return None;
        }
        self.scheduler.next_due_ms()
    }

    /// Tear down: cancel both timers and drop pending commands.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.scheduler.cancel(self.gravity);
        self.scheduler.cancel(self.redraw);
        self.scheduler.clear();
        self.stopped = true;
        debug!(episode = self.state.episode_id(), "engine stopped");
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
