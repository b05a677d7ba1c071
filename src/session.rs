//! Session lifecycle
//!
//! A [`Session`] owns one run's [`GameState`] and rebuilds it wholesale on
//! (re)start; nothing mutates shared globals. Each start bumps a generation
//! counter, so anything the host scheduled against an earlier run can check
//! it and bail out instead of mutating a fresh session.

use crate::sim::state::{GameEvent, GameState};
use crate::sim::tick::{TickInput, tick};

/// One playable session: a run in progress or the terminal state of the
/// last run.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    generation: u64,
}

impl Session {
    /// Create a session and start its first run
    pub fn new(seed: u64) -> Self {
        log::info!("session started with seed {seed}");
        Self {
            state: GameState::new(seed),
            generation: 1,
        }
    }

    /// Discard the current run and start a fresh one. Deterministic given
    /// the seed; pending events from the old run are dropped with it.
    pub fn start(&mut self, seed: u64) {
        self.state = GameState::new(seed);
        self.generation += 1;
        log::info!("session restarted with seed {seed}");
    }

    /// Advance the run by one frame. No-op after game over.
    pub fn tick(&mut self, input: &TickInput, dt_ms: f32) {
        tick(&mut self.state, input, dt_ms);
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn current_score(&self) -> u32 {
        self.state.score
    }

    /// Identity of the current run. A host callback captured before a
    /// restart sees a mismatch and must treat itself as stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only snapshot for the renderer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drain pending events (audio cues, the one-shot terminal event)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
