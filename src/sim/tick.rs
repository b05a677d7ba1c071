//! The per-frame update pipeline
//!
//! One tick runs the fixed sequence: spawn, move player, check terminal
//! timeouts, move entities, resolve collisions. The host drives this from
//! its frame scheduler (~60 Hz, no fixed timestep guarantee) and passes the
//! wall-clock delta; speeds are expressed per 60 Hz reference frame and
//! scaled by the delta.
//!
//! Terminal timeouts (falling, exploding) are duration counters checked
//! here rather than host-scheduled timers, so a restarted session can never
//! be mutated by a stale callback.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::motion::advance_objects;
use super::player::update_player;
use super::spawn::maybe_spawn;
use super::state::{AudioCue, GameEvent, GameState, PlayerPhase};
use crate::consts::*;

/// Logical keys the simulation understands. The host maps physical key
/// events onto these; anything it cannot map is simply never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// Held-key snapshot read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl TickInput {
    /// Update the held/not-held mapping from a key event
    pub fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Jump => self.jump = held,
        }
    }
}

/// Advance the game by one tick. No-op once the run has ended.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if !state.running {
        return;
    }

    // Host-supplied delta: clamp rather than propagate out-of-range values
    let dt_ms = if dt_ms.is_finite() {
        dt_ms.clamp(0.0, MAX_FRAME_DT_MS)
    } else {
        FRAME_MS
    };
    let step = dt_ms / FRAME_MS;

    state.time_ticks += 1;
    state.elapsed_ms += f64::from(dt_ms);

    if state.time_ticks % AMBIENT_NOTE_PERIOD_TICKS == 0 {
        state.push_event(GameEvent::Audio(AudioCue::AmbientNote));
    }

    maybe_spawn(state);
    update_player(state, input, step);

    match state.player.phase {
        PlayerPhase::Falling { since_ms }
            if state.elapsed_ms - since_ms >= FALL_THROUGH_DURATION_MS =>
        {
            state.enter_game_over();
        }
        PlayerPhase::Exploding { since_ms, .. }
            if state.elapsed_ms - since_ms >= EXPLOSION_DURATION_MS =>
        {
            state.enter_game_over();
        }
        _ => {}
    }
    if !state.running {
        return;
    }

    advance_objects(state, step);
    resolve_collisions(state);
}
