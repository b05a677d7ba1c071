//! Player controller: lateral movement, jump physics and the phase machine
//!
//! Phase transitions out of `Normal` happen in exactly two ways: standing on
//! a fully damaged patch of ground (here), or a hazard impact (requested by
//! collision resolution via [`request_explosion`]). Terminal timeouts for
//! `Falling` and `Exploding` are checked by the clock, not here.

use super::state::{GameState, PlayerPhase};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the player by one tick. `step` is the frame-normalized delta.
pub fn update_player(state: &mut GameState, input: &TickInput, step: f32) {
    match state.player.phase {
        PlayerPhase::Normal => update_normal(state, input, step),
        PlayerPhase::Falling { .. } => {
            // Unconstrained descent; no input, no ground clamp
            let player = &mut state.player;
            player.vertical_velocity += GRAVITY * step;
            player.pos.y += player.vertical_velocity * step;
        }
        // Frozen while the explosion plays; terminal state accepts nothing
        PlayerPhase::Exploding { .. } | PlayerPhase::GameOver => {}
    }
}

fn update_normal(state: &mut GameState, input: &TickInput, step: f32) {
    let player = &mut state.player;

    if input.left {
        player.pos.x = (player.pos.x - PLAYER_SPEED * step).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + PLAYER_SPEED * step).min(VIEW_WIDTH - PLAYER_WIDTH);
    }

    if input.jump && player.grounded() {
        player.vertical_velocity = JUMP_POWER;
    }

    player.vertical_velocity += GRAVITY * step;
    player.pos.y += player.vertical_velocity * step;

    if player.pos.y < GROUND_Y {
        return;
    }
    let (foot_x, foot_width) = player.foot_span();
    let descending = player.vertical_velocity >= 0.0;
    if descending && state.ground.is_unsupported(foot_x, foot_width) {
        enter_falling(state);
    } else {
        state.player.pos.y = GROUND_Y;
        state.player.vertical_velocity = 0.0;
    }
}

/// Transition Normal -> Falling: freeze input, zero vertical velocity, keep
/// the feet inside the crater that swallowed them.
fn enter_falling(state: &mut GameState) {
    let (foot_x, foot_width) = state.player.foot_span();
    if let Some(crater) = state.ground.crater_at(foot_x + foot_width / 2.0) {
        let min_x = crater.left - PLAYER_FOOT_INSET;
        let max_x = crater.right - foot_width - PLAYER_FOOT_INSET;
        if min_x <= max_x {
            state.player.pos.x = state.player.pos.x.clamp(min_x, max_x);
        }
    }
    state.player.vertical_velocity = 0.0;
    state.player.phase = PlayerPhase::Falling {
        since_ms: state.elapsed_ms,
    };
    log::info!("player fell through a crater at x={:.1}", state.player.pos.x);
}

/// Requested by collision resolution on hazard impact. Only honored while
/// `Normal`; at most one explosion can start per run.
pub fn request_explosion(state: &mut GameState) {
    if state.player.phase != PlayerPhase::Normal {
        return;
    }
    let origin = state.player.center();
    state.player.phase = PlayerPhase::Exploding {
        since_ms: state.elapsed_ms,
        origin,
    };
    log::info!("hazard impact at ({:.1}, {:.1})", origin.x, origin.y);
}
