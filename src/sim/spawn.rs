//! Time-gated spawner for falling objects
//!
//! At most one object per spawn interval; the interval, fall speed scaling
//! and wobble amplitude all come from the difficulty model, re-evaluated at
//! the moment of the spawn decision.

use glam::Vec2;
use rand::Rng;

use super::difficulty::difficulty_for_score;
use super::state::{FallingObject, GameState, ObjectKind};
use crate::consts::*;

/// Spawn one object if the interval since the last spawn has elapsed.
pub fn maybe_spawn(state: &mut GameState) {
    let difficulty = difficulty_for_score(state.score);
    if state.elapsed_ms - state.last_spawn_ms < f64::from(difficulty.spawn_interval_ms) {
        return;
    }
    state.last_spawn_ms = state.elapsed_ms;

    let kind = if state.rng.random::<f32>() < HAZARD_PROBABILITY {
        ObjectKind::Hazard
    } else if state.rng.random::<f32>() < BONUS_PROBABILITY {
        ObjectKind::BonusReward {
            value: BONUS_REWARD_VALUE,
        }
    } else {
        let idx = state.rng.random_range(0..REWARD_VALUES.len());
        ObjectKind::Reward {
            value: REWARD_VALUES[idx],
        }
    };

    let x = state.rng.random_range(0.0..=(VIEW_WIDTH - OBJECT_SIZE));
    let fall_speed =
        state.rng.random_range(FALL_SPEED_MIN..=FALL_SPEED_MAX) * difficulty.speed_multiplier;
    let wobble_phase = state.rng.random_range(0.0..std::f32::consts::TAU);

    let id = state.next_entity_id();
    state.objects.push(FallingObject {
        id,
        kind,
        pos: Vec2::new(x, -OBJECT_SIZE),
        fall_speed,
        wobble_phase,
        wobble_amplitude: difficulty.wobble_amplitude,
    });
    log::debug!("spawned {kind:?} at x={x:.1} speed={fall_speed:.2}");
}
