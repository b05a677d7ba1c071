//! Per-tick motion for falling objects
//!
//! Objects fall, optionally wobble sideways, and are culled once they leave
//! the bottom of the playfield. A hazard that reaches the bottom digs a
//! crater spanning its horizontal footprint. Objects never interact with
//! each other, so processing order does not matter.

use super::ground::Crater;
use super::state::{GameState, ObjectKind};
use crate::consts::*;

/// Advance every live object by one tick. `step` is the frame-normalized
/// delta (1.0 = one 60 Hz frame).
pub fn advance_objects(state: &mut GameState, step: f32) {
    let mut landed_hazards: Vec<f32> = Vec::new();

    state.objects.retain_mut(|obj| {
        obj.pos.y += obj.fall_speed * step;

        if obj.wobble_amplitude > 0.0 {
            obj.pos.x += obj.wobble_phase.sin() * obj.wobble_amplitude * step;
            obj.wobble_phase += WOBBLE_PHASE_STEP * step;
            obj.pos.x = obj.pos.x.clamp(0.0, VIEW_WIDTH - OBJECT_SIZE);
        }

        if obj.pos.y > VIEW_HEIGHT {
            if obj.kind == ObjectKind::Hazard {
                landed_hazards.push(obj.pos.x);
            }
            return false;
        }
        true
    });

    for x in landed_hazards {
        state.ground.insert_damage(Crater {
            left: x,
            right: x + OBJECT_SIZE,
        });
        log::debug!("hazard landed, crater [{x:.1}, {:.1}]", x + OBJECT_SIZE);
    }

    // Decorative popups drift up and expire
    state.floating_scores.retain_mut(|popup| {
        popup.pos.y -= 0.8 * step;
        popup.ttl_ticks = popup.ttl_ticks.saturating_sub(1);
        popup.ttl_ticks > 0
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FallingObject;
    use glam::Vec2;

    fn object(kind: ObjectKind, x: f32, y: f32, speed: f32) -> FallingObject {
        FallingObject {
            id: 1,
            kind,
            pos: Vec2::new(x, y),
            fall_speed: speed,
            wobble_phase: 0.0,
            wobble_amplitude: 0.0,
        }
    }

    #[test]
    fn test_objects_fall_by_speed() {
        let mut state = GameState::new(1);
        state
            .objects
            .push(object(ObjectKind::Reward { value: 10 }, 100.0, 50.0, 3.0));
        advance_objects(&mut state, 1.0);
        assert_eq!(state.objects[0].pos.y, 53.0);
        assert_eq!(state.objects[0].pos.x, 100.0);
    }

    #[test]
    fn test_wobble_moves_and_clamps() {
        let mut state = GameState::new(1);
        let mut obj = object(ObjectKind::Reward { value: 10 }, 0.5, 50.0, 3.0);
        obj.wobble_phase = -std::f32::consts::FRAC_PI_2; // sin = -1, pushes left
        obj.wobble_amplitude = 3.0;
        state.objects.push(obj);
        advance_objects(&mut state, 1.0);
        // Clamped at the left edge rather than leaving the playfield
        assert_eq!(state.objects[0].pos.x, 0.0);
        assert!(state.objects[0].wobble_phase > -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_missed_hazard_digs_crater() {
        let mut state = GameState::new(1);
        state
            .objects
            .push(object(ObjectKind::Hazard, 200.0, VIEW_HEIGHT - 1.0, 4.0));
        let score_before = state.score;
        advance_objects(&mut state, 1.0);
        assert!(state.objects.is_empty());
        assert_eq!(state.ground.craters().len(), 1);
        let crater = state.ground.craters()[0];
        assert_eq!(crater.left, 200.0);
        assert_eq!(crater.right, 200.0 + OBJECT_SIZE);
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn test_missed_reward_just_disappears() {
        let mut state = GameState::new(1);
        state.objects.push(object(
            ObjectKind::Reward { value: 25 },
            200.0,
            VIEW_HEIGHT - 1.0,
            4.0,
        ));
        advance_objects(&mut state, 1.0);
        assert!(state.objects.is_empty());
        assert!(state.ground.is_intact());
        assert_eq!(state.score, 0);
    }
}
