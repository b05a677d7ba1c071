//! Collision resolution and scoring
//!
//! Axis-aligned overlap tests between inset hit-boxes. The insets forgive
//! pixel-edge grazes: sprite boxes may touch without registering a hit.
//! Outcomes are applied per object kind; at most one hazard per tick gets to
//! start the explosion (first in id order), though every overlapping hazard
//! is still consumed.

use glam::Vec2;

use super::player::request_explosion;
use super::state::{FloatingScore, GameState, ObjectKind, PlayerPhase};
use crate::consts::*;

/// An axis-aligned rectangle (top-left anchored, screen coords)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: (self.w - 2.0 * amount).max(0.0),
            h: (self.h - 2.0 * amount).max(0.0),
        }
    }

    /// Strict overlap: rectangles that merely share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

fn player_hitbox(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, PLAYER_WIDTH, PLAYER_HEIGHT).inset(PLAYER_HITBOX_INSET)
}

fn object_hitbox(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, OBJECT_SIZE, OBJECT_SIZE).inset(OBJECT_HITBOX_INSET)
}

/// Test every live object against the player and apply outcomes.
pub fn resolve_collisions(state: &mut GameState) {
    // Only a Normal player can catch or be hit by anything
    if state.player.phase != PlayerPhase::Normal {
        return;
    }

    let player_box = player_hitbox(state.player.pos);
    let mut hits: Vec<(u32, ObjectKind, Vec2)> = Vec::new();
    for obj in &state.objects {
        if player_box.overlaps(&object_hitbox(obj.pos)) {
            hits.push((obj.id, obj.kind, obj.pos));
        }
    }
    if hits.is_empty() {
        return;
    }

    let mut exploded = false;
    for (id, kind, pos) in hits {
        match kind {
            ObjectKind::Hazard => {
                // First hazard in id order wins; the rest are consumed silently
                if !exploded {
                    exploded = true;
                    request_explosion(state);
                    state.push_event(super::state::GameEvent::Audio(
                        super::state::AudioCue::ImpactCue,
                    ));
                }
            }
            ObjectKind::Reward { value } | ObjectKind::BonusReward { value } => {
                state.score += value;
                state.floating_scores.push(FloatingScore {
                    value,
                    pos,
                    ttl_ticks: FLOATING_SCORE_TTL_TICKS,
                });
                if matches!(kind, ObjectKind::BonusReward { .. }) {
                    state.ground.repair_largest(CRATER_REPAIR_AMOUNT);
                }
            }
        }
        state.objects.retain(|o| o.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ground::Crater;
    use crate::sim::state::{AudioCue, FallingObject, GameEvent};

    fn overlapping_object(state: &mut GameState, kind: ObjectKind) -> u32 {
        let id = state.next_entity_id();
        // Drop the object dead-center on the player
        let center = state.player.center();
        state.objects.push(FallingObject {
            id,
            kind,
            pos: center - Vec2::splat(OBJECT_SIZE / 2.0),
            fall_speed: 3.0,
            wobble_phase: 0.0,
            wobble_amplitude: 0.0,
        });
        id
    }

    #[test]
    fn test_inset_boxes_touching_is_not_a_hit() {
        let player = Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT);
        // Sprite boxes exactly edge to edge: strict test already says no
        let object = Rect::new(PLAYER_WIDTH, 0.0, OBJECT_SIZE, OBJECT_SIZE);
        assert!(!player.overlaps(&object));
        // Inset boxes are 16 px apart
        assert!(
            !player
                .inset(PLAYER_HITBOX_INSET)
                .overlaps(&object.inset(OBJECT_HITBOX_INSET))
        );
        // Even sprite overlap shallower than the combined insets is forgiven
        let grazing = Rect::new(PLAYER_WIDTH - 10.0, 0.0, OBJECT_SIZE, OBJECT_SIZE);
        assert!(player.overlaps(&grazing));
        assert!(
            !player
                .inset(PLAYER_HITBOX_INSET)
                .overlaps(&grazing.inset(OBJECT_HITBOX_INSET))
        );
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(10.0, 10.0, 40.0, 40.0);
        let b = Rect::new(30.0, 30.0, 40.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        let c = Rect::new(200.0, 200.0, 40.0, 40.0);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_reward_scores_and_is_removed() {
        let mut state = GameState::new(1);
        overlapping_object(&mut state, ObjectKind::Reward { value: 12 });
        resolve_collisions(&mut state);
        assert_eq!(state.score, 12);
        assert!(state.objects.is_empty());
        assert_eq!(state.player.phase, PlayerPhase::Normal);
        assert_eq!(state.floating_scores.len(), 1);
        assert_eq!(state.floating_scores[0].value, 12);
    }

    #[test]
    fn test_hazard_triggers_explosion() {
        let mut state = GameState::new(1);
        overlapping_object(&mut state, ObjectKind::Hazard);
        resolve_collisions(&mut state);
        assert!(matches!(state.player.phase, PlayerPhase::Exploding { .. }));
        assert!(state.objects.is_empty());
        assert_eq!(state.score, 0);
        assert!(
            state
                .events
                .contains(&GameEvent::Audio(AudioCue::ImpactCue))
        );
    }

    #[test]
    fn test_explosion_origin_is_player_center() {
        let mut state = GameState::new(1);
        let center = state.player.center();
        overlapping_object(&mut state, ObjectKind::Hazard);
        resolve_collisions(&mut state);
        match state.player.phase {
            PlayerPhase::Exploding { origin, .. } => assert_eq!(origin, center),
            other => panic!("expected Exploding, got {other:?}"),
        }
    }

    #[test]
    fn test_two_hazards_one_explosion_both_removed() {
        let mut state = GameState::new(1);
        overlapping_object(&mut state, ObjectKind::Hazard);
        overlapping_object(&mut state, ObjectKind::Hazard);
        resolve_collisions(&mut state);
        assert!(state.objects.is_empty());
        let impacts = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Audio(AudioCue::ImpactCue)))
            .count();
        assert_eq!(impacts, 1);
        assert!(matches!(state.player.phase, PlayerPhase::Exploding { .. }));
    }

    #[test]
    fn test_bonus_reward_repairs_largest_crater() {
        let mut state = GameState::new(1);
        state.ground.insert_damage(Crater {
            left: 50.0,
            right: 150.0,
        });
        overlapping_object(&mut state, ObjectKind::BonusReward { value: 60 });
        resolve_collisions(&mut state);
        assert_eq!(state.score, 60);
        let crater = state.ground.craters()[0];
        assert!((crater.left - 68.0).abs() < 1e-4);
        assert!((crater.right - 132.0).abs() < 1e-4);
    }

    #[test]
    fn test_distant_object_untouched() {
        let mut state = GameState::new(1);
        let id = state.next_entity_id();
        state.objects.push(FallingObject {
            id,
            kind: ObjectKind::Reward { value: 30 },
            pos: Vec2::new(0.0, 0.0),
            fall_speed: 3.0,
            wobble_phase: 0.0,
            wobble_amplitude: 0.0,
        });
        resolve_collisions(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_no_collection_while_falling() {
        let mut state = GameState::new(1);
        state.player.phase = PlayerPhase::Falling { since_ms: 0.0 };
        overlapping_object(&mut state, ObjectKind::Reward { value: 10 });
        resolve_collisions(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);
    }
}
