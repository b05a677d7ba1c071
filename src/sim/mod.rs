//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod ground;
pub mod motion;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, resolve_collisions};
pub use difficulty::{Difficulty, difficulty_for_score};
pub use ground::{Crater, Ground};
pub use state::{
    AudioCue, FallingObject, FloatingScore, GameEvent, GameState, ObjectKind, Player, PlayerPhase,
};
pub use tick::{Key, TickInput, tick};
