//! Crater Dash - a catch-the-falling-things arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, ground damage)
//! - `session`: Session lifecycle (start/restart, running flag, event drain)
//!
//! Rendering, audio output and input capture live in the host. The core
//! exposes read-only state snapshots and an event queue; it never touches
//! pixels or speakers.

pub mod session;
pub mod sim;

pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const VIEW_WIDTH: f32 = 540.0;
    pub const VIEW_HEIGHT: f32 = 720.0;

    /// Player sprite box
    pub const PLAYER_WIDTH: f32 = 90.0;
    pub const PLAYER_HEIGHT: f32 = 85.0;
    /// Lateral speed in px per reference frame (60 Hz)
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Gap between the player's feet and the bottom edge when grounded
    pub const GROUND_MARGIN: f32 = 20.0;

    /// Upward velocity applied on jump (negative = up, screen coords)
    pub const JUMP_POWER: f32 = -13.0;
    /// Gravity in px per frame squared
    pub const GRAVITY: f32 = 0.8;

    /// Falling object sprite box (square)
    pub const OBJECT_SIZE: f32 = 46.0;
    /// Base fall speed range in px per frame, before difficulty scaling
    pub const FALL_SPEED_MIN: f32 = 2.0;
    pub const FALL_SPEED_MAX: f32 = 5.0;
    /// Wobble phase advance per frame
    pub const WOBBLE_PHASE_STEP: f32 = 0.12;

    /// Hit-box insets that forgive pixel-edge grazes
    pub const PLAYER_HITBOX_INSET: f32 = 12.0;
    pub const OBJECT_HITBOX_INSET: f32 = 4.0;
    /// Inset for the foot span used by the crater fall-through check
    pub const PLAYER_FOOT_INSET: f32 = 19.0;

    /// Spawn mix
    pub const HAZARD_PROBABILITY: f32 = 0.30;
    /// Chance that a reward spawn is a bonus reward
    pub const BONUS_PROBABILITY: f32 = 0.08;

    /// Point values for ordinary rewards, drawn uniformly
    pub const REWARD_VALUES: [u32; 12] = [5, 8, 10, 12, 15, 18, 22, 25, 30, 35, 40, 50];
    /// Point value of a bonus reward
    pub const BONUS_REWARD_VALUE: u32 = 60;

    /// Ground shaved off each crater end when a bonus reward is collected
    pub const CRATER_REPAIR_AMOUNT: f32 = 18.0;

    /// Time spent tumbling through a crater before the run ends
    pub const FALL_THROUGH_DURATION_MS: f64 = 900.0;
    /// Time the explosion effect plays before the run ends
    pub const EXPLOSION_DURATION_MS: f64 = 700.0;

    /// Ticks between ambient audio cues
    pub const AMBIENT_NOTE_PERIOD_TICKS: u64 = 90;

    /// Lifetime of a floating score annotation, in ticks
    pub const FLOATING_SCORE_TTL_TICKS: u32 = 50;

    /// Largest frame delta the simulation will integrate (ms)
    pub const MAX_FRAME_DT_MS: f32 = 100.0;

    /// Reference frame duration for speed normalization (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Player top edge when standing on intact ground
    pub const GROUND_Y: f32 = VIEW_HEIGHT - PLAYER_HEIGHT - GROUND_MARGIN;
}
