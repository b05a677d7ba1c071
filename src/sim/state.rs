//! Game state and core simulation types
//!
//! Everything a run needs to be reproduced from its seed lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ground::Ground;
use crate::consts::*;

/// What a falling object does on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Ends the run on contact; digs a crater if it reaches the ground
    Hazard,
    /// Adds `value` points on contact
    Reward { value: u32 },
    /// Rare reward that also repairs ground damage
    BonusReward { value: u32 },
}

/// A falling object entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// Top-left corner of the sprite box
    pub pos: Vec2,
    /// Vertical speed in px per frame (difficulty-scaled at spawn)
    pub fall_speed: f32,
    /// Lateral oscillation phase (radians)
    pub wobble_phase: f32,
    /// Lateral oscillation amplitude (0 = falls straight)
    pub wobble_amplitude: f32,
}

/// Player state machine
///
/// The phases are mutually exclusive by construction; there is no way to be
/// both exploding and falling through a crater.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerPhase {
    /// Accepting input, standing or jumping on the ground plane
    Normal,
    /// Dropping through a crater; input is ignored
    Falling { since_ms: f64 },
    /// Hit by a hazard; frozen while the effect plays out
    Exploding { since_ms: f64, origin: Vec2 },
    /// Terminal. No further updates accepted.
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite box
    pub pos: Vec2,
    /// Vertical velocity in px per frame (negative = up)
    pub vertical_velocity: f32,
    pub phase: PlayerPhase,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(VIEW_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, GROUND_Y),
            vertical_velocity: 0.0,
            phase: PlayerPhase::Normal,
        }
    }

    /// Center of the sprite box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0)
    }

    /// True when resting on (or below) the ground plane
    pub fn grounded(&self) -> bool {
        self.pos.y >= GROUND_Y
    }

    /// Horizontal span of the feet, used by the crater fall-through check
    pub fn foot_span(&self) -> (f32, f32) {
        (
            self.pos.x + PLAYER_FOOT_INSET,
            PLAYER_WIDTH - 2.0 * PLAYER_FOOT_INSET,
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Audio cues the host may render; timbre is entirely up to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Hazard struck the player
    ImpactCue,
    /// Periodic background tick
    AmbientNote,
}

/// Events produced by the simulation for the host to consume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Audio(AudioCue),
    /// Fired exactly once per run, when the terminal state is entered
    GameOver { score: u32 },
}

/// A transient score annotation drifting up from a collected reward.
/// Purely decorative; the renderer consumes it, nothing else reads it.
#[derive(Debug, Clone, Copy)]
pub struct FloatingScore {
    pub value: u32,
    pub pos: Vec2,
    pub ttl_ticks: u32,
}

/// Complete game state for one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw of the run goes through it
    pub rng: Pcg32,
    /// Whether the run is still ticking
    pub running: bool,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated clock time since start (ms)
    pub elapsed_ms: f64,
    /// Clock time of the last spawn (ms)
    pub last_spawn_ms: f64,
    pub player: Player,
    /// Live falling objects, in spawn (id) order
    pub objects: Vec<FallingObject>,
    /// Damaged ground intervals
    pub ground: Ground,
    /// Decorative score popups (renderer-only)
    #[serde(skip)]
    pub floating_scores: Vec<FloatingScore>,
    /// Pending events, drained by the host each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh running state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            running: true,
            score: 0,
            time_ticks: 0,
            elapsed_ms: 0.0,
            last_spawn_ms: 0.0,
            player: Player::new(),
            objects: Vec::new(),
            ground: Ground::default(),
            floating_scores: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Enter the terminal state. Idempotent: a second call is a no-op, and
    /// the terminal event is emitted exactly once.
    pub fn enter_game_over(&mut self) {
        if self.player.phase == PlayerPhase::GameOver {
            return;
        }
        self.player.phase = PlayerPhase::GameOver;
        self.running = false;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("game over at tick {} with score {}", self.time_ticks, self.score);
    }
}
