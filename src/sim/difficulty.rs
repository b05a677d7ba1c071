//! Difficulty scaling as a pure function of score
//!
//! Re-evaluated on every spawn decision; never cached, since the score moves
//! continuously during a run.

use serde::{Deserialize, Serialize};

/// Difficulty knobs derived from the current score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Multiplier applied to base fall speed, in [0.85, 2.0]
    pub speed_multiplier: f32,
    /// Minimum gap between spawns (ms), in [550, 1500]
    pub spawn_interval_ms: f32,
    /// Lateral wobble amplitude, in [0, 3]
    pub wobble_amplitude: f32,
}

/// Map a score to the three difficulty knobs.
///
/// Fall speed ramps from 0.85x and saturates at 2x around score 1200.
/// Spawns start 1.5 s apart and tighten to 0.55 s around score 5700.
/// Wobble unlocks at score 80 and saturates at amplitude 3 around 440.
pub fn difficulty_for_score(score: u32) -> Difficulty {
    let s = score as f32;
    Difficulty {
        speed_multiplier: (0.85 + s / 800.0).min(2.0),
        spawn_interval_ms: (1500.0 - s / 6.0).max(550.0),
        wobble_amplitude: if s < 80.0 {
            0.0
        } else {
            ((s - 80.0) / 120.0).min(3.0)
        },
    }
}
