//! Ground damage model
//!
//! Craters are horizontal intervals of the ground plane with no support.
//! Hazards that reach the bottom add them; bonus rewards shave the largest
//! one down from both ends. Stored intervals are never merged, so coverage
//! queries must be correct even when intervals touch or overlap.

use serde::{Deserialize, Serialize};

/// A damaged interval of the ground, `left < right`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crater {
    pub left: f32,
    pub right: f32,
}

impl Crater {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// The set of craters currently in the ground
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ground {
    craters: Vec<Crater>,
}

impl Ground {
    /// Record new damage. Adjacent or overlapping damage is kept as a
    /// separate interval; queries handle the overlap.
    pub fn insert_damage(&mut self, crater: Crater) {
        debug_assert!(crater.left < crater.right);
        self.craters.push(crater);
    }

    /// Shrink the widest crater by `amount` from both ends, dropping it if
    /// it collapses. No-op when the ground is intact.
    pub fn repair_largest(&mut self, amount: f32) {
        let Some(idx) = self
            .craters
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.width()
                    .partial_cmp(&b.width())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
        else {
            return;
        };

        let crater = &mut self.craters[idx];
        crater.left += amount;
        crater.right -= amount;
        if crater.left >= crater.right {
            self.craters.swap_remove(idx);
        }
    }

    /// True iff the footprint `[x, x + width]` has no support anywhere,
    /// i.e. is fully covered by the union of craters.
    pub fn is_unsupported(&self, x: f32, width: f32) -> bool {
        let end = x + width;
        // Sweep left to right across overlapping craters
        let mut covered_to = x;
        loop {
            let Some(next) = self
                .craters
                .iter()
                .filter(|c| c.left <= covered_to && c.right > covered_to)
                .map(|c| c.right)
                .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            else {
                return false;
            };
            if next >= end {
                return true;
            }
            covered_to = next;
        }
    }

    /// The crater containing `x`, if any (widest match wins on overlap)
    pub fn crater_at(&self, x: f32) -> Option<Crater> {
        self.craters
            .iter()
            .filter(|c| c.left <= x && x <= c.right)
            .max_by(|a, b| {
                a.width()
                    .partial_cmp(&b.width())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }

    /// Sum of all crater widths (overlaps counted twice; used for tests
    /// and HUD display, not gameplay)
    pub fn total_damage(&self) -> f32 {
        self.craters.iter().map(Crater::width).sum()
    }

    pub fn craters(&self) -> &[Crater] {
        &self.craters
    }

    pub fn is_intact(&self) -> bool {
        self.craters.is_empty()
    }
}
