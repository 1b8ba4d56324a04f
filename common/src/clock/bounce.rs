//! Per-slot vertical bounce of the clock glyphs.
//!
//! A bumped glyph gets an upward kick and falls back under gravity. Offsets are
//! zero or negative (up); a slot at `(0, 0)` is at rest and is not simulated.
//! The update runs every render frame, independently of the sprite tick.

use crate::config::{DIGIT_BOUNCE_POWER, DIGIT_GRAVITY, DIGIT_SLOTS};

/// Bounce offset and velocity of each of the five glyph slots.
#[derive(Clone, Debug, PartialEq)]
pub struct DigitBounce {
    offset: [f32; DIGIT_SLOTS],
    velocity: [f32; DIGIT_SLOTS],
}

impl DigitBounce {
    /// All slots at rest.
    pub const fn new() -> Self {
        Self {
            offset: [0.0; DIGIT_SLOTS],
            velocity: [0.0; DIGIT_SLOTS],
        }
    }

    /// Kick a slot upward. Slots outside the clock are ignored.
    pub fn trigger(
        &mut self,
        slot: usize,
    ) {
        if let Some(velocity) = self.velocity.get_mut(slot) {
            *velocity = DIGIT_BOUNCE_POWER;
        }
    }

    /// Advance every moving slot by one frame.
    pub fn update(&mut self) {
        for (offset, velocity) in self.offset.iter_mut().zip(self.velocity.iter_mut()) {
            if *offset == 0.0 && *velocity == 0.0 {
                continue;
            }
            *velocity += DIGIT_GRAVITY;
            *offset += *velocity;
            if *offset >= 0.0 {
                *offset = 0.0;
                *velocity = 0.0;
            }
        }
    }

    /// Current vertical offset of a slot in pixels (0 for unknown slots).
    #[inline]
    pub fn offset(
        &self,
        slot: usize,
    ) -> f32 {
        self.offset.get(slot).copied().unwrap_or(0.0)
    }

    /// Offsets of all slots, truncated to whole pixels.
    pub fn pixel_offsets(&self) -> [i32; DIGIT_SLOTS] { self.offset.map(|o| o as i32) }

    /// Whether every slot is at rest.
    pub fn is_settled(&self) -> bool {
        self.offset.iter().chain(self.velocity.iter()).all(|v| *v == 0.0)
    }

    /// Put every slot back at rest.
    pub fn reset(&mut self) { *self = Self::new(); }
}

impl Default for DigitBounce {
    fn default() -> Self { Self::new() }
}
