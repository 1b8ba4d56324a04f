//! Sprite clock animation.
//!
//! The animated clock is four cooperating pieces, all owned by
//! [`AnimationState`]:
//!
//! - [`DisplayedTime`]: the minute on screen, which the sprite may move ahead
//! - [`TransitionPlan`]: the digits to visit for the next minute
//! - [`SpriteMotion`]: the walk/jump state machine, self-throttled
//! - [`DigitBounce`]: glyph bounce physics, stepped every frame
//!
//! # Frame Order
//!
//! 1. Ledger syncs from the wall clock (unless overridden)
//! 2. Digit bounce advances one frame
//! 3. Sprite ticks (skipped when called too soon)
//!
//! The render pass then reads [`AnimationState::frame`].

mod bounce;
mod ledger;
mod planner;
mod sprite;

pub use bounce::DigitBounce;
pub use ledger::DisplayedTime;
pub use planner::{MAX_TARGETS, Target, TransitionPlan};
pub use sprite::{SpriteMotion, SpriteSnapshot, SpriteState};

use crate::config::DIGIT_SLOTS;
use crate::time::{ClockTime, WallTime};

/// What the sprite clock draws this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockFrame {
    pub shown: ClockTime,
    /// Vertical offset of each glyph slot in pixels (zero or negative).
    pub digit_offsets: [i32; DIGIT_SLOTS],
    pub sprite: SpriteSnapshot,
}

/// All mutable state of the sprite clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    ledger: DisplayedTime,
    bounce: DigitBounce,
    sprite: SpriteMotion,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            ledger: DisplayedTime::new(),
            bounce: DigitBounce::new(),
            sprite: SpriteMotion::new(),
        }
    }

    /// Advance the animation for one render frame.
    pub fn update(
        &mut self,
        wall: &WallTime,
        now_ms: u64,
    ) {
        self.ledger.sync(wall.time());
        self.bounce.update();
        self.sprite.tick(wall, now_ms, &mut self.ledger, &mut self.bounce);
    }

    /// Return everything to rest: sprite parked, no override, digits still.
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.bounce.reset();
        self.sprite.reset();
    }

    pub fn frame(&self) -> ClockFrame {
        ClockFrame {
            shown: self.ledger.shown(),
            digit_offsets: self.bounce.pixel_offsets(),
            sprite: self.sprite.snapshot(),
        }
    }

    #[inline]
    pub const fn ledger(&self) -> &DisplayedTime { &self.ledger }

    #[inline]
    pub const fn bounce(&self) -> &DigitBounce { &self.bounce }

    #[inline]
    pub const fn sprite(&self) -> &SpriteMotion { &self.sprite }
}
