//! Which digits the sprite visits when the minute rolls over.
//!
//! A plan lists the glyph slots whose digit differs between the shown time and
//! the next minute, right to left: minute units, minute tens, hour units, hour
//! tens. Each entry carries the x the sprite stops at, the center of the slot.
//!
//! The plan also carries the minute it leads to, handed out once. Only the
//! first apex of a run takes it, so a four-digit run still moves the clock
//! forward by exactly one minute, and a run that overlaps the real rollover
//! still lands on the planned minute rather than one past it.

use heapless::Vec;

use crate::config::{COLON_SLOT, DIGIT_HALF_WIDTH, DIGIT_SLOT_X};
use crate::time::ClockTime;

/// Most slots that can change in one minute (the colon never does).
pub const MAX_TARGETS: usize = 4;

/// Slot visited for each digit position, in visiting order. The index into
/// [`ClockTime::digits`] is paired with the glyph slot it renders in.
const VISIT_ORDER: [(usize, usize); MAX_TARGETS] = [(3, 4), (2, 3), (1, 1), (0, 0)];

// The colon never changes, so it is never a stop.
const _: () = {
    let mut i = 0;
    while i < MAX_TARGETS {
        assert!(VISIT_ORDER[i].1 != COLON_SLOT);
        i += 1;
    }
};

/// One stop of the sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    /// Glyph slot to bounce (0, 1, 3 or 4).
    pub slot: usize,
    /// Sprite x when standing under the slot.
    pub x: i32,
}

impl Target {
    const fn for_slot(slot: usize) -> Self {
        Self {
            slot,
            x: DIGIT_SLOT_X[slot] + DIGIT_HALF_WIDTH,
        }
    }
}

/// Ordered stops for one minute transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    targets: Vec<Target, MAX_TARGETS>,
    cursor: usize,
    to: ClockTime,
    advance_pending: bool,
}

impl TransitionPlan {
    /// Plan the transition from `shown` to the following minute.
    pub fn for_minute_after(shown: ClockTime) -> Self {
        let to = shown.successor();
        let current = shown.digits();
        let next = to.digits();

        let mut targets = Vec::new();
        for (digit, slot) in VISIT_ORDER {
            if current[digit] != next[digit] {
                // Capacity equals the number of digit positions
                let _ = targets.push(Target::for_slot(slot));
            }
        }

        Self {
            targets,
            cursor: 0,
            to,
            advance_pending: true,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.targets.is_empty() }

    #[inline]
    pub fn targets(&self) -> &[Target] { &self.targets }

    /// Stop the sprite is currently heading for or jumping at.
    #[inline]
    pub fn current(&self) -> Option<Target> { self.targets.get(self.cursor).copied() }

    /// Move on to the following stop and return it, if any.
    pub fn next_target(&mut self) -> Option<Target> {
        if self.cursor < self.targets.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Minute the transition leads to.
    #[inline]
    pub const fn to(&self) -> ClockTime { self.to }

    /// Take the minute to show at the first apex.
    ///
    /// Returns `Some` on the first call only.
    pub fn take_time_advance(&mut self) -> Option<ClockTime> {
        core::mem::replace(&mut self.advance_pending, false).then_some(self.to)
    }
}
