//! The time the sprite clock actually shows.
//!
//! Normally a passive copy of the wall clock. When the sprite's jump advances
//! the minute a few seconds early, the ledger is *overridden* and ignores the
//! wall clock until the wall clock reaches the shown value.

use crate::time::ClockTime;

/// Displayed hour and minute plus the override flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayedTime {
    shown: ClockTime,
    overridden: bool,
}

impl DisplayedTime {
    pub const fn new() -> Self {
        Self {
            shown: ClockTime::midnight(),
            overridden: false,
        }
    }

    /// Follow the wall clock unless overridden.
    ///
    /// An override ends once the wall clock has caught up with the shown time.
    pub fn sync(
        &mut self,
        wall: ClockTime,
    ) {
        if !self.overridden {
            self.shown = wall;
        } else if wall == self.shown {
            self.overridden = false;
        }
    }

    /// Show `to`, the minute a transition was planned for.
    ///
    /// The override holds only while the wall clock has not reached `to`. A
    /// run that finishes late lands on the current wall minute and keeps
    /// following the wall clock.
    pub fn advance_to(
        &mut self,
        to: ClockTime,
        wall: ClockTime,
    ) {
        self.shown = to;
        self.overridden = wall != to;
    }

    /// Drop any override; the next sync copies the wall clock again.
    pub fn reset(&mut self) { self.overridden = false; }

    #[inline]
    pub const fn shown(&self) -> ClockTime { self.shown }

    #[inline]
    pub const fn is_overridden(&self) -> bool { self.overridden }
}

impl Default for DisplayedTime {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(
        hour: u8,
        minute: u8,
    ) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_sync_follows_wall_clock() {
        let mut ledger = DisplayedTime::new();
        ledger.sync(hm(12, 34));
        assert_eq!(ledger.shown(), hm(12, 34));
        ledger.sync(hm(12, 35));
        assert_eq!(ledger.shown(), hm(12, 35), "Not overridden, so every sync copies");
        assert!(!ledger.is_overridden());
    }

    #[test]
    fn test_advance_holds_until_wall_catches_up() {
        let mut ledger = DisplayedTime::new();
        ledger.sync(hm(12, 34));
        ledger.advance_to(hm(12, 35), hm(12, 34));
        assert_eq!(ledger.shown(), hm(12, 35));
        assert!(ledger.is_overridden(), "Advance should set the override");

        // Wall clock still at :34 for a few seconds
        ledger.sync(hm(12, 34));
        assert_eq!(ledger.shown(), hm(12, 35), "Overridden ledger must not resync backwards");
        assert!(ledger.is_overridden());

        // Wall clock reaches the shown minute
        ledger.sync(hm(12, 35));
        assert!(!ledger.is_overridden(), "Override clears once wall clock matches");

        ledger.sync(hm(12, 36));
        assert_eq!(ledger.shown(), hm(12, 36), "Ledger follows the wall clock again");
    }

    #[test]
    fn test_advance_wraps_day() {
        let mut ledger = DisplayedTime::new();
        ledger.sync(hm(23, 59));
        ledger.advance_to(hm(0, 0), hm(23, 59));
        assert_eq!(ledger.shown(), hm(0, 0), "23:59 should advance to 00:00");
        assert!(ledger.is_overridden());
    }

    #[test]
    fn test_late_advance_does_not_run_ahead() {
        let mut ledger = DisplayedTime::new();
        ledger.sync(hm(12, 34));

        // Wall minute rolled over before the apex
        ledger.sync(hm(12, 35));
        ledger.advance_to(hm(12, 35), hm(12, 35));
        assert_eq!(ledger.shown(), hm(12, 35), "Planned minute is shown, not one past it");
        assert!(!ledger.is_overridden(), "Wall clock already there, nothing to hold");

        ledger.sync(hm(12, 36));
        assert_eq!(ledger.shown(), hm(12, 36));
    }

    #[test]
    fn test_reset_clears_override() {
        let mut ledger = DisplayedTime::new();
        ledger.sync(hm(8, 0));
        ledger.advance_to(hm(8, 1), hm(8, 0));
        ledger.reset();
        assert!(!ledger.is_overridden());
        ledger.sync(hm(8, 0));
        assert_eq!(ledger.shown(), hm(8, 0), "After reset the wall clock is copied again");
    }
}
