//! Time-of-day and calendar values read from the wall clock.
//!
//! # Types
//!
//! - [`ClockTime`]: validated hour and minute, the unit the clock animates
//! - [`WallTime`]: a full sample from the wall clock (date, weekday, seconds)
//! - [`WallClock`]: the source of wall time and monotonic milliseconds
//!
//! Formatting helpers write into `heapless::String` so nothing here allocates.

use core::fmt::Write;

use heapless::String;

use crate::error::Error;
use crate::settings::DateFormat;

/// Weekday names indexed by `weekday` (0 = Sunday).
const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

// =============================================================================
// ClockTime
// =============================================================================

/// Hour (0-23) and minute (0-59) of a 24-hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time of day.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTime`] when hour or minute is out of range.
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Result<Self, Error> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn midnight() -> Self { Self { hour: 0, minute: 0 } }

    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(self) -> u8 { self.minute }

    /// The following minute, wrapping 23:59 to 00:00.
    pub const fn successor(self) -> Self {
        if self.minute < 59 {
            Self { hour: self.hour, minute: self.minute + 1 }
        } else if self.hour < 23 {
            Self { hour: self.hour + 1, minute: 0 }
        } else {
            Self::midnight()
        }
    }

    /// Decimal digits in display order: hour tens, hour units, minute tens, minute units.
    #[inline]
    pub const fn digits(self) -> [u8; 4] {
        [self.hour / 10, self.hour % 10, self.minute / 10, self.minute % 10]
    }

    /// Hour on a 12-hour dial (1-12) and whether it is past noon.
    #[inline]
    pub const fn to_12_hour(self) -> (u8, bool) {
        let is_pm = self.hour >= 12;
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        (hour, is_pm)
    }

    /// `HH:MM` in 24-hour form, or with the hour on a 12-hour dial.
    pub fn format(
        self,
        use_24_hour: bool,
    ) -> String<5> {
        let hour = if use_24_hour { self.hour } else { self.to_12_hour().0 };
        let mut text = String::new();
        let _ = write!(text, "{:02}:{:02}", hour, self.minute);
        text
    }
}

/// AM/PM marker for a time, or `None` on a 24-hour clock.
#[inline]
pub const fn meridiem(
    time: ClockTime,
    use_24_hour: bool,
) -> Option<&'static str> {
    if use_24_hour {
        None
    } else if time.to_12_hour().1 {
        Some("PM")
    } else {
        Some("AM")
    }
}

// =============================================================================
// WallTime
// =============================================================================

/// One reading of the local wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallTime {
    year: u16,
    month: u8,
    day: u8,
    weekday: u8,
    time: ClockTime,
    second: u8,
}

impl WallTime {
    /// Create a wall-clock reading.
    ///
    /// `weekday` counts from Sunday = 0.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] for an impossible date or weekday and
    /// [`Error::InvalidTime`] for an impossible time of day.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) || weekday > 6 {
            return Err(Error::InvalidDate { year, month, day });
        }
        let time = ClockTime::new(hour, minute)?;
        if second > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self { year, month, day, weekday, time, second })
    }

    #[inline]
    pub const fn time(&self) -> ClockTime { self.time }

    #[inline]
    pub const fn second(&self) -> u8 { self.second }

    #[inline]
    pub const fn year(&self) -> u16 { self.year }

    #[inline]
    pub const fn month(&self) -> u8 { self.month }

    #[inline]
    pub const fn day(&self) -> u8 { self.day }

    #[inline]
    pub const fn weekday(&self) -> u8 { self.weekday }

    pub const fn weekday_name(&self) -> &'static str { WEEKDAY_NAMES[self.weekday as usize] }

    /// Date in the requested field order, zero padded.
    pub fn format_date(
        &self,
        format: DateFormat,
    ) -> String<10> {
        let mut text = String::new();
        let _ = match format {
            DateFormat::DayMonthYear => write!(text, "{:02}/{:02}/{:04}", self.day, self.month, self.year),
            DateFormat::MonthDayYear => write!(text, "{:02}/{:02}/{:04}", self.month, self.day, self.year),
            DateFormat::IsoDate => write!(text, "{:04}-{:02}-{:02}", self.year, self.month, self.day),
        };
        text
    }
}

const fn is_leap_year(year: u16) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// =============================================================================
// WallClock
// =============================================================================

/// Source of local time, supplied by the platform.
///
/// On hardware this is backed by network time; in the simulator by the host
/// clock. The display polls it once per frame.
pub trait WallClock {
    /// Current local time.
    ///
    /// # Errors
    /// Returns [`Error::TimeUnavailable`] until the clock has been synchronized.
    fn now(&self) -> Result<WallTime, Error>;

    /// Monotonic milliseconds since start-up. Drives the animation throttle.
    fn uptime_ms(&self) -> u64;
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

    // -------------------------------------------------------------------------
    // ClockTime
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(ClockTime::new(24, 0), Err(Error::InvalidTime { hour: 24, minute: 0 }));
        assert_eq!(ClockTime::new(12, 60), Err(Error::InvalidTime { hour: 12, minute: 60 }));
    }

    #[test]
    fn test_successor_carries() {
        assert_eq!(hm(12, 34).successor(), hm(12, 35));
        assert_eq!(hm(12, 59).successor(), hm(13, 0), "Minute 59 should carry into the hour");
        assert_eq!(hm(23, 59).successor(), hm(0, 0), "23:59 should wrap to midnight");
    }

    #[test]
    fn test_successor_covers_whole_day() {
        let mut time = ClockTime::midnight();
        for _ in 0..24 * 60 {
            time = time.successor();
        }
        assert_eq!(time, ClockTime::midnight(), "1440 successors should return to midnight");
    }

    #[test]
    fn test_digits() {
        assert_eq!(hm(9, 5).digits(), [0, 9, 0, 5]);
        assert_eq!(hm(23, 47).digits(), [2, 3, 4, 7]);
    }

    #[test]
    fn test_12_hour_conversion() {
        assert_eq!(hm(0, 15).to_12_hour(), (12, false), "Midnight hour shows as 12 AM");
        assert_eq!(hm(11, 0).to_12_hour(), (11, false));
        assert_eq!(hm(12, 0).to_12_hour(), (12, true), "Noon shows as 12 PM");
        assert_eq!(hm(13, 30).to_12_hour(), (1, true));
    }

    #[test]
    fn test_format() {
        assert_eq!(hm(7, 3).format(true).as_str(), "07:03");
        assert_eq!(hm(19, 45).format(false).as_str(), "07:45");
        assert_eq!(hm(0, 0).format(false).as_str(), "12:00");
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(meridiem(hm(19, 45), true), None, "24-hour clock has no marker");
        assert_eq!(meridiem(hm(19, 45), false), Some("PM"));
        assert_eq!(meridiem(hm(0, 45), false), Some("AM"));
    }

    // -------------------------------------------------------------------------
    // WallTime
    // -------------------------------------------------------------------------

    #[test]
    fn test_wall_time_validation() {
        assert!(WallTime::new(2024, 2, 29, 4, 10, 0, 0).is_ok(), "2024 is a leap year");
        assert!(WallTime::new(2023, 2, 29, 3, 10, 0, 0).is_err(), "2023 is not a leap year");
        assert!(WallTime::new(2024, 13, 1, 0, 0, 0, 0).is_err());
        assert!(WallTime::new(2024, 4, 31, 0, 0, 0, 0).is_err());
        assert!(WallTime::new(2024, 4, 30, 7, 0, 0, 0).is_err(), "Weekday 7 is out of range");
        assert!(WallTime::new(2024, 4, 30, 2, 0, 0, 60).is_err());
        assert!(WallTime::new(2024, 4, 30, 2, 25, 0, 0).is_err());
    }

    #[test]
    fn test_format_date() {
        let now = WallTime::new(2025, 3, 7, 5, 12, 34, 56).unwrap();
        assert_eq!(now.format_date(DateFormat::DayMonthYear).as_str(), "07/03/2025");
        assert_eq!(now.format_date(DateFormat::MonthDayYear).as_str(), "03/07/2025");
        assert_eq!(now.format_date(DateFormat::IsoDate).as_str(), "2025-03-07");
    }

    #[test]
    fn test_weekday_name() {
        let sunday = WallTime::new(2025, 3, 9, 0, 8, 0, 0).unwrap();
        assert_eq!(sunday.weekday_name(), "Sunday");
        let saturday = WallTime::new(2025, 3, 8, 6, 8, 0, 0).unwrap();
        assert_eq!(saturday.weekday_name(), "Saturday");
    }

    #[test]
    fn test_wall_time_accessors() {
        let now = WallTime::new(2025, 3, 7, 5, 12, 34, 56).unwrap();
        assert_eq!(now.time(), hm(12, 34));
        assert_eq!(now.second(), 56);
        assert_eq!((now.year(), now.month(), now.day(), now.weekday()), (2025, 3, 7, 5));
    }
}
