//! User-facing display settings.
//!
//! Settings are owned by the configuration store outside this crate and handed
//! to the display each frame. They are persisted as small integer codes, so
//! every enum here decodes from its stored code and rejects unknown values.

use log::warn;

use crate::error::Error;

// =============================================================================
// Clock Style
// =============================================================================

/// Offline clock presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockStyle {
    /// Animated clock where a sprite bumps the changing digits.
    #[default]
    Sprite,
    /// Medium digits with the date and weekday underneath.
    Standard,
    /// Large digits with the date at the bottom.
    Large,
}

impl ClockStyle {
    /// Stored code for this style.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Sprite => 0,
            Self::Standard => 1,
            Self::Large => 2,
        }
    }

    /// Cycle to the next style (Sprite -> Standard -> Large -> Sprite).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Sprite => Self::Standard,
            Self::Standard => Self::Large,
            Self::Large => Self::Sprite,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sprite => "Sprite",
            Self::Standard => "Standard",
            Self::Large => "Large",
        }
    }
}

impl TryFrom<u8> for ClockStyle {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Sprite),
            1 => Ok(Self::Standard),
            2 => Ok(Self::Large),
            other => Err(Error::UnknownClockStyle(other)),
        }
    }
}

// =============================================================================
// Date Format
// =============================================================================

/// Order of the date fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    #[default]
    DayMonthYear,
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY-MM-DD`
    IsoDate,
}

impl DateFormat {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::DayMonthYear => 0,
            Self::MonthDayYear => 1,
            Self::IsoDate => 2,
        }
    }

    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::DayMonthYear => Self::MonthDayYear,
            Self::MonthDayYear => Self::IsoDate,
            Self::IsoDate => Self::DayMonthYear,
        }
    }

    /// Pattern shown on the settings page.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::IsoDate => "YYYY-MM-DD",
        }
    }
}

impl TryFrom<u8> for DateFormat {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::DayMonthYear),
            1 => Ok(Self::MonthDayYear),
            2 => Ok(Self::IsoDate),
            other => Err(Error::UnknownDateFormat(other)),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Smallest accepted GMT offset in hours.
pub const GMT_OFFSET_MIN: i8 = -12;

/// Largest accepted GMT offset in hours.
pub const GMT_OFFSET_MAX: i8 = 14;

/// Settings read by the display every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub clock_style: ClockStyle,
    pub use_24_hour: bool,
    pub date_format: DateFormat,
    /// Whole-hour offset from UTC, before daylight saving.
    pub gmt_offset_hours: i8,
    /// Adds one hour to the offset when set.
    pub daylight_saving: bool,
}

impl Settings {
    /// Factory defaults: sprite clock, 24-hour, DD/MM/YYYY, GMT+1 with DST.
    pub const fn new() -> Self {
        Self {
            clock_style: ClockStyle::Sprite,
            use_24_hour: true,
            date_format: DateFormat::DayMonthYear,
            gmt_offset_hours: 1,
            daylight_saving: true,
        }
    }

    /// Decode settings from their stored codes.
    ///
    /// # Errors
    /// Returns the first field that does not decode to a known value.
    pub fn from_codes(
        clock_style: u8,
        use_24_hour: bool,
        date_format: u8,
        gmt_offset_hours: i8,
        daylight_saving: bool,
    ) -> Result<Self, Error> {
        if !(GMT_OFFSET_MIN..=GMT_OFFSET_MAX).contains(&gmt_offset_hours) {
            return Err(Error::GmtOffsetOutOfRange(gmt_offset_hours));
        }
        Ok(Self {
            clock_style: ClockStyle::try_from(clock_style)?,
            use_24_hour,
            date_format: DateFormat::try_from(date_format)?,
            gmt_offset_hours,
            daylight_saving,
        })
    }

    /// Decode stored settings, keeping the defaults when any field is invalid.
    pub fn from_codes_or_default(
        clock_style: u8,
        use_24_hour: bool,
        date_format: u8,
        gmt_offset_hours: i8,
        daylight_saving: bool,
    ) -> Self {
        match Self::from_codes(clock_style, use_24_hour, date_format, gmt_offset_hours, daylight_saving) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Stored settings rejected ({e}), using defaults");
                Self::new()
            }
        }
    }

    /// Total offset from UTC in seconds, DST included.
    #[inline]
    pub const fn utc_offset_seconds(&self) -> i32 {
        let dst = if self.daylight_saving { 3600 } else { 0 };
        self.gmt_offset_hours as i32 * 3600 + dst
    }
}

impl Default for Settings {
    fn default() -> Self { Self::new() }
}
