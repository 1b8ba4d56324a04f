//! Host-backed wall clock.
//!
//! Reads the desktop clock through `chrono` and applies the GMT and daylight
//! saving offsets from [`Settings`]. A warp offset lets the clock be pushed
//! forward to just before a minute change, and synchronization can be turned
//! off to exercise the time-error path.

use std::time::Instant;

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeDelta, TimeZone, Timelike, Utc};
use log::{info, warn};
use pcmon_common::{Error, Settings, WallClock, WallTime};

pub struct HostClock {
    started: Instant,
    offset: FixedOffset,
    warp: TimeDelta,
    synchronized: bool,
}

impl HostClock {
    pub fn new(settings: &Settings) -> Self {
        let mut clock = Self {
            started: Instant::now(),
            offset: Utc.fix(),
            warp: TimeDelta::zero(),
            synchronized: true,
        };
        clock.apply_settings(settings);
        clock
    }

    /// Pick up a changed GMT offset or daylight saving flag.
    pub fn apply_settings(
        &mut self,
        settings: &Settings,
    ) {
        match FixedOffset::east_opt(settings.utc_offset_seconds()) {
            Some(offset) => self.offset = offset,
            None => warn!("UTC offset {}s rejected, keeping {}", settings.utc_offset_seconds(), self.offset),
        }
    }

    /// Jump forward so the current minute reads `second` seconds.
    pub fn warp_to_second(
        &mut self,
        second: u32,
    ) {
        let now = self.local_now().second();
        let ahead = (60 + second % 60 - now) % 60;
        self.warp += TimeDelta::seconds(i64::from(ahead));
        info!("Clock warped {ahead}s ahead (total {}s)", self.warp.num_seconds());
    }

    /// Simulate losing (or regaining) network time.
    pub fn set_synchronized(
        &mut self,
        synchronized: bool,
    ) {
        self.synchronized = synchronized;
    }

    #[inline]
    pub const fn is_synchronized(&self) -> bool { self.synchronized }

    /// "HH:MM" stamp, as the stats sender would put in a packet.
    pub fn timestamp(&self) -> String { self.local_now().format("%H:%M").to_string() }

    fn local_now(&self) -> DateTime<FixedOffset> { (Utc::now() + self.warp).with_timezone(&self.offset) }
}

impl WallClock for HostClock {
    fn now(&self) -> Result<WallTime, Error> {
        if !self.synchronized {
            return Err(Error::TimeUnavailable);
        }
        to_wall_time(&self.local_now())
    }

    fn uptime_ms(&self) -> u64 { self.started.elapsed().as_millis() as u64 }
}

/// Convert a `chrono` date-time into the display's wall-clock reading.
pub fn to_wall_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<WallTime, Error> {
    let year = u16::try_from(dt.year()).map_err(|_| Error::TimeUnavailable)?;
    WallTime::new(
        year,
        dt.month() as u8,
        dt.day() as u8,
        dt.weekday().num_days_from_sunday() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
    )
}

#[cfg(test)]
mod tests {
    use pcmon_common::ClockTime;

    use super::*;

    #[test]
    fn test_to_wall_time_fields() {
        let dt = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 7, 19, 59, 55)
            .unwrap();
        let wall = to_wall_time(&dt).unwrap();
        assert_eq!(wall.time(), ClockTime::new(19, 59).unwrap());
        assert_eq!(wall.second(), 55);
        assert_eq!((wall.year(), wall.month(), wall.day()), (2025, 3, 7));
        assert_eq!(wall.weekday(), 5, "2025-03-07 is a Friday");
    }

    #[test]
    fn test_to_wall_time_rejects_negative_year() {
        let dt = Utc.with_ymd_and_hms(-5, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_wall_time(&dt), Err(Error::TimeUnavailable));
    }

    #[test]
    fn test_unsynchronized_clock_errors() {
        let mut clock = HostClock::new(&Settings::new());
        assert!(clock.now().is_ok());
        clock.set_synchronized(false);
        assert_eq!(clock.now(), Err(Error::TimeUnavailable));
        clock.set_synchronized(true);
        assert!(clock.now().is_ok(), "Regaining sync restores time");
    }

    #[test]
    fn test_offset_follows_settings() {
        let utc = Settings { gmt_offset_hours: 0, daylight_saving: false, ..Settings::new() };
        let mut clock = HostClock::new(&utc);
        assert_eq!(clock.offset.local_minus_utc(), 0);

        let tokyo = Settings { gmt_offset_hours: 9, daylight_saving: false, ..Settings::new() };
        clock.apply_settings(&tokyo);
        assert_eq!(clock.offset.local_minus_utc(), 9 * 3600);

        clock.apply_settings(&Settings::new());
        assert_eq!(clock.offset.local_minus_utc(), 2 * 3600, "GMT+1 plus daylight saving");
    }

    #[test]
    fn test_warp_lands_on_requested_second() {
        let mut clock = HostClock::new(&Settings::new());
        clock.warp_to_second(50);
        let second = clock.now().unwrap().second();
        assert!((50..=51).contains(&second), "Expected :50, got :{second}");
    }
}
