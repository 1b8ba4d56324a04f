//! Standard clock: medium time, date and weekday.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::CENTER_X;
use crate::settings::Settings;
use crate::styles::{CLOCK_DIGITS, SMALL_TEXT, TOP_CENTERED, TOP_LEFT};
use crate::time::{WallTime, meridiem};
use crate::widgets::draw_text;

const TIME_Y: i32 = 8;
const MERIDIEM_POS: Point = Point::new(110, 8);
const DATE_Y: i32 = 38;
const WEEKDAY_Y: i32 = 52;

/// Time, AM/PM marker in 12-hour mode, date, then the weekday name.
pub fn draw_standard_clock<D>(
    display: &mut D,
    now: &WallTime,
    settings: &Settings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let time = now.time().format(settings.use_24_hour);
    draw_text(display, &time, Point::new(CENTER_X, TIME_Y), CLOCK_DIGITS, TOP_CENTERED);

    if let Some(marker) = meridiem(now.time(), settings.use_24_hour) {
        draw_text(display, marker, MERIDIEM_POS, SMALL_TEXT, TOP_LEFT);
    }

    let date = now.format_date(settings.date_format);
    draw_text(display, &date, Point::new(CENTER_X, DATE_Y), SMALL_TEXT, TOP_CENTERED);
    draw_text(display, now.weekday_name(), Point::new(CENTER_X, WEEKDAY_Y), SMALL_TEXT, TOP_CENTERED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDisplay;

    fn afternoon() -> WallTime { WallTime::new(2025, 3, 7, 5, 15, 42, 0).unwrap() }

    #[test]
    fn test_standard_clock_rows() {
        let mut display = TestDisplay::new();
        draw_standard_clock(&mut display, &afternoon(), &Settings::new());
        assert!(display.lit_in_rows(TIME_Y, DATE_Y) > 0, "Time row drawn");
        assert!(display.lit_in_rows(DATE_Y, WEEKDAY_Y) > 0, "Date row drawn");
        assert!(display.lit_in_rows(WEEKDAY_Y, 64) > 0, "Weekday row drawn");
    }

    #[test]
    fn test_meridiem_only_in_12_hour_mode() {
        let mut display = TestDisplay::new();
        draw_standard_clock(&mut display, &afternoon(), &Settings::new());
        assert_eq!(display.lit_in(110, 8, 128, 18), 0, "No AM/PM marker on a 24-hour clock");

        let mut display = TestDisplay::new();
        let settings = Settings { use_24_hour: false, ..Settings::new() };
        draw_standard_clock(&mut display, &afternoon(), &settings);
        assert!(display.lit_in(110, 8, 128, 18) > 0, "PM marker drawn on a 12-hour clock");
    }
}
