//! Large clock: big time across the top, date along the bottom.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::CENTER_X;
use crate::settings::Settings;
use crate::styles::{LARGE_DIGITS, SMALL_TEXT, TOP_CENTERED, TOP_LEFT};
use crate::time::{WallTime, meridiem};
use crate::widgets::draw_text;

const TIME_Y: i32 = 4;
const MERIDIEM_POS: Point = Point::new(110, 4);
const DATE_Y: i32 = 54;

/// Large time across the top, date along the bottom.
pub fn draw_large_clock<D>(
    display: &mut D,
    now: &WallTime,
    settings: &Settings,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let time = now.time().format(settings.use_24_hour);
    draw_text(display, &time, Point::new(CENTER_X, TIME_Y), LARGE_DIGITS, TOP_CENTERED);

    if let Some(marker) = meridiem(now.time(), settings.use_24_hour) {
        draw_text(display, marker, MERIDIEM_POS, SMALL_TEXT, TOP_LEFT);
    }

    let date = now.format_date(settings.date_format);
    draw_text(display, &date, Point::new(CENTER_X, DATE_Y), SMALL_TEXT, TOP_CENTERED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDisplay;

    #[test]
    fn test_large_clock_rows() {
        let mut display = TestDisplay::new();
        let now = WallTime::new(2025, 3, 7, 5, 15, 42, 0).unwrap();
        let settings = Settings { use_24_hour: false, ..Settings::new() };
        draw_large_clock(&mut display, &now, &settings);
        assert!(display.lit_in_rows(TIME_Y, DATE_Y) > 0, "Large time drawn");
        assert!(display.lit_in_rows(DATE_Y, 64) > 0, "Date drawn at the bottom");
        assert!(display.lit_in(MERIDIEM_POS.x, 4, 128, 14) > 0, "PM marker drawn");
    }

    #[test]
    fn test_large_clock_24_hour_has_no_marker() {
        let mut display = TestDisplay::new();
        let now = WallTime::new(2025, 3, 7, 5, 15, 42, 0).unwrap();
        draw_large_clock(&mut display, &now, &Settings::new());
        assert_eq!(display.lit_in(MERIDIEM_POS.x, 4, 128, 14), 0);
    }
}
