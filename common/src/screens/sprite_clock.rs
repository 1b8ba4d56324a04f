//! Animated clock: date on top, bouncing digits, the sprite underneath.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::{ClockFrame, SpriteState};
use crate::config::{CENTER_X, DIGIT_HALF_WIDTH, DIGIT_SLOT_X, DIGIT_SLOTS, SPRITE_CLOCK_DATE_Y, TIME_Y};
use crate::settings::DateFormat;
use crate::styles::{CLOCK_DIGITS, SMALL_TEXT, TOP_CENTERED};
use crate::time::{ClockTime, WallTime};
use crate::widgets::{draw_sprite, draw_text};

/// Glyphs of the five slots: H H : M M, always on a 24-hour dial.
fn slot_glyphs(time: ClockTime) -> [char; DIGIT_SLOTS] {
    let [h1, h0, m1, m0] = time.digits().map(|d| char::from(b'0' + d));
    [h1, h0, ':', m1, m0]
}

/// Compose one frame of the sprite clock.
///
/// `wall` supplies the date; the digits come from the animation frame so they
/// may run a minute ahead of the wall clock.
pub fn draw_sprite_clock<D>(
    display: &mut D,
    frame: &ClockFrame,
    wall: &WallTime,
    date_format: DateFormat,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let date = wall.format_date(date_format);
    draw_text(display, &date, Point::new(CENTER_X, SPRITE_CLOCK_DATE_Y), SMALL_TEXT, TOP_CENTERED);

    for (slot, glyph) in slot_glyphs(frame.shown).into_iter().enumerate() {
        let mut buf = [0u8; 4];
        let text = glyph.encode_utf8(&mut buf);
        let position = Point::new(
            DIGIT_SLOT_X[slot] + DIGIT_HALF_WIDTH,
            TIME_Y + frame.digit_offsets[slot],
        );
        draw_text(display, text, position, CLOCK_DIGITS, TOP_CENTERED);
    }

    if frame.sprite.state != SpriteState::Idle {
        draw_sprite(display, &frame.sprite);
    }
}
