//! Low-level drawing primitives shared across screens.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Text, TextStyle};

/// Outer width of a bar gauge, outline included.
pub const GAUGE_WIDTH: u32 = 58;

/// Outer height of a bar gauge.
pub const GAUGE_HEIGHT: u32 = 8;

/// Widest fill that stays inside the outline with a 1px gap on the right.
pub const GAUGE_FILL_MAX: u32 = 56;

/// Fill width in pixels for `value` on a `0..=full_scale` range.
///
/// Negative and NaN values give an empty bar; values past full scale
/// give a full bar.
pub fn gauge_fill(
    value: f32,
    full_scale: f32,
) -> u32 {
    if value.is_nan() || value <= 0.0 || full_scale <= 0.0 {
        return 0;
    }
    let width = value / full_scale * GAUGE_FILL_MAX as f32;
    (width as u32).min(GAUGE_FILL_MAX)
}

/// Draw an outlined horizontal bar gauge with its top-left corner at (x, y).
pub fn draw_bar_gauge<D>(
    display: &mut D,
    x: i32,
    y: i32,
    fill: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(GAUGE_WIDTH, GAUGE_HEIGHT))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
        .ok();

    let fill = fill.min(GAUGE_FILL_MAX);
    if fill > 0 {
        Rectangle::new(Point::new(x + 1, y + 1), Size::new(fill, GAUGE_HEIGHT - 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)
            .ok();
    }
}

/// Fill a rectangle in the foreground color.
pub fn fill_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)
        .ok();
}

/// Set a single pixel in the foreground color.
pub fn draw_pixel<D>(
    display: &mut D,
    x: i32,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Pixel(Point::new(x, y), BinaryColor::On).draw(display).ok();
}

/// Draw a line of text with the given character and layout styles.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    character_style: MonoTextStyle<'_, BinaryColor>,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style(text, position, character_style, text_style)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_fill_scaling() {
        assert_eq!(gauge_fill(0.0, 100.0), 0);
        assert_eq!(gauge_fill(50.0, 100.0), 28, "Half scale is half the fill width");
        assert_eq!(gauge_fill(100.0, 100.0), GAUGE_FILL_MAX);
    }

    #[test]
    fn test_gauge_fill_clamps() {
        assert_eq!(gauge_fill(250.0, 100.0), GAUGE_FILL_MAX, "Overrange is clamped to full");
        assert_eq!(gauge_fill(-5.0, 100.0), 0, "Negative values give an empty bar");
        assert_eq!(gauge_fill(f32::NAN, 100.0), 0, "NaN gives an empty bar");
        assert_eq!(gauge_fill(10.0, 0.0), 0, "Degenerate scale gives an empty bar");
    }
}
