//! Pre-computed text styles for the monochrome panel.
//!
//! All text is drawn in `BinaryColor::On` on a cleared frame, so every style is
//! a `const` with a fixed font. Positions in this crate refer to the top edge
//! of the text, hence the `Baseline::Top` alignment styles.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, positioned by the top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered on x, positioned by the top edge.
pub const TOP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Character Styles
// =============================================================================

/// Small text for labels, dates and status lines (6x10).
pub const SMALL_TEXT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// Clock digits on the sprite and standard clocks.
pub const CLOCK_DIGITS: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_18_POINT, BinaryColor::On);

/// Digits of the large clock.
pub const LARGE_DIGITS: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, BinaryColor::On);
