//! Drawing helpers for the OLED screens.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` so the same
//! code drives the SSD1306 and the desktop simulator.

mod primitives;
mod sprite;

pub use primitives::{
    GAUGE_FILL_MAX,
    GAUGE_HEIGHT,
    GAUGE_WIDTH,
    draw_bar_gauge,
    draw_pixel,
    draw_text,
    fill_rect,
    gauge_fill,
};
pub use sprite::draw_sprite;
