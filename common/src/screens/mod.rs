//! Full-screen layouts.

mod large_clock;
mod sprite_clock;
mod standard_clock;
mod stats;
mod status;

pub use large_clock::draw_large_clock;
pub use sprite_clock::draw_sprite_clock;
pub use standard_clock::draw_standard_clock;
pub use stats::draw_stats_screen;
pub use status::{StatusScreen, draw_status_screen, draw_time_error};
