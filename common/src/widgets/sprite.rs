//! Pixel-art sprite for the animated clock.
//!
//! The figure is 8x9 pixels drawn from rectangles and single pixels. `x` is
//! the horizontal center and `y` the ground line under its feet.
//!
//! ```text
//!   standing (right)      jumping
//!   ..####..              ..####..
//!   ..#####.              #.####.#
//!   ..####..              .######.
//!   ..#####.              ..####..
//!   .#####..              ..####..
//!   ..####..              ..####..
//!   ..####..              ..####..
//!   ..####..              ..####..
//!   ..####..              ..####..
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::primitives::{draw_pixel, fill_rect};
use crate::clock::SpriteSnapshot;
use crate::config::{SPRITE_CULL_LEFT, SPRITE_CULL_RIGHT};

/// Draw the sprite unless it is entirely off-screen.
pub fn draw_sprite<D>(
    display: &mut D,
    sprite: &SpriteSnapshot,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if sprite.x < SPRITE_CULL_LEFT || sprite.x > SPRITE_CULL_RIGHT {
        return;
    }

    let sx = sprite.x - 4;
    let sy = sprite.y - 10;

    if sprite.is_jumping() {
        // Head, body, raised arms, tucked legs
        fill_rect(display, sx + 2, sy, 4, 3);
        fill_rect(display, sx + 2, sy + 3, 4, 3);
        draw_pixel(display, sx + 1, sy + 2);
        draw_pixel(display, sx + 6, sy + 2);
        draw_pixel(display, sx, sy + 1);
        draw_pixel(display, sx + 7, sy + 1);
        fill_rect(display, sx + 2, sy + 6, 2, 3);
        fill_rect(display, sx + 4, sy + 6, 2, 3);
        return;
    }

    let swing = i32::from(sprite.walk_frame % 2);

    fill_rect(display, sx + 2, sy, 4, 3);
    fill_rect(display, sx + 2, sy + 3, 4, 3);
    if sprite.facing_right {
        draw_pixel(display, sx + 6, sy + 1);
        draw_pixel(display, sx + 1, sy + 4);
        draw_pixel(display, sx + 6, sy + 3 + swing);
    } else {
        draw_pixel(display, sx + 1, sy + 1);
        draw_pixel(display, sx + 6, sy + 4);
        draw_pixel(display, sx + 1, sy + 3 + swing);
    }

    // Legs together on frame 0, apart on frame 1
    if sprite.walk_frame == 0 {
        fill_rect(display, sx + 2, sy + 6, 2, 3);
        fill_rect(display, sx + 4, sy + 6, 2, 3);
    } else {
        fill_rect(display, sx + 1, sy + 6, 2, 3);
        fill_rect(display, sx + 5, sy + 6, 2, 3);
    }
}
