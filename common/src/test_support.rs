//! Host-side doubles for the display and the wall clock.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::time::{WallClock, WallTime};

const W: usize = SCREEN_WIDTH as usize;
const H: usize = SCREEN_HEIGHT as usize;

/// In-memory 128x64 monochrome frame.
pub struct TestDisplay {
    pixels: [[bool; W]; H],
}

impl TestDisplay {
    pub const fn new() -> Self { Self { pixels: [[false; W]; H] } }

    pub fn is_on(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .is_some_and(|(x, y)| x < W && y < H && self.pixels[y][x])
    }

    /// Lit pixels in the rows `y0..y1` (all columns).
    pub fn lit_in_rows(
        &self,
        y0: i32,
        y1: i32,
    ) -> usize {
        (y0..y1).map(|y| (0..W as i32).filter(|x| self.is_on(*x, y)).count()).sum()
    }

    /// Lit pixels inside the rectangle `x0..x1` by `y0..y1`.
    pub fn lit_in(
        &self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> usize {
        (y0..y1).map(|y| (x0..x1).filter(|x| self.is_on(*x, y)).count()).sum()
    }

    pub fn lit_count(&self) -> usize { self.lit_in(0, 0, W as i32, H as i32) }

    /// Topmost row with any lit pixel in the columns `x0..x1`.
    pub fn top_lit_row(
        &self,
        x0: i32,
        x1: i32,
    ) -> Option<i32> {
        (0..H as i32).find(|y| (x0..x1).any(|x| self.is_on(x, *y)))
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < W
                && y < H
            {
                self.pixels[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}

/// Wall clock with a settable reading.
pub struct FakeClock {
    pub now: Result<WallTime, Error>,
    pub uptime_ms: u64,
}

impl FakeClock {
    pub fn at(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            now: WallTime::new(2025, 3, 7, 5, hour, minute, second),
            uptime_ms: 0,
        }
    }

    pub const fn unsynchronized() -> Self {
        Self {
            now: Err(Error::TimeUnavailable),
            uptime_ms: 0,
        }
    }
}

impl WallClock for FakeClock {
    fn now(&self) -> Result<WallTime, Error> { self.now }

    fn uptime_ms(&self) -> u64 { self.uptime_ms }
}
