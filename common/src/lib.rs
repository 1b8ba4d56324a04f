//! Platform-agnostic core of the PC monitor display.
//!
//! Everything here draws into an `embedded-graphics` [`DrawTarget`] with
//! [`BinaryColor`] pixels, so the same code runs in the desktop simulator
//! and on a 128x64 monochrome OLED.
//!
//! - [`clock`]: sprite clock animation (ledger, planner, sprite, digit bounce)
//! - [`config`]: layout, physics and timing constants
//! - [`error`]: crate error type
//! - [`monitor`]: per-frame mode selection and rendering
//! - [`screens`]: full-screen layouts
//! - [`settings`]: user preferences
//! - [`stats`]: PC stats record and link liveness
//! - [`styles`]: pre-computed text styles
//! - [`time`]: wall-clock types and the [`WallClock`] source trait
//! - [`widgets`]: drawing helpers and the sprite bitmap
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time comes in through
//! [`WallClock`] and packets through [`Monitor::receive_stats`], so there is
//! no dependency on `std::time` or any network stack.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
//! [`BinaryColor`]: embedded_graphics::pixelcolor::BinaryColor

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod config;
pub mod error;
pub mod monitor;
pub mod screens;
pub mod settings;
pub mod stats;
pub mod styles;
pub mod time;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use error::Error;
pub use monitor::{DisplayMode, Monitor};
pub use settings::{ClockStyle, DateFormat, Settings};
pub use stats::PcStats;
pub use time::{ClockTime, WallClock, WallTime};
