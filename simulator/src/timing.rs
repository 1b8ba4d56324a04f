//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` common crate cannot,
//! so they live here and are derived from the shared millisecond constants.

use std::time::Duration;

use pcmon_common::config::FRAME_PERIOD_MS;

/// Target frame time (~33 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(FRAME_PERIOD_MS);

/// Interval between synthetic stats packets, matching the PC sender.
pub const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// Second the warp key jumps to, a few seconds before the sprite sets off.
pub const WARP_SECOND: u32 = 50;
