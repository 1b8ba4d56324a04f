//! PC monitor display simulator for desktop.
//!
//! Runs the shared display core against an `embedded-graphics-simulator`
//! window, with the host clock as wall time and a synthetic stats feed.
//!
//! # Environment
//!
//! - `PCMON_CLOCK_STYLE`: 0 sprite, 1 standard, 2 large
//! - `PCMON_DATE_FORMAT`: 0 DD/MM/YYYY, 1 MM/DD/YYYY, 2 YYYY-MM-DD
//! - `PCMON_GMT_OFFSET`: whole hours, -12 to 14
//! - `RUST_LOG`: log filter (default `info`)
//!
//! # Keys
//!
//! | Key | Action                                 |
//! |-----|----------------------------------------|
//! | C   | Next clock style                       |
//! | H   | Toggle 12/24-hour                      |
//! | D   | Next date format                       |
//! | L   | Toggle daylight saving                 |
//! | S   | Start/stop the stats feed              |
//! | T   | Warp to :50 to watch the next minute   |
//! | N   | Drop/restore time sync                 |
//! | R   | Reset the sprite animation             |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod fake_stats;
mod screens;
mod timing;
mod wall_clock;

use std::str::FromStr;
use std::time::Instant;
use std::{env, thread};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};
use pcmon_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pcmon_common::{Monitor, Settings, WallClock};

use crate::fake_stats::StatsFeed;
use crate::screens::run_boot_sequence;
use crate::timing::{FRAME_TIME, WARP_SECOND};
use crate::wall_clock::HostClock;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = settings_from_env();
    let mut clock = HostClock::new(&settings);
    info!(
        "Settings: {} clock, {}, date {}, UTC{:+}s",
        settings.clock_style.name(),
        if settings.use_24_hour { "24h" } else { "12h" },
        settings.date_format.pattern(),
        settings.utc_offset_seconds()
    );

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut window = Window::new("PC Monitor Sim", &output_settings);

    display.clear(BinaryColor::Off).ok();
    window.update(&display);

    if !run_boot_sequence(&mut display, &mut window) {
        return;
    }

    let mut monitor = Monitor::new();
    let mut feed = StatsFeed::new();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            settings.clock_style = settings.clock_style.next();
                            info!("Clock style: {}", settings.clock_style.name());
                        }
                        Keycode::H => {
                            settings.use_24_hour = !settings.use_24_hour;
                            info!("24-hour: {}", settings.use_24_hour);
                        }
                        Keycode::D => {
                            settings.date_format = settings.date_format.next();
                            info!("Date format: {}", settings.date_format.pattern());
                        }
                        Keycode::L => {
                            settings.daylight_saving = !settings.daylight_saving;
                            clock.apply_settings(&settings);
                            info!("Daylight saving: {}", settings.daylight_saving);
                        }
                        Keycode::S => {
                            let on = feed.toggle();
                            info!("Stats feed {}", if on { "started" } else { "stopped" });
                        }
                        Keycode::T => clock.warp_to_second(WARP_SECOND),
                        Keycode::N => {
                            clock.set_synchronized(!clock.is_synchronized());
                            info!("Time sync {}", if clock.is_synchronized() { "restored" } else { "dropped" });
                        }
                        Keycode::R => {
                            monitor.reset_animation();
                            info!("Animation reset");
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(stats) = feed.poll(&clock.timestamp()) {
            monitor.receive_stats(stats, clock.uptime_ms());
        }

        monitor.render(&mut display, &clock, &settings);
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Build settings from `PCMON_*` variables, falling back to defaults.
fn settings_from_env() -> Settings {
    let defaults = Settings::new();
    Settings::from_codes_or_default(
        env_code("PCMON_CLOCK_STYLE").unwrap_or(defaults.clock_style.code()),
        defaults.use_24_hour,
        env_code("PCMON_DATE_FORMAT").unwrap_or(defaults.date_format.code()),
        env_code("PCMON_GMT_OFFSET").unwrap_or(defaults.gmt_offset_hours),
        defaults.daylight_saving,
    )
}

fn env_code<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!("Ignoring {name}={raw:?}, not a number");
    }
    parsed
}
