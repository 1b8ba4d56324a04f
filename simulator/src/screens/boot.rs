//! Start-up sequence: splash, provisioning portal, WiFi join.
//!
//! Plays the status screens the firmware shows before time sync, with
//! representative durations. Any key skips to the next screen.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use pcmon_common::config::STATS_UDP_PORT;
use pcmon_common::screens::{StatusScreen, draw_status_screen};

/// Address shown on the "connected" screen; the stats sender targets it.
const SIMULATED_IP: &str = "127.0.0.1";

const BOOT_SEQUENCE: [(StatusScreen<'static>, u64); 4] = [
    (StatusScreen::Boot, 1500),
    (StatusScreen::Setup, 3000),
    (StatusScreen::Connecting, 1200),
    (StatusScreen::Connected { ip: SIMULATED_IP }, 2500),
];

/// Play the boot screens. Returns `false` if the window was closed.
pub fn run_boot_sequence(
    display: &mut SimulatorDisplay<BinaryColor>,
    window: &mut Window,
) -> bool {
    for (screen, duration_ms) in BOOT_SEQUENCE {
        info!("Boot screen: {screen:?}");
        display.clear(BinaryColor::Off).ok();
        draw_status_screen(display, screen);

        let shown_at = Instant::now();
        'screen: while shown_at.elapsed() < Duration::from_millis(duration_ms) {
            window.update(display);
            for ev in window.events() {
                match ev {
                    SimulatorEvent::Quit => return false,
                    SimulatorEvent::KeyDown { repeat: false, .. } => break 'screen,
                    _ => {}
                }
            }
            thread::sleep(Duration::from_millis(16));
        }
    }
    info!("Stats sender target: {SIMULATED_IP}:{STATS_UDP_PORT} (press S for the synthetic feed)");
    true
}
