//! Start-up, provisioning and error screens.
//!
//! These are shown by the platform while it brings up WiFi and time sync,
//! before the per-frame [`Monitor`](crate::monitor::Monitor) loop starts.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use heapless::String;

use crate::config::{CENTER_X, SCREEN_WIDTH, SETUP_AP_NAME, SETUP_AP_PASSWORD, SETUP_PORTAL_ADDRESS};
use crate::styles::{SMALL_TEXT, TOP_CENTERED, TOP_LEFT};
use crate::widgets::draw_text;

/// Position of the placeholder shown while the wall clock is unavailable.
const TIME_ERROR_POS: Point = Point::new(20, 28);

/// A full-screen status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusScreen<'a> {
    /// Splash while the device starts.
    Boot,
    /// Portal instructions while no WiFi network is configured.
    Setup,
    /// Credentials saved, joining the network.
    Connecting,
    /// Joined; shows the address the stats sender should target.
    Connected { ip: &'a str },
    /// Could not join within the portal timeout.
    WifiTimeout,
}

fn draw_rule<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
        .ok();
}

pub fn draw_status_screen<D>(
    display: &mut D,
    screen: StatusScreen<'_>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    match screen {
        StatusScreen::Boot => {
            draw_text(display, "PC Monitor", Point::new(10, 20), SMALL_TEXT, TOP_LEFT);
            draw_text(display, "Starting...", Point::new(10, 35), SMALL_TEXT, TOP_LEFT);
        }
        StatusScreen::Setup => {
            let mut line: String<32> = String::new();
            draw_text(display, "WiFi Setup", Point::new(CENTER_X, 0), SMALL_TEXT, TOP_CENTERED);
            draw_rule(display, 10);
            draw_text(display, "1.Connect to WiFi:", Point::new(0, 14), SMALL_TEXT, TOP_LEFT);
            let _ = write!(line, "  {SETUP_AP_NAME}");
            draw_text(display, &line, Point::new(0, 26), SMALL_TEXT, TOP_LEFT);
            line.clear();
            let _ = write!(line, "  Pass: {SETUP_AP_PASSWORD}");
            draw_text(display, &line, Point::new(0, 38), SMALL_TEXT, TOP_LEFT);
            line.clear();
            let _ = write!(line, "2.Open {SETUP_PORTAL_ADDRESS}");
            draw_text(display, &line, Point::new(0, 50), SMALL_TEXT, TOP_LEFT);
        }
        StatusScreen::Connecting => {
            draw_text(display, "Connecting to", Point::new(CENTER_X, 25), SMALL_TEXT, TOP_CENTERED);
            draw_text(display, "WiFi...", Point::new(CENTER_X, 40), SMALL_TEXT, TOP_CENTERED);
        }
        StatusScreen::Connected { ip } => {
            draw_text(display, "Connected!", Point::new(CENTER_X, 4), SMALL_TEXT, TOP_CENTERED);
            draw_text(display, "IP (for stats):", Point::new(CENTER_X, 18), SMALL_TEXT, TOP_CENTERED);
            draw_text(display, ip, Point::new(CENTER_X, 30), SMALL_TEXT, TOP_CENTERED);
            draw_rule(display, 42);
            draw_text(display, "Open IP in browser", Point::new(CENTER_X, 46), SMALL_TEXT, TOP_CENTERED);
            draw_text(display, "to change settings", Point::new(CENTER_X, 55), SMALL_TEXT, TOP_CENTERED);
        }
        StatusScreen::WifiTimeout => {
            draw_text(display, "WiFi Timeout!", Point::new(10, 20), SMALL_TEXT, TOP_LEFT);
            draw_text(display, "Restarting...", Point::new(10, 35), SMALL_TEXT, TOP_LEFT);
        }
    }
}

/// Placeholder drawn instead of a clock while time is not synchronized.
pub fn draw_time_error<D>(display: &mut D)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_text(display, "Time Error", TIME_ERROR_POS, SMALL_TEXT, TOP_LEFT);
}
