//! Online screen: PC telemetry as text rows with bar gauges.
//!
//! ```text
//! PUMP:1450RPM      14:05
//! RAM: 63%        [#######   ]
//! CPU:27% 54C     [###       ]
//! GPU: 48C        [#####     ]
//! DISK:71%        [########  ]
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::stats::PcStats;
use crate::styles::{SMALL_TEXT, TOP_LEFT};
use crate::widgets::{draw_bar_gauge, draw_text, gauge_fill};

const PUMP_POS: Point = Point::new(0, 0);
const TIMESTAMP_POS: Point = Point::new(85, 0);
const GAUGE_X: i32 = 70;
const RAM_Y: i32 = 14;
const CPU_Y: i32 = 28;
const GPU_Y: i32 = 42;
const DISK_Y: i32 = 56;

/// Full-scale GPU temperature for its gauge.
const GPU_TEMP_FULL_SCALE: f32 = 100.0;

/// Draw a label row and its gauge.
fn draw_row<D>(
    display: &mut D,
    y: i32,
    label: &str,
    fill: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_text(display, label, Point::new(0, y), SMALL_TEXT, TOP_LEFT);
    draw_bar_gauge(display, GAUGE_X, y, fill);
}

pub fn draw_stats_screen<D>(
    display: &mut D,
    stats: &PcStats,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<24> = String::new();

    let _ = write!(line, "PUMP:{}RPM", stats.fan_speed);
    draw_text(display, &line, PUMP_POS, SMALL_TEXT, TOP_LEFT);
    draw_text(display, &stats.timestamp, TIMESTAMP_POS, SMALL_TEXT, TOP_LEFT);

    line.clear();
    let _ = write!(line, "RAM: {}%", stats.ram_percent as i32);
    draw_row(display, RAM_Y, &line, gauge_fill(stats.ram_percent, 100.0));

    line.clear();
    let _ = write!(line, "CPU:{}% {}C", stats.cpu_percent as i32, stats.cpu_temp);
    draw_row(display, CPU_Y, &line, gauge_fill(stats.cpu_percent, 100.0));

    line.clear();
    let _ = write!(line, "GPU: {}C", stats.gpu_temp);
    draw_row(display, GPU_Y, &line, gauge_fill(f32::from(stats.gpu_temp), GPU_TEMP_FULL_SCALE));

    line.clear();
    let _ = write!(line, "DISK:{}%", stats.disk_percent as i32);
    draw_row(display, DISK_Y, &line, gauge_fill(stats.disk_percent, 100.0));
}
