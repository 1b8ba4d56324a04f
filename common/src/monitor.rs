//! Per-frame entry point for the display.
//!
//! [`Monitor`] owns everything that persists between frames: the latest stats
//! packet and the sprite clock animation. The platform loop calls
//! [`Monitor::render`] once per frame and presents the result.
//!
//! # Mode Selection
//!
//! | Condition                      | Screen                      |
//! |--------------------------------|-----------------------------|
//! | Stats packet within 6 s        | Stats                       |
//! | Wall clock unavailable         | "Time Error" placeholder    |
//! | Otherwise                      | Clock in the selected style |
//!
//! Leaving the sprite style resets the animation, so switching back starts
//! from a parked sprite and a clock that follows the wall time.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{info, warn};

use crate::clock::AnimationState;
use crate::screens::{draw_large_clock, draw_sprite_clock, draw_standard_clock, draw_stats_screen, draw_time_error};
use crate::settings::{ClockStyle, Settings};
use crate::stats::{PcStats, StatsLink};
use crate::time::WallClock;

/// What a rendered frame showed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Stats,
    Clock(ClockStyle),
    TimeError,
}

/// Display state carried across frames.
#[derive(Debug, Default)]
pub struct Monitor {
    link: StatsLink,
    animation: AnimationState,
    last_style: Option<ClockStyle>,
    last_mode: Option<DisplayMode>,
}

impl Monitor {
    pub const fn new() -> Self {
        Self {
            link: StatsLink::new(),
            animation: AnimationState::new(),
            last_style: None,
            last_mode: None,
        }
    }

    /// Store a decoded stats packet received at `now_ms` (monotonic).
    pub fn receive_stats(
        &mut self,
        stats: PcStats,
        now_ms: u64,
    ) {
        self.link.record(stats, now_ms);
    }

    /// Return the sprite clock to its rest state.
    pub fn reset_animation(&mut self) { self.animation.reset(); }

    /// Clear the frame and draw the current mode into it.
    pub fn render<D, C>(
        &mut self,
        display: &mut D,
        clock: &C,
        settings: &Settings,
    ) -> DisplayMode
    where
        D: DrawTarget<Color = BinaryColor>,
        C: WallClock + ?Sized,
    {
        let now_ms = clock.uptime_ms();
        display.clear(BinaryColor::Off).ok();
        self.track_style(settings.clock_style);

        let mode = if self.link.is_online(now_ms) {
            draw_stats_screen(display, self.link.latest());
            DisplayMode::Stats
        } else {
            match clock.now() {
                Ok(wall) => {
                    match settings.clock_style {
                        ClockStyle::Sprite => {
                            self.animation.update(&wall, now_ms);
                            draw_sprite_clock(display, &self.animation.frame(), &wall, settings.date_format);
                        }
                        ClockStyle::Standard => draw_standard_clock(display, &wall, settings),
                        ClockStyle::Large => draw_large_clock(display, &wall, settings),
                    }
                    DisplayMode::Clock(settings.clock_style)
                }
                Err(_) => {
                    draw_time_error(display);
                    DisplayMode::TimeError
                }
            }
        };

        self.track_mode(mode);
        mode
    }

    #[inline]
    pub const fn animation(&self) -> &AnimationState { &self.animation }

    /// Whether a stats packet arrived within the timeout.
    #[inline]
    pub fn is_online(
        &self,
        now_ms: u64,
    ) -> bool {
        self.link.is_online(now_ms)
    }

    fn track_style(
        &mut self,
        style: ClockStyle,
    ) {
        if self.last_style == Some(ClockStyle::Sprite) && style != ClockStyle::Sprite {
            info!("Clock style {} selected, resetting animation", style.name());
            self.animation.reset();
        }
        self.last_style = Some(style);
    }

    fn track_mode(
        &mut self,
        mode: DisplayMode,
    ) {
        if self.last_mode == Some(mode) {
            return;
        }
        match mode {
            DisplayMode::Stats => info!("Stats online"),
            DisplayMode::Clock(style) => info!("Showing {} clock", style.name()),
            DisplayMode::TimeError => warn!("Wall clock unavailable"),
        }
        self.last_mode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SpriteState;
    use crate::config::{ANIMATION_TICK_MS, FRAME_PERIOD_MS, SPRITE_START_X, STATS_TIMEOUT_MS};
    use crate::test_support::{FakeClock, TestDisplay};
    use crate::time::ClockTime;

    /// Render `frames` frames, advancing uptime by one sprite tick each.
    fn run(
        monitor: &mut Monitor,
        clock: &mut FakeClock,
        settings: &Settings,
        frames: usize,
    ) -> DisplayMode {
        let mut display = TestDisplay::new();
        let mut mode = DisplayMode::TimeError;
        for _ in 0..frames {
            mode = monitor.render(&mut display, &*clock, settings);
            clock.uptime_ms += ANIMATION_TICK_MS;
        }
        mode
    }

    // -------------------------------------------------------------------------
    // Mode selection
    // -------------------------------------------------------------------------

    #[test]
    fn test_offline_shows_selected_clock() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(10, 0, 0);
        for style in [ClockStyle::Sprite, ClockStyle::Standard, ClockStyle::Large] {
            let settings = Settings { clock_style: style, ..Settings::new() };
            assert_eq!(run(&mut monitor, &mut clock, &settings, 1), DisplayMode::Clock(style));
        }
    }

    #[test]
    fn test_stats_take_over_until_timeout() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(10, 0, 0);
        clock.uptime_ms = 1_000;
        monitor.receive_stats(PcStats::default(), 1_000);

        let settings = Settings::new();
        assert_eq!(run(&mut monitor, &mut clock, &settings, 1), DisplayMode::Stats);

        clock.uptime_ms = 1_000 + STATS_TIMEOUT_MS;
        assert_eq!(
            run(&mut monitor, &mut clock, &settings, 1),
            DisplayMode::Clock(ClockStyle::Sprite),
            "Clock returns once stats stop arriving"
        );
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut monitor = Monitor::new();
        let clock = FakeClock::at(10, 0, 0);
        let mut display = TestDisplay::new();
        monitor.receive_stats(PcStats::default(), 0);
        monitor.render(&mut display, &clock, &Settings::new());
        let stats_pixels = display.lit_count();

        let unsynced = FakeClock { uptime_ms: STATS_TIMEOUT_MS, ..FakeClock::unsynchronized() };
        monitor.render(&mut display, &unsynced, &Settings::new());
        assert!(display.lit_count() < stats_pixels, "Only the placeholder should remain");
        assert_eq!(display.lit_in_rows(0, 28), 0, "Stats rows are cleared");
    }

    // -------------------------------------------------------------------------
    // Time errors
    // -------------------------------------------------------------------------

    #[test]
    fn test_time_error_leaves_animation_untouched() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(19, 59, 55);
        let settings = Settings::new();
        run(&mut monitor, &mut clock, &settings, 60);
        assert_ne!(monitor.animation().sprite().state(), SpriteState::Idle, "Run in progress");
        let before = monitor.animation().clone();

        clock.now = FakeClock::unsynchronized().now;
        assert_eq!(run(&mut monitor, &mut clock, &settings, 20), DisplayMode::TimeError);
        assert_eq!(monitor.animation(), &before, "Failed time read must not mutate animation state");
    }

    #[test]
    fn test_time_error_recovers() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::unsynchronized();
        let settings = Settings::new();
        assert_eq!(run(&mut monitor, &mut clock, &settings, 3), DisplayMode::TimeError);

        clock.now = FakeClock::at(7, 30, 0).now;
        assert_eq!(run(&mut monitor, &mut clock, &settings, 1), DisplayMode::Clock(ClockStyle::Sprite));
        assert_eq!(monitor.animation().ledger().shown(), ClockTime::new(7, 30).unwrap());
    }

    // -------------------------------------------------------------------------
    // Style changes
    // -------------------------------------------------------------------------

    #[test]
    fn test_leaving_sprite_style_resets_animation() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(12, 34, 55);
        let sprite = Settings::new();
        while !monitor.animation().ledger().is_overridden() {
            run(&mut monitor, &mut clock, &sprite, 1);
            assert!(clock.uptime_ms < 60_000, "Apex should be reached during the run");
        }

        let standard = Settings { clock_style: ClockStyle::Standard, ..Settings::new() };
        run(&mut monitor, &mut clock, &standard, 1);

        let animation = monitor.animation();
        assert_eq!(animation.sprite().state(), SpriteState::Idle);
        assert_eq!(animation.sprite().x(), SPRITE_START_X);
        assert!(!animation.ledger().is_overridden(), "Override cleared on style change");
        assert!(animation.bounce().is_settled());
    }

    #[test]
    fn test_staying_in_sprite_style_keeps_animation() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(12, 34, 55);
        let settings = Settings::new();
        run(&mut monitor, &mut clock, &settings, 10);
        let x = monitor.animation().sprite().x();
        assert!(x > SPRITE_START_X, "Sprite walked in");

        // Toggling an unrelated setting must not restart the run
        let twelve_hour = Settings { use_24_hour: false, ..Settings::new() };
        run(&mut monitor, &mut clock, &twelve_hour, 1);
        assert!(monitor.animation().sprite().x() > x);
    }

    #[test]
    fn test_full_minute_at_frame_rate() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(9, 59, 55);
        let settings = Settings::new();
        let mut display = TestDisplay::new();
        for _ in 0..2000 {
            monitor.render(&mut display, &clock, &settings);
            clock.uptime_ms += FRAME_PERIOD_MS;
        }
        assert_eq!(monitor.animation().ledger().shown(), ClockTime::new(10, 0).unwrap());
        assert_eq!(monitor.animation().sprite().state(), SpriteState::Idle);
    }

    #[test]
    fn test_reset_animation_entry_point() {
        let mut monitor = Monitor::new();
        let mut clock = FakeClock::at(12, 34, 56);
        run(&mut monitor, &mut clock, &Settings::new(), 5);
        monitor.reset_animation();
        assert_eq!(monitor.animation().sprite().state(), SpriteState::Idle);
    }
}
