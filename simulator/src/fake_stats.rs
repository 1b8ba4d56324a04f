//! Synthetic stats feed standing in for the PC-side sender.

use std::time::Instant;

use pcmon_common::PcStats;

use crate::timing::STATS_INTERVAL;

const RAM_TOTAL_GB: f32 = 32.0;

/// Slow sine sweep between `min` and `max`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// One packet's worth of plausible readings at time `t` (seconds).
pub fn fake_stats(
    t: f32,
    timestamp: &str,
) -> PcStats {
    let ram_percent = fake_signal(t, 35.0, 80.0, 0.05);
    let mut stats = PcStats {
        cpu_percent: fake_signal(t, 3.0, 100.0, 0.31),
        ram_percent,
        ram_used_gb: RAM_TOTAL_GB * ram_percent / 100.0,
        ram_total_gb: RAM_TOTAL_GB,
        disk_percent: fake_signal(t, 61.0, 63.0, 0.01),
        cpu_temp: fake_signal(t, 38.0, 92.0, 0.23) as i16,
        gpu_temp: fake_signal(t, 34.0, 81.0, 0.17) as i16,
        fan_speed: fake_signal(t, 600.0, 2400.0, 0.23) as u16,
        ..PcStats::default()
    };
    stats.set_timestamp(timestamp);
    stats
}

/// Emits a packet once per [`STATS_INTERVAL`] while enabled.
pub struct StatsFeed {
    enabled: bool,
    started: Instant,
    last_sent: Option<Instant>,
}

impl StatsFeed {
    pub fn new() -> Self {
        Self {
            enabled: false,
            started: Instant::now(),
            last_sent: None,
        }
    }

    /// Toggle the feed, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.last_sent = None;
        self.enabled
    }

    /// Next packet if one is due.
    pub fn poll(
        &mut self,
        timestamp: &str,
    ) -> Option<PcStats> {
        if !self.enabled || self.last_sent.is_some_and(|sent| sent.elapsed() < STATS_INTERVAL) {
            return None;
        }
        self.last_sent = Some(Instant::now());
        Some(fake_stats(self.started.elapsed().as_secs_f32(), timestamp))
    }
}

impl Default for StatsFeed {
    fn default() -> Self { Self::new() }
}
