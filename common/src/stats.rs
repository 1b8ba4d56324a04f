//! PC telemetry received from the host and its liveness tracking.
//!
//! Packets are decoded by the network task outside this crate. The display
//! only needs the decoded values and the time the last packet arrived: stats
//! are shown while packets keep arriving and the clock takes over once they
//! stop for [`STATS_TIMEOUT_MS`].

use heapless::String;

use crate::config::STATS_TIMEOUT_MS;

/// Capacity of the host timestamp (`HH:MM`).
pub const TIMESTAMP_LEN: usize = 5;

/// One decoded telemetry packet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PcStats {
    pub cpu_percent: f32,
    pub ram_percent: f32,
    pub ram_used_gb: f32,
    pub ram_total_gb: f32,
    pub disk_percent: f32,
    /// Degrees Celsius.
    pub cpu_temp: i16,
    /// Degrees Celsius.
    pub gpu_temp: i16,
    /// Pump/fan speed in RPM.
    pub fan_speed: u16,
    /// Host wall time as `HH:MM`.
    pub timestamp: String<TIMESTAMP_LEN>,
}

impl PcStats {
    /// Store a host timestamp, keeping only its first five characters.
    pub fn set_timestamp(
        &mut self,
        text: &str,
    ) {
        self.timestamp.clear();
        for c in text.chars() {
            if self.timestamp.push(c).is_err() {
                break;
            }
        }
    }
}

// =============================================================================
// Link State
// =============================================================================

/// Latest stats packet and when it arrived.
#[derive(Debug, Default)]
pub struct StatsLink {
    latest: PcStats,
    last_received_ms: Option<u64>,
}

impl StatsLink {
    pub const fn new() -> Self {
        Self {
            latest: PcStats {
                cpu_percent: 0.0,
                ram_percent: 0.0,
                ram_used_gb: 0.0,
                ram_total_gb: 0.0,
                disk_percent: 0.0,
                cpu_temp: 0,
                gpu_temp: 0,
                fan_speed: 0,
                timestamp: String::new(),
            },
            last_received_ms: None,
        }
    }

    /// Record a packet received at `now_ms` (monotonic).
    pub fn record(
        &mut self,
        stats: PcStats,
        now_ms: u64,
    ) {
        self.latest = stats;
        self.last_received_ms = Some(now_ms);
    }

    /// Whether a packet arrived within the timeout window.
    pub fn is_online(
        &self,
        now_ms: u64,
    ) -> bool {
        self.last_received_ms
            .is_some_and(|at| now_ms.saturating_sub(at) < STATS_TIMEOUT_MS)
    }

    #[inline]
    pub const fn latest(&self) -> &PcStats { &self.latest }
}
