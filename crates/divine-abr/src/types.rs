use std::{fmt, time::Duration};

use web_time::Instant;

/// Discrete bandwidth classification driving stream-quality selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BandwidthTier {
    /// Slow connection, pinned to the 480p rendition.
    Low,
    /// Adaptive streaming. Also the cold-start tier.
    #[default]
    Medium,
    /// Fast connection. Resolves like `Medium` for now.
    High,
}

impl BandwidthTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for BandwidthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single admitted playback measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadSample {
    pub bytes: u64,
    pub load_time: Duration,
    pub at: Instant,
}

impl LoadSample {
    /// Bandwidth of this sample in megabits per second.
    #[must_use]
    pub fn mbps(&self) -> f64 {
        #[expect(clippy::cast_precision_loss)] // byte counts stay far below 2^52
        let bits = self.bytes as f64 * 8.0;
        bits / self.load_time.as_secs_f64() / 1_000_000.0
    }
}

/// Tracker configuration.
#[derive(Clone, Debug)]
pub struct TrackerOptions {
    /// Samples kept for the rolling estimate.
    pub max_samples: usize,
    /// Samples older than this are discarded.
    pub max_sample_age: Duration,
    /// Faster loads are treated as cache hits and ignored.
    pub min_load_time: Duration,
    /// Slower loads are treated as stalls and ignored.
    pub max_load_time: Duration,
    /// Smaller transfers (manifests, probes) are ignored.
    pub min_bytes: u64,
    /// Samples required before the tier is recomputed.
    pub min_samples_for_tier: usize,
    /// Estimates below this are `Low`.
    pub low_threshold_mbps: f64,
    /// Estimates above this are `High`.
    pub high_threshold_mbps: f64,
    /// Tier reported until enough samples arrive.
    pub initial_tier: BandwidthTier,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            max_samples: 10,
            max_sample_age: Duration::from_secs(5 * 60),
            min_load_time: Duration::from_millis(50),
            max_load_time: Duration::from_millis(30_000),
            min_bytes: 10_000,
            min_samples_for_tier: 2,
            low_threshold_mbps: 2.0,
            high_threshold_mbps: 5.0,
            initial_tier: BandwidthTier::Medium,
        }
    }
}

impl TrackerOptions {
    #[must_use]
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples.max(1);
        self
    }

    #[must_use]
    pub fn with_max_sample_age(mut self, age: Duration) -> Self {
        self.max_sample_age = age;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, low_mbps: f64, high_mbps: f64) -> Self {
        self.low_threshold_mbps = low_mbps;
        self.high_threshold_mbps = high_mbps.max(low_mbps);
        self
    }

    #[must_use]
    pub fn with_initial_tier(mut self, tier: BandwidthTier) -> Self {
        self.initial_tier = tier;
        self
    }

    /// Whether a raw measurement is plausible enough to become a sample.
    #[must_use]
    pub fn admits(&self, bytes: u64, load_time: Duration) -> bool {
        load_time >= self.min_load_time
            && load_time <= self.max_load_time
            && bytes >= self.min_bytes
    }

    /// Map an aggregate estimate onto a tier.
    ///
    /// Both thresholds are inclusive on the `Medium` side.
    #[must_use]
    pub fn classify(&self, mbps: f64) -> BandwidthTier {
        if mbps < self.low_threshold_mbps {
            BandwidthTier::Low
        } else if mbps <= self.high_threshold_mbps {
            BandwidthTier::Medium
        } else {
            BandwidthTier::High
        }
    }
}

/// Point-in-time view of the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandwidthInfo {
    pub tier: BandwidthTier,
    pub mbps: f64,
    pub sample_count: usize,
}
