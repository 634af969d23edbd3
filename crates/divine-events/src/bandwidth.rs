#![forbid(unsafe_code)]

use divine_abr::BandwidthTier;

/// Events emitted by the bandwidth tracker.
#[derive(Clone, Debug, PartialEq)]
pub enum BandwidthEvent {
    /// Tier changed, either from new samples or a manual override.
    TierChanged {
        tier: BandwidthTier,
        bandwidth_mbps: f64,
        sample_count: usize,
    },
}
