//! Synthetic video load measurements.

use std::time::Duration;

/// Bytes that take `load_time` to arrive at `mbps`.
#[must_use]
pub fn bytes_for_mbps(mbps: f64, load_time: Duration) -> u64 {
    (mbps * 1_000_000.0 * load_time.as_secs_f64() / 8.0).round() as u64
}

/// Deterministic source of `(bytes, load time)` pairs around a target rate.
///
/// Backed by xorshift64 so a fixed seed reproduces the same sequence.
pub struct LoadGenerator {
    state: u64,
}

impl LoadGenerator {
    /// `seed` must be non-zero.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert_ne!(seed, 0, "xorshift seed must be non-zero");
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// A load between 100 ms and 3 s whose rate lies in `[min_mbps, max_mbps)`.
    pub fn load_between(&mut self, min_mbps: f64, max_mbps: f64) -> (u64, Duration) {
        let load_time = Duration::from_millis(100 + (self.unit() * 2_900.0) as u64);
        let mbps = min_mbps + (max_mbps - min_mbps) * self.unit();
        (bytes_for_mbps(mbps, load_time), load_time)
    }
}
