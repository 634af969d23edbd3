use std::{collections::VecDeque, time::Duration};

use web_time::Instant;

use super::{LoadSample, TrackerOptions};

/// Trait for bandwidth estimation strategies.
///
/// Allows testing `BandwidthTracker` with mock estimators.
#[cfg_attr(test, unimock::unimock(api = EstimatorMock))]
pub trait Estimator: Send + 'static {
    /// Add an admitted sample, evicting expired and surplus samples.
    fn push_sample(&mut self, sample: LoadSample, now: Instant);

    /// Number of samples currently contributing to the estimate.
    fn sample_count(&self) -> usize;

    /// Aggregate estimate in Mbps, or `None` without samples.
    fn estimate_mbps(&self) -> Option<f64>;
}

/// Linearly recency-weighted mean over a bounded, time-limited window.
///
/// The sample at position `i` (oldest first) carries weight `i + 1`.
#[derive(Clone, Debug)]
pub struct WeightedEstimator {
    samples: VecDeque<LoadSample>,
    max_samples: usize,
    max_age: Duration,
}

impl WeightedEstimator {
    #[must_use]
    pub fn new(cfg: &TrackerOptions) -> Self {
        let max_samples = cfg.max_samples.max(1);
        Self {
            samples: VecDeque::with_capacity(max_samples + 1),
            max_samples,
            max_age: cfg.max_sample_age,
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = &LoadSample> {
        self.samples.iter()
    }

    fn prune(&mut self, now: Instant) {
        let max_age = self.max_age;
        self.samples
            .retain(|s| now.saturating_duration_since(s.at) <= max_age);
        while self.samples.len() > self.max_samples {
            self.samples.pop_front();
        }
    }
}

impl Estimator for WeightedEstimator {
    fn push_sample(&mut self, sample: LoadSample, now: Instant) {
        self.samples.push_back(sample);
        self.prune(now);
    }

    fn sample_count(&self) -> usize {
        self.samples.len()
    }

    fn estimate_mbps(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }

        let (weighted, total_weight) = self
            .samples
            .iter()
            .zip(1_u32..)
            .fold((0.0, 0.0), |(acc, total), (sample, weight)| {
                let weight = f64::from(weight);
                (acc + sample.mbps() * weight, total + weight)
            });

        Some(weighted / total_weight)
    }
}
