use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use web_time::Instant;

use super::{
    BandwidthInfo, BandwidthTier, Estimator, LoadSample, ResourceTiming, TrackerOptions,
    WeightedEstimator,
    listeners::{ListenerRegistry, Subscription},
};

struct TrackerState<E> {
    estimator: E,
    tier: BandwidthTier,
}

/// Rolling bandwidth estimate mapped onto a [`BandwidthTier`].
///
/// Cloning yields another handle to the same tracker, so one instance can be
/// shared between the playback pipeline (which records samples) and the UI
/// (which resolves URLs and subscribes to changes).
///
/// Listeners run synchronously on the thread that caused the change, after
/// all internal locks are released. A listener that calls [`set_tier`]
/// re-enters the tracker and triggers a nested notification. The nested
/// notification completes before the outer one resumes, so listeners
/// registered after the re-entering one see the newer tier first and the
/// older, outer tier last. Read [`tier`] for the current value.
///
/// [`tier`]: Self::tier
/// [`set_tier`]: Self::set_tier
pub struct BandwidthTracker<E: Estimator = WeightedEstimator> {
    cfg: Arc<TrackerOptions>,
    state: Arc<Mutex<TrackerState<E>>>,
    listeners: Arc<ListenerRegistry>,
}

impl<E: Estimator> Clone for BandwidthTracker<E> {
    fn clone(&self) -> Self {
        Self {
            cfg: Arc::clone(&self.cfg),
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<E: Estimator> std::fmt::Debug for BandwidthTracker<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BandwidthTracker")
            .field("tier", &state.tier)
            .field("sample_count", &state.estimator.sample_count())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<E: Estimator> BandwidthTracker<E> {
    pub fn with_estimator(cfg: TrackerOptions, estimator: E) -> Self {
        let tier = cfg.initial_tier;
        Self {
            cfg: Arc::new(cfg),
            state: Arc::new(Mutex::new(TrackerState { estimator, tier })),
            listeners: Arc::new(ListenerRegistry::default()),
        }
    }

    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        &self.cfg
    }

    /// Record a completed load measured now.
    ///
    /// Returns `false` when the measurement was filtered out as noise.
    pub fn record_load(&self, bytes: u64, load_time: Duration) -> bool {
        self.record_load_at(bytes, load_time, Instant::now())
    }

    /// Record a completed load observed at `now`.
    pub fn record_load_at(&self, bytes: u64, load_time: Duration, now: Instant) -> bool {
        if !self.cfg.admits(bytes, load_time) {
            tracing::trace!(
                bytes,
                load_time_ms = load_time.as_millis(),
                "bandwidth sample rejected"
            );
            return false;
        }

        let changed = {
            let mut state = self.state.lock();
            state.estimator.push_sample(
                LoadSample {
                    bytes,
                    load_time,
                    at: now,
                },
                now,
            );
            self.recompute(&mut state)
        };

        if let Some(tier) = changed {
            self.listeners.notify(tier);
        }
        true
    }

    /// Record a load from a resource-timing entry.
    ///
    /// Uses the transfer size, falling back to the encoded body size, and the
    /// request-start to response-end interval.
    pub fn record_from_timing(&self, entry: &ResourceTiming) -> bool {
        self.record_from_timing_at(entry, Instant::now())
    }

    pub fn record_from_timing_at(&self, entry: &ResourceTiming, now: Instant) -> bool {
        let Some((bytes, load_time)) = entry.measurement() else {
            return false;
        };
        self.record_load_at(bytes, load_time, now)
    }

    /// Record the load of the video currently playing from `current_src`.
    ///
    /// Looks up its resource-timing entry among `entries`; returns whether a
    /// sample was forwarded to the estimator.
    pub fn record_video_load(&self, entries: &[ResourceTiming], current_src: &str) -> bool {
        let Some(entry) = entries.iter().find(|e| e.matches_source(current_src)) else {
            tracing::trace!(current_src, "no resource timing for video");
            return false;
        };
        if entry.transfer_size == 0 {
            return false;
        }
        self.record_from_timing(entry)
    }

    fn recompute(&self, state: &mut TrackerState<E>) -> Option<BandwidthTier> {
        if state.estimator.sample_count() < self.cfg.min_samples_for_tier {
            return None;
        }
        let mbps = state.estimator.estimate_mbps()?;
        let tier = self.cfg.classify(mbps);
        if tier == state.tier {
            return None;
        }

        tracing::debug!(
            from = %state.tier,
            to = %tier,
            bandwidth_mbps = mbps,
            "bandwidth tier changed"
        );
        state.tier = tier;
        Some(tier)
    }

    #[must_use]
    pub fn tier(&self) -> BandwidthTier {
        self.state.lock().tier
    }

    /// Current aggregate estimate in Mbps.
    ///
    /// Without samples this is the high threshold, the default assumption.
    #[must_use]
    pub fn bandwidth_mbps(&self) -> f64 {
        self.state
            .lock()
            .estimator
            .estimate_mbps()
            .unwrap_or(self.cfg.high_threshold_mbps)
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.state.lock().estimator.sample_count()
    }

    #[must_use]
    pub fn info(&self) -> BandwidthInfo {
        let state = self.state.lock();
        BandwidthInfo {
            tier: state.tier,
            mbps: state
                .estimator
                .estimate_mbps()
                .unwrap_or(self.cfg.high_threshold_mbps),
            sample_count: state.estimator.sample_count(),
        }
    }

    /// Force a tier, e.g. from an explicit user preference.
    ///
    /// Listeners are notified only if the tier actually changes.
    pub fn set_tier(&self, tier: BandwidthTier) {
        {
            let mut state = self.state.lock();
            if state.tier == tier {
                return;
            }
            tracing::debug!(from = %state.tier, to = %tier, "bandwidth tier set manually");
            state.tier = tier;
        }
        self.listeners.notify(tier);
    }

    /// Register a tier-change listener.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(BandwidthTier) + Send + Sync + 'static,
    {
        self.listeners.add(Arc::new(listener))
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl BandwidthTracker<WeightedEstimator> {
    #[must_use]
    pub fn new(cfg: TrackerOptions) -> Self {
        let estimator = WeightedEstimator::new(&cfg);
        Self::with_estimator(cfg, estimator)
    }
}

impl Default for BandwidthTracker<WeightedEstimator> {
    fn default() -> Self {
        Self::new(TrackerOptions::default())
    }
}
