#![forbid(unsafe_code)]

use std::time::Duration;

use divine_abr::{BandwidthInfo, BandwidthTier, BandwidthTracker, ResourceTiming, Subscription};
use divine_events::{BandwidthEvent, EventBus};
use divine_media::{HlsProbe, MediaHost, StreamQuality, VideoUrlResolver};
use divine_net::{HttpClient, Net};

use crate::{DivineConfig, DivineResult};

/// Bandwidth-aware video URL selection.
///
/// Owns one [`BandwidthTracker`] and hands out URLs based on it. Feed it
/// load measurements from the player; ask it which URL to play.
pub struct QualitySelector<N = HttpClient> {
    tracker: BandwidthTracker,
    resolver: VideoUrlResolver,
    probe: HlsProbe<N>,
    events: Option<EventBus>,
    _bridge: Option<Subscription>,
}

impl QualitySelector<HttpClient> {
    /// # Errors
    ///
    /// Returns [`DivineError::Net`](crate::DivineError::Net) if the HTTP
    /// client cannot be built.
    pub fn new(config: DivineConfig) -> DivineResult<Self> {
        let net = HttpClient::new(config.net.clone())?;
        Ok(Self::with_net(config, net))
    }
}

impl<N: Net> QualitySelector<N> {
    /// Build on a caller-provided [`Net`] implementation.
    pub fn with_net(config: DivineConfig, net: N) -> Self {
        let DivineConfig {
            tracker,
            media_host,
            probe_timeout,
            events,
            ..
        } = config;

        tracing::debug!(
            media_host = media_host.host(),
            probe_timeout_ms = probe_timeout.as_millis(),
            events = events.is_some(),
            "quality selector created"
        );

        let tracker = BandwidthTracker::new(tracker);
        let resolver = VideoUrlResolver::new(media_host.clone(), tracker.clone());
        let mut probe = HlsProbe::new(net, media_host, probe_timeout);
        let mut bridge = None;
        if let Some(bus) = &events {
            probe = probe.with_events(bus.clone());
            bridge = Some(forward_tier_changes(&tracker, bus.clone()));
        }

        Self {
            tracker,
            resolver,
            probe,
            events,
            _bridge: bridge,
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &BandwidthTracker {
        &self.tracker
    }

    #[must_use]
    pub fn media_host(&self) -> &MediaHost {
        self.resolver.host()
    }

    #[must_use]
    pub fn events(&self) -> Option<&EventBus> {
        self.events.as_ref()
    }

    pub fn record_load(&self, bytes: u64, load_time: Duration) -> bool {
        self.tracker.record_load(bytes, load_time)
    }

    pub fn record_from_timing(&self, entry: &ResourceTiming) -> bool {
        self.tracker.record_from_timing(entry)
    }

    pub fn record_video_load(&self, entries: &[ResourceTiming], current_src: &str) -> bool {
        self.tracker.record_video_load(entries, current_src)
    }

    #[must_use]
    pub fn tier(&self) -> BandwidthTier {
        self.tracker.tier()
    }

    #[must_use]
    pub fn info(&self) -> BandwidthInfo {
        self.tracker.info()
    }

    pub fn set_tier(&self, tier: BandwidthTier) {
        self.tracker.set_tier(tier);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(BandwidthTier) + Send + Sync + 'static,
    {
        self.tracker.subscribe(listener)
    }

    #[must_use]
    pub fn optimal_video_url(
        &self,
        video_url: &str,
        force_quality: Option<StreamQuality>,
    ) -> String {
        self.resolver.optimal_video_url(video_url, force_quality)
    }

    pub async fn check_hls_available(&self, video_url: &str) -> bool {
        self.probe.check_hls_available(video_url).await
    }
}

/// Republish tracker tier changes on `bus`.
///
/// The listener holds a tracker handle; the returned subscription must be
/// dropped for the tracker to be freed.
fn forward_tier_changes(tracker: &BandwidthTracker, bus: EventBus) -> Subscription {
    let handle = tracker.clone();
    tracker.subscribe(move |tier| {
        let info = handle.info();
        bus.publish(BandwidthEvent::TierChanged {
            tier,
            bandwidth_mbps: info.mbps,
            sample_count: info.sample_count,
        });
    })
}
