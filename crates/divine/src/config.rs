#![forbid(unsafe_code)]

//! Configuration for [`QualitySelector`](crate::QualitySelector).

use std::time::Duration;

use divine_abr::TrackerOptions;
use divine_events::EventBus;
use divine_media::{DEFAULT_PROBE_TIMEOUT, MediaHost};
use divine_net::NetOptions;

/// Unified configuration for creating a [`QualitySelector`](crate::QualitySelector).
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use divine::{DivineConfig, MediaHost};
///
/// let config = DivineConfig::default()
///     .with_media_host(MediaHost::new("media.example.org"))
///     .with_probe_timeout(Duration::from_secs(2));
/// assert_eq!(config.media_host.host(), "media.example.org");
/// ```
#[derive(Clone, Debug)]
pub struct DivineConfig {
    /// Bandwidth tracker thresholds, window and filters.
    pub tracker: TrackerOptions,
    /// Media host whose URLs get rewritten.
    pub media_host: MediaHost,
    /// HTTP client settings for the HLS probe.
    pub net: NetOptions,
    /// Upper bound for a single HLS availability probe.
    pub probe_timeout: Duration,
    /// Bus that receives tier changes and probe results.
    pub events: Option<EventBus>,
}

impl Default for DivineConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerOptions::default(),
            media_host: MediaHost::default(),
            net: NetOptions::default(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            events: None,
        }
    }
}

impl DivineConfig {
    #[must_use]
    pub fn with_tracker(mut self, tracker: TrackerOptions) -> Self {
        self.tracker = tracker;
        self
    }

    #[must_use]
    pub fn with_media_host(mut self, host: MediaHost) -> Self {
        self.media_host = host;
        self
    }

    #[must_use]
    pub fn with_net(mut self, net: NetOptions) -> Self {
        self.net = net;
        self
    }

    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }
}
