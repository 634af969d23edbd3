use std::time::Duration;

use divine_events::{EventBus, MediaEvent};
use divine_net::{Net, NetExt, NetResult, TimeoutNet};
use url::Url;

use crate::{MediaHost, StreamQuality};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Checks whether the adaptive manifest of a video is being served.
pub struct HlsProbe<N> {
    net: TimeoutNet<N>,
    host: MediaHost,
    events: Option<EventBus>,
}

impl<N: Net> HlsProbe<N> {
    pub fn new(net: N, host: MediaHost, timeout: Duration) -> Self {
        Self {
            net: net.with_timeout(timeout),
            host,
            events: None,
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.net.timeout()
    }

    /// `true` only if a HEAD request for the master manifest answers 2xx
    /// within the timeout.
    ///
    /// Never fails: foreign URLs, transport errors, timeouts and non-2xx
    /// statuses all report `false`.
    pub async fn check_hls_available(&self, video_url: &str) -> bool {
        let manifest = self.host.resolve(video_url, StreamQuality::Adaptive);
        if manifest == video_url {
            return false;
        }

        let available = match self.head(&manifest).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(%manifest, error = %e, "HLS manifest unavailable");
                false
            }
        };
        tracing::debug!(%manifest, available, "HLS probe finished");

        if let Some(events) = &self.events {
            events.publish(MediaEvent::HlsProbed {
                manifest_url: manifest,
                available,
            });
        }
        available
    }

    async fn head(&self, manifest: &str) -> NetResult<()> {
        let url = Url::parse(manifest)?;
        self.net.head(url, None).await?;
        Ok(())
    }
}
