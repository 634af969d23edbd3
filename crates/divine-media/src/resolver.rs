use divine_abr::{BandwidthTracker, Estimator, WeightedEstimator};

use crate::{MediaHost, StreamQuality};

/// Picks the rendition of a video that suits the tracker's current tier.
pub struct VideoUrlResolver<E: Estimator = WeightedEstimator> {
    host: MediaHost,
    tracker: BandwidthTracker<E>,
}

impl<E: Estimator> Clone for VideoUrlResolver<E> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            tracker: self.tracker.clone(),
        }
    }
}

impl<E: Estimator> std::fmt::Debug for VideoUrlResolver<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoUrlResolver")
            .field("host", &self.host)
            .field("tracker", &self.tracker)
            .finish()
    }
}

impl<E: Estimator> VideoUrlResolver<E> {
    pub fn new(host: MediaHost, tracker: BandwidthTracker<E>) -> Self {
        Self { host, tracker }
    }

    pub fn host(&self) -> &MediaHost {
        &self.host
    }

    pub fn tracker(&self) -> &BandwidthTracker<E> {
        &self.tracker
    }

    /// Best URL for `video_url` under current conditions.
    ///
    /// `force_quality` overrides the tier. Reads the tracker but never
    /// changes it.
    pub fn optimal_video_url(
        &self,
        video_url: &str,
        force_quality: Option<StreamQuality>,
    ) -> String {
        let quality =
            force_quality.unwrap_or_else(|| StreamQuality::for_tier(self.tracker.tier()));
        self.host.resolve(video_url, quality)
    }
}
