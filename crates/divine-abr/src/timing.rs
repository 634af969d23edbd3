use std::time::Duration;

/// The fields of a browser resource-timing record the tracker consumes.
///
/// Timestamps are milliseconds relative to the page's time origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceTiming {
    /// Resource URL.
    pub name: String,
    /// Bytes fetched over the network, 0 for cache hits.
    pub transfer_size: u64,
    /// Payload size before content decoding.
    pub encoded_body_size: u64,
    pub request_start: f64,
    pub response_end: f64,
}

impl ResourceTiming {
    /// Bytes and load time of this entry, if both are positive and the
    /// interval fits a [`Duration`].
    #[must_use]
    pub fn measurement(&self) -> Option<(u64, Duration)> {
        let bytes = if self.transfer_size > 0 {
            self.transfer_size
        } else {
            self.encoded_body_size
        };
        let load_ms = self.response_end - self.request_start;

        if bytes == 0 || !load_ms.is_finite() || load_ms <= 0.0 {
            return None;
        }
        let load_time = Duration::try_from_secs_f64(load_ms / 1000.0).ok()?;
        Some((bytes, load_time))
    }

    /// Whether this entry describes the media currently loaded from `src`.
    ///
    /// Matches when the entry name contains `src`, or when `src` contains the
    /// last path segment of the entry name.
    #[must_use]
    pub fn matches_source(&self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        if self.name.contains(src) {
            return true;
        }
        self.name
            .rsplit('/')
            .next()
            .is_some_and(|segment| !segment.is_empty() && src.contains(segment))
    }
}
