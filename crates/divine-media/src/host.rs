use crate::StreamQuality;

pub const DEFAULT_MEDIA_HOST: &str = "media.divine.video";

/// A media host following the `<host>/<content-hash>` naming scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaHost {
    scheme: String,
    host: String,
    // `host/`, the prefix that marks a URL as belonging to this host
    marker: String,
}

impl Default for MediaHost {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_HOST)
    }
}

impl MediaHost {
    /// `host` may carry a port, e.g. `127.0.0.1:8080`.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let marker = format!("{host}/");
        Self {
            scheme: "https".to_string(),
            host,
            marker,
        }
    }

    /// Scheme used when rebuilding URLs. Defaults to `https`.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether `url` points at this host.
    #[must_use]
    pub fn owns(&self, url: &str) -> bool {
        url.contains(&self.marker)
    }

    /// Content hash following the host, if any.
    ///
    /// The hash is the run of hex digits right after `<host>/`, matched
    /// case-insensitively.
    #[must_use]
    pub fn content_hash<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.match_indices(self.marker.as_str()).find_map(|(idx, _)| {
            let rest = &url[idx + self.marker.len()..];
            let len = rest.bytes().take_while(u8::is_ascii_hexdigit).count();
            (len > 0).then(|| &rest[..len])
        })
    }

    /// Canonical URL of a content hash.
    #[must_use]
    pub fn base_url(&self, hash: &str) -> String {
        format!("{}://{}/{hash}", self.scheme, self.host)
    }

    /// Rewrite `video_url` into the given rendition.
    ///
    /// Foreign URLs, URLs that already point into `/hls/`, URLs without a
    /// content hash and [`StreamQuality::Original`] all come back unchanged.
    #[must_use]
    pub fn resolve(&self, video_url: &str, quality: StreamQuality) -> String {
        if !self.owns(video_url) || video_url.contains("/hls/") {
            return video_url.to_string();
        }
        let Some(hash) = self.content_hash(video_url) else {
            return video_url.to_string();
        };
        match quality.hls_path() {
            Some(path) => format!("{}{path}", self.base_url(hash)),
            None => video_url.to_string(),
        }
    }
}
