use std::{fmt, str::FromStr};

use divine_abr::BandwidthTier;
use thiserror::Error;

/// Explicitly requested rendition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamQuality {
    P480,
    P720,
    /// Multi-bitrate master manifest.
    Adaptive,
    /// The canonical upload, untouched.
    Original,
}

impl StreamQuality {
    /// Rendition picked automatically for a bandwidth tier.
    ///
    /// `High` deliberately shares the master manifest with `Medium`.
    #[must_use]
    pub fn for_tier(tier: BandwidthTier) -> Self {
        match tier {
            BandwidthTier::Low => Self::P480,
            BandwidthTier::Medium | BandwidthTier::High => Self::Adaptive,
        }
    }

    /// Path appended to `<host>/<hash>`, `None` for the original upload.
    #[must_use]
    pub fn hls_path(self) -> Option<&'static str> {
        match self {
            Self::P480 => Some("/hls/stream_480p.m3u8"),
            Self::P720 => Some("/hls/stream_720p.m3u8"),
            Self::Adaptive => Some("/hls/master.m3u8"),
            Self::Original => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::Adaptive => "adaptive",
            Self::Original => "original",
        }
    }
}

impl fmt::Display for StreamQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown stream quality: {0:?}")]
pub struct ParseQualityError(String);

impl FromStr for StreamQuality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "480p" => Ok(Self::P480),
            "720p" => Ok(Self::P720),
            "adaptive" => Ok(Self::Adaptive),
            "original" => Ok(Self::Original),
            _ => Err(ParseQualityError(s.to_string())),
        }
    }
}
