#![forbid(unsafe_code)]

//! Media-host naming contract.
//!
//! Canonical videos live at `https://<media-host>/<content-hash>`; the host
//! also serves HLS renditions under `<hash>/hls/`. [`MediaHost`] rewrites
//! canonical URLs into the rendition that suits a [`BandwidthTier`] and
//! [`HlsProbe`] checks that the adaptive manifest actually exists.
//!
//! [`BandwidthTier`]: divine_abr::BandwidthTier

mod host;
mod probe;
mod quality;
mod resolver;

pub use host::{DEFAULT_MEDIA_HOST, MediaHost};
pub use probe::{DEFAULT_PROBE_TIMEOUT, HlsProbe};
pub use quality::{ParseQualityError, StreamQuality};
pub use resolver::VideoUrlResolver;
