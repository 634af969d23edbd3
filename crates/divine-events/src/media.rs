#![forbid(unsafe_code)]

/// Events emitted while resolving media URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// HLS availability probe finished.
    HlsProbed { manifest_url: String, available: bool },
}
