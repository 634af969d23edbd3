#![forbid(unsafe_code)]

use crate::{BandwidthEvent, MediaEvent};

/// Unified event.
///
/// Hierarchical: each subsystem has its own variant with a sub-enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Bandwidth(BandwidthEvent),
    Media(MediaEvent),
}

impl From<BandwidthEvent> for Event {
    fn from(e: BandwidthEvent) -> Self {
        Self::Bandwidth(e)
    }
}

impl From<MediaEvent> for Event {
    fn from(e: MediaEvent) -> Self {
        Self::Media(e)
    }
}
