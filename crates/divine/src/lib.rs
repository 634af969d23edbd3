#![forbid(unsafe_code)]

//! # diVine
//!
//! Bandwidth-adaptive stream-quality selection for diVine video playback.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use divine::prelude::*;
//!
//! # async fn run() -> Result<(), DivineError> {
//! let selector = QualitySelector::new(DivineConfig::default())?;
//!
//! // After each video finishes loading:
//! selector.record_load(1_500_000, Duration::from_millis(2_400));
//!
//! let url = selector.optimal_video_url("https://media.divine.video/abc123", None);
//! if !selector.check_hls_available("https://media.divine.video/abc123").await {
//!     // fall back to the original upload
//! }
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod abr {
    pub use divine_abr::*;
}

pub mod events {
    pub use divine_events::*;
}

pub mod media {
    pub use divine_media::*;
}

pub mod net {
    pub use divine_net::*;
}

// ── Selector ────────────────────────────────────────────────────────────

mod config;
mod error;
mod selector;

pub use config::DivineConfig;
pub use divine_abr::{BandwidthTier, TrackerOptions};
pub use divine_media::{MediaHost, StreamQuality};
pub use error::{DivineError, DivineResult};
pub use selector::QualitySelector;

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    pub use divine_abr::{BandwidthInfo, BandwidthTier, ResourceTiming, TrackerOptions};
    pub use divine_events::{BandwidthEvent, Event, EventBus, MediaEvent};
    pub use divine_media::{MediaHost, StreamQuality};

    pub use crate::{DivineConfig, DivineError, QualitySelector};
}
