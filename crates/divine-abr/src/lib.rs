//! Bandwidth estimation for adaptive video playback.
//!
//! [`BandwidthTracker`] collects `(bytes, load time)` measurements from real
//! playback, keeps a recency-weighted estimate over a bounded window and maps
//! it onto a [`BandwidthTier`]. Observers subscribe to tier changes.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use divine_abr::{BandwidthTier, BandwidthTracker, TrackerOptions};
//!
//! let tracker = BandwidthTracker::new(TrackerOptions::default());
//! let _sub = tracker.subscribe(|tier| println!("tier is now {tier}"));
//!
//! // Two 100 kB videos that each took a second: 0.8 Mbps.
//! tracker.record_load(100_000, Duration::from_secs(1));
//! tracker.record_load(100_000, Duration::from_secs(1));
//! assert_eq!(tracker.tier(), BandwidthTier::Low);
//! ```

#![forbid(unsafe_code)]

mod estimator;
mod listeners;
mod timing;
mod tracker;
mod types;

pub use estimator::{Estimator, WeightedEstimator};
pub use listeners::Subscription;
pub use timing::ResourceTiming;
pub use tracker::BandwidthTracker;
pub use types::{BandwidthInfo, BandwidthTier, LoadSample, TrackerOptions};
