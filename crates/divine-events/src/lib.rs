#![forbid(unsafe_code)]

//! Broadcast event bus for bandwidth and media notifications.
//!
//! Tracker listeners are synchronous and run on the caller's thread; the bus
//! carries the same changes to async tasks and other threads.

mod bandwidth;
mod bus;
mod event;
mod media;

pub use bandwidth::BandwidthEvent;
pub use bus::EventBus;
pub use event::Event;
pub use media::MediaEvent;
