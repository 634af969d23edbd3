//! All integration tests for divine
#![expect(
    clippy::unwrap_used,
    reason = "integration test crate, unwraps are acceptable in test code"
)]

mod divine_abr;
mod divine_media;
mod divine_net;
