#![forbid(unsafe_code)]
#![expect(
    clippy::unwrap_used,
    reason = "test utility crate, unwraps are acceptable"
)]
#![expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "test utility crate, numeric casts are acceptable for load generation"
)]

//! Shared test utilities for the divine workspace.

pub mod http_server;
pub mod loads;
pub mod media_server;

pub use http_server::TestHttpServer;
pub use loads::{LoadGenerator, bytes_for_mbps};
pub use media_server::{MediaServer, RunningMediaServer};
