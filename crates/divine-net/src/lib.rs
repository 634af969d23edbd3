#![forbid(unsafe_code)]

//! HTTP plumbing for media-host requests.
//!
//! [`Net`] is the seam: [`HttpClient`] talks to the network through
//! `reqwest`, [`TimeoutNet`] bounds any implementation in time.

mod client;
mod error;
mod timeout;
mod traits;
mod types;

pub use crate::{
    client::HttpClient,
    error::{NetError, NetResult},
    timeout::TimeoutNet,
    traits::{Net, NetExt},
    types::{Headers, NetOptions},
};
