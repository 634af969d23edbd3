use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{error::NetError, timeout::TimeoutNet, types::Headers};

#[async_trait]
pub trait Net: Send + Sync {
    /// Issue a HEAD request, returning the response headers on a 2xx status.
    async fn head(&self, url: Url, headers: Option<Headers>) -> Result<Headers, NetError>;
}

pub trait NetExt: Net + Sized {
    /// Add timeout layer
    fn with_timeout(self, timeout: Duration) -> TimeoutNet<Self> {
        TimeoutNet::new(self, timeout)
    }
}

impl<T: Net> NetExt for T {}
