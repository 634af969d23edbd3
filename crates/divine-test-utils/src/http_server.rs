//! Localhost HTTP server for tests.

use std::{future::IntoFuture, net::SocketAddr};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use url::Url;

/// An axum router served on an ephemeral localhost port.
///
/// The server stops accepting connections once this handle is dropped.
pub struct TestHttpServer {
    addr: SocketAddr,
    _stop: oneshot::Sender<()>,
}

impl TestHttpServer {
    pub async fn new(router: Router) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop, stopped) = oneshot::channel::<()>();
        let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
            // resolves with Err once the handle (and its sender) is dropped
            let _ = stopped.await;
        });
        tokio::spawn(serve.into_future());

        Self { addr, _stop: stop }
    }

    /// `host:port` of the listener, suitable for a media host setting.
    #[must_use]
    pub fn authority(&self) -> String {
        self.addr.to_string()
    }

    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }

    #[must_use]
    pub fn url(&self, path: &str) -> Url {
        self.base_url().join(path).unwrap()
    }
}
