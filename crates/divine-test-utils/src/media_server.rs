//! Fake media host serving HLS master manifests.

use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::TestHttpServer;

const MASTER_PLAYLIST: &str = "#EXTM3U\n\
#EXT-X-STREAM-INF:BANDWIDTH=1400000,RESOLUTION=854x480\n\
stream_480p.m3u8\n\
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1280x720\n\
stream_720p.m3u8\n";

#[derive(Default)]
struct Catalog {
    ready: HashSet<String>,
    slow: HashSet<String>,
    delay: Duration,
    hits: AtomicUsize,
}

/// Builder and handle for a local media host.
///
/// Hashes registered with [`MediaServer::ready`] answer their master manifest
/// with 200; hashes registered with [`MediaServer::slow`] answer only after
/// the configured delay. Everything else is 404.
#[derive(Default)]
pub struct MediaServer {
    catalog: Catalog,
}

/// A running [`MediaServer`].
pub struct RunningMediaServer {
    server: TestHttpServer,
    catalog: Arc<Catalog>,
}

impl MediaServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ready(mut self, hash: &str) -> Self {
        self.catalog.ready.insert(hash.to_string());
        self
    }

    #[must_use]
    pub fn slow(mut self, hash: &str, delay: Duration) -> Self {
        self.catalog.slow.insert(hash.to_string());
        self.catalog.delay = delay;
        self
    }

    pub async fn start(self) -> RunningMediaServer {
        let catalog = Arc::new(self.catalog);
        let router = Router::new()
            .route("/{hash}/hls/master.m3u8", get(master_playlist))
            .with_state(Arc::clone(&catalog));
        RunningMediaServer {
            server: TestHttpServer::new(router).await,
            catalog,
        }
    }
}

impl RunningMediaServer {
    /// `host:port` to configure as the media host.
    #[must_use]
    pub fn authority(&self) -> String {
        self.server.authority()
    }

    /// Direct video URL for `hash` on this server.
    #[must_use]
    pub fn video_url(&self, hash: &str) -> String {
        self.server.url(hash).to_string()
    }

    /// Manifest requests served so far, any status.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.catalog.hits.load(Ordering::SeqCst)
    }
}

async fn master_playlist(
    State(catalog): State<Arc<Catalog>>,
    Path(hash): Path<String>,
) -> impl IntoResponse {
    catalog.hits.fetch_add(1, Ordering::SeqCst);

    if catalog.slow.contains(&hash) {
        tokio::time::sleep(catalog.delay).await;
    } else if !catalog.ready.contains(&hash) {
        return (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "text/plain")], "");
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/vnd.apple.mpegurl")],
        MASTER_PLAYLIST,
    )
}
