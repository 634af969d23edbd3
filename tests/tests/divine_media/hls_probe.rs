use std::time::Duration;

use divine::{
    events::{Event, EventBus, MediaEvent},
    media::{DEFAULT_PROBE_TIMEOUT, HlsProbe, MediaHost},
    net::{HttpClient, NetOptions},
};
use divine_test_utils::{MediaServer, RunningMediaServer};
use rstest::rstest;

const READY: &str = "abc123";
const PENDING: &str = "def456";
const SLOW: &str = "fee789";

async fn media_server() -> RunningMediaServer {
    MediaServer::new()
        .ready(READY)
        .slow(SLOW, Duration::from_secs(2))
        .start()
        .await
}

fn probe(server: &RunningMediaServer, timeout: Duration) -> HlsProbe<HttpClient> {
    let host = MediaHost::new(server.authority()).with_scheme("http");
    let net = HttpClient::new(NetOptions::default()).unwrap();
    HlsProbe::new(net, host, timeout)
}

#[rstest]
#[case::transcoded(READY, true)]
#[case::not_transcoded(PENDING, false)]
#[tokio::test]
async fn probe_reflects_manifest_status(#[case] hash: &str, #[case] expected: bool) {
    let server = media_server().await;
    let probe = probe(&server, DEFAULT_PROBE_TIMEOUT);

    assert_eq!(
        probe.check_hls_available(&server.video_url(hash)).await,
        expected
    );
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn probe_gives_up_after_timeout() {
    let server = media_server().await;
    let probe = probe(&server, Duration::from_millis(200));

    let started = tokio::time::Instant::now();
    let available = probe.check_hls_available(&server.video_url(SLOW)).await;

    assert!(!available);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[rstest]
#[case::foreign_host("https://example.com/abc123")]
#[case::no_hash("https://media.divine.video/not-hex")]
#[tokio::test]
async fn unresolvable_urls_never_hit_the_network(#[case] url: &str) {
    let server = media_server().await;
    let probe = probe(&server, DEFAULT_PROBE_TIMEOUT);

    assert!(!probe.check_hls_available(url).await);
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn probe_publishes_outcome() {
    let server = media_server().await;
    let bus = EventBus::new(8);
    let mut rx = bus.subscribe();
    let probe = probe(&server, DEFAULT_PROBE_TIMEOUT).with_events(bus);

    probe.check_hls_available(&server.video_url(PENDING)).await;

    let Event::Media(MediaEvent::HlsProbed {
        manifest_url,
        available,
    }) = rx.recv().await.unwrap()
    else {
        panic!("expected a media event");
    };
    assert!(!available);
    assert!(manifest_url.ends_with(&format!("/{PENDING}/hls/master.m3u8")));
}
