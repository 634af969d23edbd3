use std::time::Duration;

use divine::{
    BandwidthTier, DivineConfig, MediaHost, QualitySelector, StreamQuality,
    events::{BandwidthEvent, Event, EventBus},
};
use divine_test_utils::{MediaServer, RunningMediaServer, bytes_for_mbps};

const HASH: &str = "0badc0de";

async fn setup(events: Option<EventBus>) -> (RunningMediaServer, QualitySelector) {
    let server = MediaServer::new().ready(HASH).start().await;
    let mut config = DivineConfig::default()
        .with_media_host(MediaHost::new(server.authority()).with_scheme("http"));
    if let Some(bus) = events {
        config = config.with_events(bus);
    }
    let selector = QualitySelector::new(config).unwrap();
    (server, selector)
}

fn feed(selector: &QualitySelector, mbps: f64, count: usize) {
    let load_time = Duration::from_secs(1);
    for _ in 0..count {
        assert!(selector.record_load(bytes_for_mbps(mbps, load_time), load_time));
    }
}

#[tokio::test]
async fn slow_connection_gets_480p_and_recovers_to_adaptive() {
    let (server, selector) = setup(None).await;
    let video = server.video_url(HASH);

    feed(&selector, 1.0, 2);
    assert_eq!(selector.tier(), BandwidthTier::Low);
    assert!(
        selector
            .optimal_video_url(&video, None)
            .ends_with("/hls/stream_480p.m3u8")
    );

    // Ten fast loads push every slow sample out of the window.
    feed(&selector, 20.0, 10);
    assert_eq!(selector.tier(), BandwidthTier::High);
    let url = selector.optimal_video_url(&video, None);
    assert!(url.ends_with("/hls/master.m3u8"));
    assert!(selector.check_hls_available(&video).await);
}

#[tokio::test]
async fn forced_quality_overrides_tier() {
    let (server, selector) = setup(None).await;
    let video = server.video_url(HASH);

    feed(&selector, 1.0, 3);

    assert!(
        selector
            .optimal_video_url(&video, Some(StreamQuality::P720))
            .ends_with("/hls/stream_720p.m3u8")
    );
    assert_eq!(
        selector.optimal_video_url(&video, Some(StreamQuality::Original)),
        video
    );
}

#[tokio::test]
async fn tier_changes_flow_to_listeners_and_bus() {
    let bus = EventBus::new(16);
    let mut rx = bus.subscribe();
    let (_server, selector) = setup(Some(bus)).await;

    let (tx, mut seen) = tokio::sync::mpsc::unbounded_channel();
    let _sub = selector.subscribe(move |tier| {
        let _ = tx.send(tier);
    });

    feed(&selector, 1.0, 2);
    feed(&selector, 30.0, 10);

    assert_eq!(seen.recv().await, Some(BandwidthTier::Low));

    let mut tiers = Vec::new();
    while let Ok(Event::Bandwidth(BandwidthEvent::TierChanged { tier, .. })) = rx.try_recv() {
        tiers.push(tier);
    }
    assert_eq!(tiers.first(), Some(&BandwidthTier::Low));
    assert_eq!(tiers.last(), Some(&BandwidthTier::High));
}
