use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use divine::abr::{BandwidthTier, BandwidthTracker, ResourceTiming, TrackerOptions};
use divine_test_utils::{LoadGenerator, bytes_for_mbps};
use rstest::rstest;

fn tracker() -> BandwidthTracker {
    BandwidthTracker::new(TrackerOptions::default())
}

#[rstest]
#[case::low(0.5, 1.8, BandwidthTier::Low)]
#[case::medium(2.1, 4.9, BandwidthTier::Medium)]
#[case::high(5.5, 40.0, BandwidthTier::High)]
fn steady_rate_settles_on_its_tier(
    #[case] min_mbps: f64,
    #[case] max_mbps: f64,
    #[case] expected: BandwidthTier,
) {
    let tracker = tracker();
    let mut loads = LoadGenerator::new(0xd1_e5);

    for _ in 0..50 {
        let (bytes, time) = loads.load_between(min_mbps, max_mbps);
        tracker.record_load(bytes, time);
        if tracker.sample_count() >= 2 {
            assert_eq!(tracker.tier(), expected);
        }
    }
    assert_eq!(tracker.sample_count(), 10);
    let mbps = tracker.bandwidth_mbps();
    assert!((min_mbps..max_mbps).contains(&mbps), "{mbps}");
}

#[test]
fn listeners_see_each_transition_once() {
    let tracker = tracker();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = tracker.subscribe(move |tier| sink.lock().unwrap().push(tier));

    let second = Duration::from_secs(1);
    for mbps in [1.0, 1.0, 1.0] {
        tracker.record_load(bytes_for_mbps(mbps, second), second);
    }
    for _ in 0..10 {
        tracker.record_load(bytes_for_mbps(12.0, second), second);
    }

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&BandwidthTier::Low));
    assert_eq!(seen.last(), Some(&BandwidthTier::High));
    assert!(seen.windows(2).all(|pair| pair[0] != pair[1]));
}

#[test]
fn noise_never_counts() {
    let tracker = tracker();

    assert!(!tracker.record_load(5_000, Duration::from_secs(1)));
    assert!(!tracker.record_load(500_000, Duration::from_millis(10)));
    assert!(!tracker.record_load(500_000, Duration::from_secs(45)));

    assert_eq!(tracker.sample_count(), 0);
    assert_eq!(tracker.tier(), BandwidthTier::Medium);
}

#[test]
fn resource_timing_picks_the_playing_video() {
    let tracker = tracker();
    let entries = [
        ResourceTiming {
            name: "https://media.divine.video/aaaa/thumb.jpg".into(),
            transfer_size: 30_000,
            request_start: 0.0,
            response_end: 10_000.0,
            ..ResourceTiming::default()
        },
        ResourceTiming {
            name: "https://media.divine.video/bbbb".into(),
            transfer_size: 1_250_000,
            encoded_body_size: 1_200_000,
            request_start: 100.0,
            response_end: 1_100.0,
        },
    ];

    assert!(tracker.record_video_load(&entries, "https://media.divine.video/bbbb"));
    assert!(tracker.record_video_load(&entries, "https://media.divine.video/bbbb"));
    assert!(!tracker.record_video_load(&entries, "https://media.divine.video/cccc"));

    // 1.25 MB in one second.
    assert_eq!(tracker.tier(), BandwidthTier::High);
    assert!((tracker.bandwidth_mbps() - 10.0).abs() < 1e-9);
}

#[test]
fn clones_share_state() {
    let tracker = tracker();
    let handle = tracker.clone();
    let second = Duration::from_secs(1);

    handle.record_load(bytes_for_mbps(0.8, second), second);
    handle.record_load(bytes_for_mbps(0.8, second), second);

    assert_eq!(tracker.tier(), BandwidthTier::Low);
    assert_eq!(tracker.info(), handle.info());
}
