//! Resolve a diVine video URL for a simulated connection and probe its HLS manifest.
//!
//! ```
//! cargo run -p divine --example quality_probe [VIDEO_URL] [MBPS]
//! ```

use std::{env::args, error::Error, time::Duration};

use divine::prelude::*;
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::default()
                .add_directive("divine_abr=debug".parse()?)
                .add_directive("divine_media=debug".parse()?)
                .add_directive("divine_net=warn".parse()?)
                .add_directive(LevelFilter::INFO.into()),
        )
        .with_line_number(false)
        .with_file(false)
        .init();

    let video_url = args()
        .nth(1)
        .unwrap_or_else(|| "https://media.divine.video/abc123".to_string());
    let mbps: f64 = args().nth(2).map_or(Ok(1.0), |s| s.parse())?;

    let bus = EventBus::new(32);
    let mut events_rx = bus.subscribe();
    let selector = QualitySelector::new(DivineConfig::default().with_events(bus))?;

    // Simulate a few one-second loads at the requested speed.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = (mbps * 125_000.0).round() as u64;
    for _ in 0..3 {
        selector.record_load(bytes, Duration::from_secs(1));
    }

    let info = selector.info();
    info!(
        tier = %info.tier,
        mbps = info.mbps,
        samples = info.sample_count,
        "bandwidth estimate"
    );
    info!(url = %selector.optimal_video_url(&video_url, None), "selected stream");

    let available = selector.check_hls_available(&video_url).await;
    info!(available, "HLS availability");

    while let Ok(event) = events_rx.try_recv() {
        info!(?event, "event");
    }

    Ok(())
}
