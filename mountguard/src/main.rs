use std::sync::Arc;

use mountguard::config::AppConfig;
use mountguard::logging;
use mountguard::monitor::{MountWatcher, SourceDetector};
use mountguard::notification::channels::{NotificationChannel, TelegramChannel};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init()?;

    let config = AppConfig::from_env()?;
    info!(
        mount = %config.mount_point,
        endpoint = %config.status_url,
        interval_secs = config.check_interval.as_secs(),
        "Starting source monitor"
    );

    let client = icecast_status::default_client(config.request_timeout);
    let status_client = icecast_status::StatusClient::new(config.status_url.clone(), client);
    let detector = SourceDetector::new(status_client);

    let telegram = TelegramChannel::new(config.telegram.clone());
    if !telegram.is_enabled() {
        warn!("Telegram credentials not set or invalid; alerts will be skipped");
    }
    let channels: Vec<Arc<dyn NotificationChannel>> = vec![Arc::new(telegram)];

    MountWatcher::new(detector, channels, config.mount_point, config.check_interval)
        .run()
        .await;

    Ok(())
}
