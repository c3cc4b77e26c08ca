//! Process configuration.
//!
//! All settings come from environment variables; a `.env` file is honored
//! when present. Defaults match a containerized deployment where the
//! streaming server is reachable under the `icecast` hostname.

use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::notification::channels::TelegramConfig;
use crate::{Error, Result};

/// Default status endpoint.
pub const DEFAULT_STATUS_URL: &str = "http://icecast:8000/status-json.xsl";

/// Default mount point to watch.
pub const DEFAULT_MOUNT_POINT: &str = "/cantaguarico";

/// Default seconds between polls.
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 5;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Status endpoint of the streaming server.
    pub status_url: Url,
    /// Mount point whose liveness is watched.
    pub mount_point: String,
    /// Delay between two polls.
    pub check_interval: Duration,
    /// Per-request timeout for status polls.
    pub request_timeout: Duration,
    /// Telegram channel settings.
    pub telegram: TelegramConfig,
}

impl AppConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let raw_url =
            std::env::var("ICECAST_URL").unwrap_or_else(|_| DEFAULT_STATUS_URL.to_string());
        let status_url = Url::parse(&raw_url)
            .map_err(|e| Error::config(format!("invalid ICECAST_URL '{}': {}", raw_url, e)))?;

        let mount_point =
            std::env::var("MOUNT_POINT").unwrap_or_else(|_| DEFAULT_MOUNT_POINT.to_string());
        if mount_point.is_empty() {
            return Err(Error::config("MOUNT_POINT must not be empty"));
        }

        let check_interval = parse_check_interval(std::env::var("CHECK_INTERVAL").ok().as_deref());

        let telegram = TelegramConfig {
            enabled: true,
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            chat_id: std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            ..TelegramConfig::default()
        };

        Ok(Self {
            status_url,
            mount_point,
            check_interval,
            request_timeout: icecast_status::DEFAULT_TIMEOUT,
            telegram,
        })
    }
}

/// Parse the poll interval, falling back to the default on bad input.
fn parse_check_interval(raw: Option<&str>) -> Duration {
    match raw {
        None => Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    value = %raw,
                    default_secs = DEFAULT_CHECK_INTERVAL_SECS,
                    "Invalid CHECK_INTERVAL; using default"
                );
                Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_defaults_when_unset() {
        assert_eq!(
            parse_check_interval(None),
            Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS)
        );
    }

    #[test]
    fn interval_parses_seconds() {
        assert_eq!(parse_check_interval(Some("30")), Duration::from_secs(30));
    }

    #[test]
    fn interval_rejects_garbage_and_zero() {
        assert_eq!(
            parse_check_interval(Some("soon")),
            Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS)
        );
        assert_eq!(
            parse_check_interval(Some("0")),
            Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS)
        );
    }

    #[test]
    fn default_status_url_parses() {
        assert!(Url::parse(DEFAULT_STATUS_URL).is_ok());
    }
}
