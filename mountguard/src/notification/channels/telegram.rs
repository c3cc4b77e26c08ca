//! Telegram Bot API notification channel.
//!
//! Sends messages via the Telegram Bot API (`POST /bot<token>/sendMessage`).
//! Delivery is fire and forget: a failed send surfaces as an error to the
//! caller and is never retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::NotificationChannel;
use crate::Result;
use crate::notification::events::NotificationEvent;

/// Telegram `sendMessage` text limit (UTF-8 characters).
const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Token values still carrying the setup placeholder count as unset.
const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Telegram channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Whether the channel is enabled.
    pub enabled: bool,
    /// Telegram Bot API token.
    pub bot_token: String,
    /// Target chat ID (user, group, or channel).
    pub chat_id: String,
    /// Parse mode for message formatting (HTML, Markdown, MarkdownV2).
    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,
}

fn default_parse_mode() -> String {
    "Markdown".to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_token: String::new(),
            chat_id: String::new(),
            parse_mode: default_parse_mode(),
        }
    }
}

/// Telegram notification channel.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: Client,
}

impl TelegramChannel {
    /// Create a new Telegram channel.
    pub fn new(config: TelegramConfig) -> Self {
        crate::utils::http_client::install_rustls_provider();
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the message text for an event.
    fn build_message(&self, event: &NotificationEvent) -> String {
        let title = event.title();
        let description = event.description();
        let priority = event.priority();
        let event_type = event.event_type();

        let text = if self.config.parse_mode == "HTML" {
            format!("<b>{title}</b>\n\n{description}\n\n<i>Priority: {priority} | Type: {event_type}</i>")
        } else {
            format!("*{title}*\n\n{description}\n\n_Priority: {priority} | Type: {event_type}_")
        };

        truncate_message(&text, TELEGRAM_MESSAGE_LIMIT)
    }

    async fn send_message(&self, payload: &serde_json::Value) -> Result<()> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| crate::Error::Other(format!("Telegram request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(crate::Error::Other(format!(
            "Telegram sendMessage failed: {} - {}",
            status, body
        )))
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn channel_type(&self) -> &'static str {
        "telegram"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
            && !self.config.bot_token.is_empty()
            && !self.config.chat_id.is_empty()
            && !self.config.bot_token.contains(PLACEHOLDER_MARKER)
    }

    async fn send(&self, event: &NotificationEvent) -> Result<()> {
        if !self.is_enabled() {
            warn!("Telegram credentials not set or invalid; skipping alert");
            return Ok(());
        }

        let text = self.build_message(event);
        let payload = json!({
            "chat_id": self.config.chat_id,
            "text": text,
            "parse_mode": self.config.parse_mode,
        });

        self.send_message(&payload).await?;

        debug!("Telegram notification sent: {}", event.event_type());
        Ok(())
    }

    async fn test(&self) -> Result<()> {
        let test_event = NotificationEvent::MonitorStarted {
            mount: "/test".to_string(),
            online: false,
            timestamp: chrono::Utc::now(),
        };
        self.send(&test_event).await
    }
}

/// Truncate a message to fit within the Telegram character limit.
fn truncate_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let suffix = "\n\n[truncated]";
    let budget = limit - suffix.len();
    let truncated: String = text.chars().take(budget).collect();
    format!("{truncated}{suffix}")
}
