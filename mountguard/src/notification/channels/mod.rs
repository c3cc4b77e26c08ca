//! Notification channels.
//!
//! One delivery transport per channel implementation. Only the Telegram Bot
//! API channel is wired in; the trait keeps the seam open for others.

mod telegram;

pub use telegram::{TelegramChannel, TelegramConfig};

use async_trait::async_trait;

use super::events::NotificationEvent;
use crate::Result;

/// Trait for notification channels.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Get the channel type name.
    fn channel_type(&self) -> &'static str;

    /// Check if the channel is enabled.
    fn is_enabled(&self) -> bool;

    /// Send a notification through this channel.
    async fn send(&self, event: &NotificationEvent) -> Result<()>;

    /// Test the channel configuration.
    async fn test(&self) -> Result<()>;
}
