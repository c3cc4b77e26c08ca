//! Edge-detecting watch loop.
//!
//! Holds the last-known status of the mount point and alerts on transitions
//! only. Repeated identical readings are suppressed, and a probe failure is
//! just an offline reading, so an unreachable server surfaces through the
//! regular offline alert.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::detector::{SourceStatus, StatusProbe};
use crate::notification::channels::NotificationChannel;
use crate::notification::events::NotificationEvent;

/// The polling loop for one mount point.
pub struct MountWatcher<P> {
    probe: P,
    channels: Vec<Arc<dyn NotificationChannel>>,
    mount_point: String,
    check_interval: Duration,
    last_status: Option<SourceStatus>,
}

impl<P: StatusProbe> MountWatcher<P> {
    /// Create a new watcher.
    pub fn new(
        probe: P,
        channels: Vec<Arc<dyn NotificationChannel>>,
        mount_point: String,
        check_interval: Duration,
    ) -> Self {
        Self {
            probe,
            channels,
            mount_point,
            check_interval,
            last_status: None,
        }
    }

    /// Run the watch loop. Runs until the process is terminated externally.
    pub async fn run(mut self) {
        self.startup().await;

        loop {
            tokio::time::sleep(self.check_interval).await;
            self.poll_once().await;
        }
    }

    /// First probe: establish the initial state and announce it.
    async fn startup(&mut self) {
        let status = self.probe.check_status(&self.mount_point).await;
        info!(mount = %self.mount_point, status = status.label(), "Initial status");

        self.dispatch(&NotificationEvent::MonitorStarted {
            mount: self.mount_point.clone(),
            online: status.is_online(),
            timestamp: Utc::now(),
        })
        .await;

        self.last_status = Some(status);
    }

    /// One poll cycle: probe, compare, alert on a change.
    async fn poll_once(&mut self) {
        let current = self.probe.check_status(&self.mount_point).await;

        if self.last_status == Some(current) {
            return;
        }

        let event = match current {
            SourceStatus::Online => {
                info!(mount = %self.mount_point, "Source connected");
                NotificationEvent::SourceOnline {
                    mount: self.mount_point.clone(),
                    timestamp: Utc::now(),
                }
            }
            SourceStatus::Offline => {
                info!(mount = %self.mount_point, "Source disconnected");
                NotificationEvent::SourceOffline {
                    mount: self.mount_point.clone(),
                    timestamp: Utc::now(),
                }
            }
        };

        self.dispatch(&event).await;
        self.last_status = Some(current);
    }

    /// Best-effort fan-out to every channel. A delivery failure is logged
    /// and never propagates into the loop.
    async fn dispatch(&self, event: &NotificationEvent) {
        for channel in &self.channels {
            if let Err(e) = channel.send(event).await {
                warn!(
                    channel = channel.channel_type(),
                    error = %e,
                    "Failed to deliver notification"
                );
            }
        }
    }
}
