//! Notification events.
//!
//! Defines the events that can trigger notifications and their priority
//! levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NotificationPriority {
    /// Low priority - informational only.
    Low,
    /// Normal priority - standard notifications.
    Normal,
    /// High priority - important events.
    High,
}

impl Default for NotificationPriority {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Events that can trigger notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// Monitor process started; reports the first observed state.
    MonitorStarted {
        mount: String,
        online: bool,
        timestamp: DateTime<Utc>,
    },
    /// A source connected to the watched mount point.
    SourceOnline {
        mount: String,
        timestamp: DateTime<Utc>,
    },
    /// The source disconnected from the watched mount point.
    SourceOffline {
        mount: String,
        timestamp: DateTime<Utc>,
    },
}

impl NotificationEvent {
    /// Get the priority of this event.
    pub fn priority(&self) -> NotificationPriority {
        match self {
            Self::MonitorStarted { .. } => NotificationPriority::Low,
            Self::SourceOnline { .. } => NotificationPriority::Normal,
            Self::SourceOffline { .. } => NotificationPriority::High,
        }
    }

    /// Get the event type as a string.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MonitorStarted { .. } => "monitor_started",
            Self::SourceOnline { .. } => "source_online",
            Self::SourceOffline { .. } => "source_offline",
        }
    }

    /// Get a human-readable title for this event.
    pub fn title(&self) -> String {
        match self {
            Self::MonitorStarted { online, .. } => {
                let state = if *online { "ONLINE" } else { "OFFLINE" };
                format!("🤖 Monitor started, current state: {}", state)
            }
            Self::SourceOnline { mount, .. } => {
                format!("🟢 {} is online", mount)
            }
            Self::SourceOffline { mount, .. } => {
                format!("🔴 {} is offline", mount)
            }
        }
    }

    /// Get a detailed description of this event.
    pub fn description(&self) -> String {
        match self {
            Self::MonitorStarted { mount, online, .. } => {
                let state = if *online { "broadcasting" } else { "silent" };
                format!("Watching mount point {}; the source is currently {}.", mount, state)
            }
            Self::SourceOnline { mount, .. } => {
                format!("The source feeding {} has connected.", mount)
            }
            Self::SourceOffline { mount, .. } => {
                format!("The source feeding {} has disconnected.", mount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_event() -> NotificationEvent {
        NotificationEvent::SourceOnline {
            mount: "/cantaguarico".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn event_types_are_stable() {
        let started = NotificationEvent::MonitorStarted {
            mount: "/cantaguarico".to_string(),
            online: false,
            timestamp: Utc::now(),
        };
        assert_eq!(started.event_type(), "monitor_started");
        assert_eq!(online_event().event_type(), "source_online");
    }

    #[test]
    fn priority_ordering() {
        assert!(NotificationPriority::Low < NotificationPriority::Normal);
        assert!(NotificationPriority::Normal < NotificationPriority::High);
    }

    #[test]
    fn startup_title_reports_observed_state() {
        let started = NotificationEvent::MonitorStarted {
            mount: "/cantaguarico".to_string(),
            online: false,
            timestamp: Utc::now(),
        };
        assert!(started.title().contains("OFFLINE"));
        assert!(started.description().contains("/cantaguarico"));
    }

    #[test]
    fn transition_titles_name_the_mount() {
        assert!(online_event().title().contains("/cantaguarico"));
    }
}
