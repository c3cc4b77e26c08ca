//! Mount-point status detection.

use async_trait::async_trait;
use icecast_status::StatusClient;
use tracing::{debug, error};

/// Liveness of the watched mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    /// A source is connected to the mount point.
    Online,
    /// The source is disconnected, or the server could not be reached.
    Offline,
}

impl SourceStatus {
    /// Check if the status indicates a connected source.
    pub fn is_online(&self) -> bool {
        matches!(self, SourceStatus::Online)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

/// Source of status readings for the watch loop.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Take one status reading. Never fails: transport and decode problems
    /// collapse to [`SourceStatus::Offline`].
    async fn check_status(&self, mount: &str) -> SourceStatus;
}

/// Probes an Icecast status endpoint for a mount point.
pub struct SourceDetector {
    client: StatusClient,
}

impl SourceDetector {
    /// Create a new detector around a status client.
    pub fn new(client: StatusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusProbe for SourceDetector {
    async fn check_status(&self, mount: &str) -> SourceStatus {
        match self.client.fetch_status().await {
            Ok(stats) => match stats.find_mount(mount) {
                Some(source) => {
                    debug!(
                        mount = %mount,
                        listeners = ?source.listeners,
                        "Mount point has a connected source"
                    );
                    SourceStatus::Online
                }
                None => {
                    debug!(
                        mount = %mount,
                        sources = stats.sources().len(),
                        "Mount point absent from status document"
                    );
                    SourceStatus::Offline
                }
            },
            Err(e) => {
                // An unreachable server and an absent mount are deliberately
                // the same reading; the next poll corrects it.
                error!(error = %e, "Error checking Icecast status");
                SourceStatus::Offline
            }
        }
    }
}
