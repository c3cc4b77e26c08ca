//! Mount-point liveness monitoring.
//!
//! The monitor is responsible for:
//! - Probing the status endpoint for the watched mount point
//! - Collapsing probe failures into an offline reading
//! - Edge detection: alerting on state changes only

mod detector;
mod watcher;

pub use detector::{SourceDetector, SourceStatus, StatusProbe};
pub use watcher::MountWatcher;
