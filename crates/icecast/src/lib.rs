//! Client library for the Icecast `status-json.xsl` endpoint.
//!
//! Icecast publishes its connected sources through a single JSON document
//! whose shape varies with the number of sources and the server version.
//! This crate normalizes that document and answers the one question a
//! liveness monitor cares about: is a given mount point currently fed by a
//! connected source?

pub mod client;
pub mod error;
pub mod status;

pub use client::{DEFAULT_TIMEOUT, StatusClient, default_client};
pub use error::StatusError;
pub use status::{IceStats, Source, StatusDocument};
