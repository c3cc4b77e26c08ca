//! Icecast status document model.
//!
//! Everything of interest lives under the top-level `icestats` object. The
//! `source` field is the awkward part: Icecast emits an object when exactly
//! one source is connected, an array when several are, and omits the field
//! entirely when none are. [`IceStats::sources`] absorbs all three shapes so
//! callers only ever see a slice of records.

use serde::Deserialize;

/// The whole `status-json.xsl` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusDocument {
    #[serde(default)]
    pub icestats: IceStats,
}

impl StatusDocument {
    /// Decode a raw response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// The `icestats` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IceStats {
    /// `None` covers both an absent and an explicit-null `source` field.
    #[serde(default)]
    source: Option<SourceField>,
}

/// `source` as the server may emit it: one record or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SourceField {
    One(Source),
    Many(Vec<Source>),
}

impl IceStats {
    /// All connected sources, regardless of the shape the server emitted.
    pub fn sources(&self) -> &[Source] {
        match &self.source {
            Some(SourceField::One(source)) => std::slice::from_ref(source),
            Some(SourceField::Many(sources)) => sources,
            None => &[],
        }
    }

    /// Find the source feeding `mount`, if any.
    pub fn find_mount(&self, mount: &str) -> Option<&Source> {
        self.sources().iter().find(|s| s.matches_mount(mount))
    }

    /// Whether `mount` is currently fed by a connected source.
    pub fn mount_live(&self, mount: &str) -> bool {
        self.find_mount(mount).is_some()
    }
}

/// One connected source record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub listenurl: String,
    #[serde(default)]
    pub mount: String,
    /// Current listener count, when the server reports one.
    #[serde(default)]
    pub listeners: Option<u64>,
}

impl Source {
    /// Match this record against a configured mount point.
    ///
    /// Older servers only imply the mount through the `listenurl` suffix;
    /// newer ones carry an explicit `mount` field. A record matches when
    /// either does.
    pub fn matches_mount(&self, mount: &str) -> bool {
        if mount.is_empty() {
            return false;
        }
        self.listenurl.ends_with(mount) || self.mount == mount
    }
}
