//! Connector records and the metadata extracted for them.

use std::fmt;

use super::DirectoryEntry;

// =============================================================================
// Action Type
// =============================================================================

/// Coarse role classification of a connector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    Source,
    Sink,
    Swapper,
    PriceOracle,
    Flasher,
    #[default]
    Connector,
    /// Has a label but no detection heuristic
    #[allow(dead_code)]
    Utils,
}

impl ActionType {
    /// Identifier form (e.g., "PriceOracle").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Sink => "Sink",
            Self::Swapper => "Swapper",
            Self::PriceOracle => "PriceOracle",
            Self::Flasher => "Flasher",
            Self::Connector => "Connector",
            Self::Utils => "Utils",
        }
    }

    /// Human label used on badges and filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::PriceOracle => "Price Oracle",
            Self::Flasher => "Flash Loan",
            Self::Utils => "Utilities",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Category used when no filename keyword matches.
pub const DEFAULT_CATEGORY: &str = "General";

/// Display metadata derived from a file name and its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub action_type: ActionType,
    pub category: String,
    /// Insertion-ordered, duplicate-free.
    pub tags: Vec<String>,
}

impl Metadata {
    /// Append a tag unless it is already present.
    pub fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }
}

// =============================================================================
// Connector Record
// =============================================================================

/// A source file selected by the collector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorRecord {
    pub name: String,
    pub path: String,
    /// Browsable page on the hosting site
    pub url: String,
    pub size: u64,
    pub download_url: Option<String>,
    /// Attached by the enrichment pass
    pub metadata: Option<Metadata>,
}

impl From<DirectoryEntry> for ConnectorRecord {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            name: entry.name,
            path: entry.path,
            url: entry.html_url,
            size: entry.size,
            download_url: entry.download_url,
            metadata: None,
        }
    }
}
