//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`EntryType`] - Contents API listing items
//! - [`ConnectorRecord`], [`Metadata`], [`ActionType`] - Collected connectors and their display metadata

mod connector;
mod filesystem;

pub use connector::{ActionType, ConnectorRecord, DEFAULT_CATEGORY, Metadata};
pub use filesystem::{DirectoryEntry, EntryType};
