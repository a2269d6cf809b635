//! Gallery view model.
//!
//! Everything the card grid needs is computed here, without touching the
//! DOM: record ordering, the filter labels and the per-card display fields.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::title::format_title;
use crate::config::display;
use crate::models::{ActionType, ConnectorRecord, DEFAULT_CATEGORY};
use crate::utils::format::format_size;

/// Display fields of one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub path: String,
    /// Compact file size (e.g., "4.1K")
    pub size: String,
    /// Badge text, also the value filters match against
    pub type_label: String,
    pub description: String,
    /// At most [`display::MAX_CARD_TAGS`], category first
    pub tags: Vec<String>,
    /// Hosted file page
    pub url: String,
}

/// Sorted cards plus the labels offered as filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub cards: Vec<CardView>,
    pub action_types: Vec<String>,
}

impl GalleryView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Locale-style string ordering: case-insensitive first, lowercase before
/// uppercase on ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn sort_key(record: &ConnectorRecord) -> (&str, &str) {
    match &record.metadata {
        Some(meta) => (meta.category.as_str(), meta.title.as_str()),
        None => ("", record.name.as_str()),
    }
}

/// Order records by category, then by title (or file name when unenriched).
pub fn sort_records(records: &mut [ConnectorRecord]) {
    records.sort_by(|a, b| {
        let (cat_a, title_a) = sort_key(a);
        let (cat_b, title_b) = sort_key(b);
        locale_cmp(cat_a, cat_b).then_with(|| locale_cmp(title_a, title_b))
    });
}

fn action_type_of(record: &ConnectorRecord) -> ActionType {
    record
        .metadata
        .as_ref()
        .map(|m| m.action_type)
        .unwrap_or_default()
}

/// Distinct display labels of the records' action types, sorted.
pub fn action_type_labels(records: &[ConnectorRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| action_type_of(r).label().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Cut long descriptions down to a fixed length with an ellipsis.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > display::MAX_DESCRIPTION_LEN {
        let kept: String = text.chars().take(display::TRUNCATED_DESCRIPTION_LEN).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// Category followed by the extracted tags, without duplicates.
fn card_tags(category: &str, tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(display::MAX_CARD_TAGS);
    for tag in std::iter::once(category).chain(tags.iter().map(String::as_str)) {
        if out.len() == display::MAX_CARD_TAGS {
            break;
        }
        if !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

pub fn build_card(record: &ConnectorRecord) -> CardView {
    let meta = record.metadata.as_ref();

    let title = meta
        .map(|m| m.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format_title(&record.name));
    let description = meta
        .map(|m| m.description.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Flow Action connector for {title}"));
    let category = meta
        .map(|m| m.category.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY);
    let tags = card_tags(category, meta.map(|m| m.tags.as_slice()).unwrap_or_default());

    CardView {
        path: record.path.clone(),
        size: format_size(record.size),
        type_label: action_type_of(record).label().to_string(),
        description: truncate_description(&description),
        tags,
        url: record.url.clone(),
        title,
    }
}

/// Sort the records and derive the whole gallery from them.
pub fn build_gallery(mut records: Vec<ConnectorRecord>) -> GalleryView {
    sort_records(&mut records);
    GalleryView {
        action_types: action_type_labels(&records),
        cards: records.iter().map(build_card).collect(),
    }
}
