//! Card filtering by action type.
//!
//! [`FilterState`] is a plain value; the UI owns the only mutable copy and
//! recomputes visibility with [`apply_filters`] after every change.

use std::collections::BTreeSet;

use super::gallery::CardView;
use crate::config::RESULTS_HEADING;

/// Set of active type labels. Empty means "show everything".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a label. Returns `true` if the label is now active.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.active.remove(label) {
            false
        } else {
            self.active.insert(label.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}

/// Visibility of each card after filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per card, in card order
    pub visible: Vec<bool>,
    pub visible_count: usize,
    pub total: usize,
}

impl FilterOutcome {
    /// Heading text reflecting the counts.
    pub fn heading(&self) -> String {
        results_heading(self.visible_count, self.total)
    }
}

/// Decide which cards are shown for a filter state.
///
/// With no active label every card is visible; otherwise a card is visible
/// exactly when its type label is active.
pub fn apply_filters(state: &FilterState, cards: &[CardView]) -> FilterOutcome {
    let visible: Vec<bool> = cards
        .iter()
        .map(|card| state.is_empty() || state.is_active(&card.type_label))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    FilterOutcome {
        visible,
        visible_count,
        total: cards.len(),
    }
}

/// "Available Actions", or "Available Actions (3 of 10)" while filtered.
pub fn results_heading(visible: usize, total: usize) -> String {
    if visible == total {
        RESULTS_HEADING.to_string()
    } else {
        format!("{RESULTS_HEADING} ({visible} of {total})")
    }
}
