//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Heading shown above the card grid when no filter hides any card.
pub const RESULTS_HEADING: &str = "Available Actions";

/// Message rendered into the grid when the walk found no source files.
pub const EMPTY_MESSAGE: &str = "No actions found.";

// =============================================================================
// GitHub Configuration
// =============================================================================

/// Remote repository endpoints.
pub mod github {
    /// Contents API root for the scanned repository.
    pub const API_BASE: &str = "https://api.github.com/repos/onflow/FlowActions/contents";

    /// Accept header sent with every contents API request.
    pub const ACCEPT: &str = "application/vnd.github.v3+json";
}

// =============================================================================
// Collection Configuration
// =============================================================================

/// Directory (relative to the repository root) the walk starts from.
pub const CONNECTORS_ROOT: &str = "cadence/contracts/connectors";

/// Extension of the files the collector keeps.
pub const SOURCE_EXTENSION: &str = ".cdc";

/// Metadata enrichment pacing.
pub mod enrich {
    /// Number of files fetched concurrently per batch.
    pub const BATCH_SIZE: usize = 5;
    /// Pause between two batches in milliseconds.
    pub const BATCH_PAUSE_MS: u32 = 100;
}

// =============================================================================
// Display Configuration
// =============================================================================

/// Card display limits.
pub mod display {
    /// Descriptions longer than this are truncated.
    pub const MAX_DESCRIPTION_LEN: usize = 200;
    /// Length of a truncated description (with "..." appended).
    pub const TRUNCATED_DESCRIPTION_LEN: usize = 197;
    /// Maximum number of tags rendered on a card.
    pub const MAX_CARD_TAGS: usize = 3;
}

/// Element identifiers the rendered page exposes.
pub mod dom_ids {
    pub const GRID: &str = "actions-grid";
    pub const LOADING: &str = "loading";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const FILTERS_CONTAINER: &str = "filters-container";
    pub const FILTERS_LIST: &str = "filters-list";
    pub const CLEAR_FILTERS: &str = "clear-filters";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
