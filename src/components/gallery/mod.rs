//! Action gallery UI components.
//!
//! Components:
//! - [`Gallery`] - Page body: heading, filters, status messages and card grid
//! - [`FilterBar`] - Action type toggles with a clear button
//! - [`ActionCard`] - One connector card

mod card;
mod filters;
#[allow(clippy::module_inception)]
mod gallery;

pub use card::ActionCard;
pub use filters::FilterBar;
pub use gallery::Gallery;
