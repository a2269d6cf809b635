//! Core logic of the gallery, independent of the DOM.
//!
//! This module provides:
//! - [`RemoteSource`] - the seam to the hosted source tree
//! - `collector` and `enrich` - the fetch side
//! - `extractor` and `title` - text heuristics
//! - [`GalleryView`] and [`apply_filters`] - the pure view model
//! - [`load_gallery`] - one complete render pass

mod collector;
mod enrich;
pub mod error;
mod extractor;
mod filters;
mod gallery;
mod pipeline;
mod source;
mod title;

pub use filters::{FilterOutcome, FilterState, apply_filters};
pub use gallery::{CardView, GalleryView};
pub use pipeline::load_gallery;
pub use source::RemoteSource;
