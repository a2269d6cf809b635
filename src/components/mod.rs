//! UI components built with Leptos.
//!
//! - [`gallery`] - Card gallery, filter bar and cards
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;

pub use gallery::Gallery;
