//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`GitHubClient`] - Contents API client implementing [`RemoteSource`](crate::core::RemoteSource)
//! - [`dom`] - Window helpers and event-loop delays
//! - [`format`] - Display formatting

pub mod dom;
mod fetch;
pub mod format;
mod github;

pub use github::GitHubClient;
