//! Recursive collection of connector source files.

use leptos::logging::warn;

use super::source::RemoteSource;
use crate::config::SOURCE_EXTENSION;
use crate::core::error::FetchError;
use crate::models::{ConnectorRecord, DirectoryEntry};

/// Walk the tree under `root` and return every source file found.
///
/// The walk is depth-first and pre-order in listing order: a subdirectory's
/// files appear where the subdirectory was listed. Only a failure listing
/// `root` itself is returned; a subdirectory that cannot be listed is logged
/// and contributes nothing.
///
/// Uses an explicit stack of listing iterators instead of recursion.
pub async fn collect_connectors<S: RemoteSource>(
    source: &S,
    root: &str,
) -> Result<Vec<ConnectorRecord>, FetchError> {
    let mut records = Vec::new();
    let mut stack: Vec<std::vec::IntoIter<DirectoryEntry>> =
        vec![source.list_directory(root).await?.into_iter()];

    while let Some(listing) = stack.last_mut() {
        let Some(entry) = listing.next() else {
            stack.pop();
            continue;
        };

        if entry.is_file_with_extension(SOURCE_EXTENSION) {
            records.push(ConnectorRecord::from(entry));
        } else if entry.is_dir() {
            match source.list_directory(&entry.path).await {
                Ok(children) => stack.push(children.into_iter()),
                Err(e) => warn!("Error fetching from {}: {}", entry.path, e),
            }
        }
    }

    Ok(records)
}
