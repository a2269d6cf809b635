//! Remote repository access seam.
//!
//! The collector, enrichment and pipeline only talk to a [`RemoteSource`],
//! so they run unchanged against the browser client
//! ([`GitHubClient`](crate::utils::GitHubClient)) and against the in-memory
//! fake used by tests.

use crate::core::error::FetchError;
use crate::models::DirectoryEntry;

/// Read access to a hosted source tree.
#[allow(async_fn_in_trait)]
pub trait RemoteSource {
    /// List the entries of a directory relative to the repository root.
    ///
    /// A directory that does not exist yields an empty listing.
    async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, FetchError>;

    /// Fetch raw file text, or `None` on any failure.
    async fn fetch_text(&self, url: &str) -> Option<String>;
}

#[cfg(test)]
pub mod fake {
    //! In-memory [`RemoteSource`] for tests.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::RemoteSource;
    use crate::core::error::FetchError;
    use crate::models::{DirectoryEntry, EntryType};

    pub fn file(dir: &str, name: &str) -> DirectoryEntry {
        let path = format!("{dir}/{name}");
        DirectoryEntry {
            name: name.to_string(),
            download_url: Some(format!("https://raw.example/{path}")),
            html_url: format!("https://github.example/{path}"),
            path,
            entry_type: EntryType::File,
            size: 128,
        }
    }

    pub fn dir(parent: &str, name: &str) -> DirectoryEntry {
        let path = format!("{parent}/{name}");
        DirectoryEntry {
            name: name.to_string(),
            html_url: format!("https://github.example/{path}"),
            path,
            entry_type: EntryType::Dir,
            size: 0,
            download_url: None,
        }
    }

    /// Directories missing from `dirs` behave like a 404.
    #[derive(Default)]
    pub struct MemorySource {
        pub dirs: HashMap<String, Result<Vec<DirectoryEntry>, FetchError>>,
        pub files: HashMap<String, String>,
        pub listed: RefCell<Vec<String>>,
        pub fetched: RefCell<Vec<String>>,
    }

    impl MemorySource {
        pub fn with_dir(mut self, path: &str, entries: Vec<DirectoryEntry>) -> Self {
            self.dirs.insert(path.to_string(), Ok(entries));
            self
        }

        pub fn with_failing_dir(mut self, path: &str, error: FetchError) -> Self {
            self.dirs.insert(path.to_string(), Err(error));
            self
        }

        /// Register content for the download URL of `entry`.
        pub fn with_content(mut self, entry: &DirectoryEntry, text: &str) -> Self {
            if let Some(url) = &entry.download_url {
                self.files.insert(url.clone(), text.to_string());
            }
            self
        }
    }

    impl RemoteSource for MemorySource {
        async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, FetchError> {
            self.listed.borrow_mut().push(path.to_string());
            self.dirs.get(path).cloned().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_text(&self, url: &str) -> Option<String> {
            self.fetched.borrow_mut().push(url.to_string());
            self.files.get(url).cloned()
        }
    }
}
