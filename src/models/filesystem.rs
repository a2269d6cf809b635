use serde::{Deserialize, Serialize};

// =============================================================================
// Directory Listing
// =============================================================================

/// Kind of an entry in a contents API listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    /// Symlinks, submodules and anything newer the API may add.
    #[serde(other)]
    Other,
}

/// One item of a directory listing, as returned by the contents API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// File or directory name (e.g., "FungibleTokenConnectors.cdc")
    pub name: String,
    /// Path from the repository root
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Size in bytes (0 for directories)
    #[serde(default)]
    pub size: u64,
    /// Raw content URL (None for directories)
    #[serde(default)]
    pub download_url: Option<String>,
    /// Browsable page for the entry
    #[serde(default)]
    pub html_url: String,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// Whether this is a regular file whose name ends with `extension`.
    pub fn is_file_with_extension(&self, extension: &str) -> bool {
        self.entry_type == EntryType::File && self.name.ends_with(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {
                "name": "FungibleTokenConnectors.cdc",
                "path": "cadence/contracts/connectors/FungibleTokenConnectors.cdc",
                "sha": "abc",
                "size": 4096,
                "url": "https://api.github.com/x",
                "html_url": "https://github.com/onflow/FlowActions/blob/main/x.cdc",
                "git_url": "https://api.github.com/git/x",
                "download_url": "https://raw.githubusercontent.com/x.cdc",
                "type": "file"
            },
            {
                "name": "evm",
                "path": "cadence/contracts/connectors/evm",
                "size": 0,
                "html_url": "https://github.com/onflow/FlowActions/tree/main/evm",
                "download_url": null,
                "type": "dir"
            },
            {
                "name": "vendored",
                "path": "cadence/contracts/connectors/vendored",
                "type": "submodule"
            }
        ]"#;

        let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_file_with_extension(".cdc"));
        assert_eq!(entries[0].size, 4096);
        assert!(entries[1].is_dir());
        assert_eq!(entries[1].download_url, None);
        assert_eq!(entries[2].entry_type, EntryType::Other);
        assert!(!entries[2].is_file_with_extension(".cdc"));
    }

    #[test]
    fn test_extension_requires_file() {
        let entry = DirectoryEntry {
            name: "weird.cdc".to_string(),
            path: "weird.cdc".to_string(),
            entry_type: EntryType::Dir,
            size: 0,
            download_url: None,
            html_url: String::new(),
        };
        assert!(!entry.is_file_with_extension(".cdc"));
    }
}
