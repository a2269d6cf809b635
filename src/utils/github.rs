//! GitHub contents API client.

use leptos::logging::warn;

use super::fetch::{fetch_content, fetch_response, read_text};
use crate::config::github;
use crate::core::error::FetchError;
use crate::core::RemoteSource;
use crate::models::DirectoryEntry;

/// How a listing response should be treated.
#[derive(Debug, PartialEq, Eq)]
enum ListingStatus {
    /// 2xx: parse the body
    Found,
    /// 404: the directory does not exist, treat as empty
    Missing,
}

fn check_listing_status(status: u16, status_text: &str) -> Result<ListingStatus, FetchError> {
    match status {
        200..=299 => Ok(ListingStatus::Found),
        404 => Ok(ListingStatus::Missing),
        _ => Err(FetchError::RemoteApi {
            status,
            status_text: status_text.to_string(),
        }),
    }
}

/// Parse a contents API directory listing.
pub fn parse_listing(body: &str) -> Result<Vec<DirectoryEntry>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParse(e.to_string()))
}

/// Browser client for one repository's contents API.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Listing endpoint for a path relative to the repository root.
    pub fn listing_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(github::API_BASE)
    }
}

impl RemoteSource for GitHubClient {
    async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, FetchError> {
        let resp = fetch_response(&self.listing_url(path), Some(github::ACCEPT))
            .await
            .inspect_err(|e| {
                if let FetchError::Network(detail) = e {
                    warn!("Request for {} failed: {}", path, detail);
                }
            })?;

        match check_listing_status(resp.status(), &resp.status_text())? {
            ListingStatus::Missing => Ok(Vec::new()),
            ListingStatus::Found => parse_listing(&read_text(&resp).await?),
        }
    }

    async fn fetch_text(&self, url: &str) -> Option<String> {
        match fetch_content(url).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Error fetching file content from {}: {}", url, e);
                None
            }
        }
    }
}
