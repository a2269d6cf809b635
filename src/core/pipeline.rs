//! One render pass: collect, enrich, build the view model.

use std::future::Future;

use leptos::logging::log;

use super::collector::collect_connectors;
use super::enrich::enrich_records;
use super::gallery::{GalleryView, build_gallery};
use super::source::RemoteSource;
use crate::config::enrich;
use crate::core::error::FetchError;

/// Load the gallery for everything under `root`.
///
/// Only a failure listing `root` is returned; everything below it degrades
/// per subtree or per file. An empty tree yields an empty view.
pub async fn load_gallery<S, P, F>(source: &S, root: &str, pause: P) -> Result<GalleryView, FetchError>
where
    S: RemoteSource,
    P: FnMut() -> F,
    F: Future<Output = ()>,
{
    let mut records = collect_connectors(source, root).await?;
    if records.is_empty() {
        log!("No connector files found under {}", root);
        return Ok(GalleryView::default());
    }

    log!("Collected {} connector files, extracting metadata", records.len());
    enrich_records(source, &mut records, enrich::BATCH_SIZE, pause).await;

    Ok(build_gallery(records))
}
