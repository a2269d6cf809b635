//! Batched metadata enrichment.
//!
//! Records are processed in fixed-size batches. Inside a batch all content
//! fetches are in flight at once; batches run one after another with a fixed
//! pause in between so the remote API is not flooded.

use std::future::Future;

use futures::future::join_all;
use leptos::logging::warn;

use super::extractor::extract_metadata;
use super::source::RemoteSource;
use crate::models::ConnectorRecord;

/// Attach metadata to every record.
///
/// Never fails: a record whose content cannot be fetched gets metadata
/// derived from its file name. `pause` is awaited between batches, not after
/// the last one.
pub async fn enrich_records<S, P, F>(
    source: &S,
    records: &mut [ConnectorRecord],
    batch_size: usize,
    mut pause: P,
) where
    S: RemoteSource,
    P: FnMut() -> F,
    F: Future<Output = ()>,
{
    let batch_size = batch_size.max(1);
    let batch_count = records.len().div_ceil(batch_size);

    for (index, batch) in records.chunks_mut(batch_size).enumerate() {
        // join_all keeps input order regardless of completion order
        let contents = join_all(batch.iter().map(|record| fetch_content(source, record))).await;

        for (record, content) in batch.iter_mut().zip(contents) {
            record.metadata = Some(extract_metadata(content.as_deref(), &record.name));
        }

        if index + 1 < batch_count {
            pause().await;
        }
    }
}

async fn fetch_content<S: RemoteSource>(source: &S, record: &ConnectorRecord) -> Option<String> {
    let url = record.download_url.as_deref()?;
    let content = source.fetch_text(url).await;
    if content.is_none() {
        warn!(
            "Failed to extract metadata for {}: content unavailable, using file name",
            record.name
        );
    }
    content
}
