//! Write-once manifest cache.
//!
//! Holds the last successfully fetched manifest for one fetcher instance.
//! Concurrent first calls are coalesced by `tokio::sync::OnceCell`: one caller
//! runs the fetch, the others wait for it. A failed fetch stores nothing, so
//! the next waiter (or the next call) retries.
//!
//! There is no eviction. The configured cache duration is reported through
//! [`ManifestCache::age`] but never enforced.

use std::future::Future;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::OnceCell;

use ddragon_core::model::ManifestDocument;
use ddragon_core::{DdragonError, DdragonResult};

struct CachedManifest<T> {
    doc: Arc<ManifestDocument<T>>,
    fetched_at: OffsetDateTime,
}

pub struct ManifestCache<T> {
    cell: OnceCell<CachedManifest<T>>,
    enabled: bool,
}

impl<T> ManifestCache<T> {
    /// With `enabled == false` every `get_or_fetch` runs the fetch.
    pub fn new(enabled: bool) -> Self {
        Self {
            cell: OnceCell::new(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the cached manifest, fetching it on first use.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> DdragonResult<Arc<ManifestDocument<T>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DdragonResult<ManifestDocument<T>>>,
    {
        if !self.enabled {
            return fetch().await.map(Arc::new);
        }

        let entry = self
            .cell
            .get_or_try_init(|| async move {
                let doc = fetch().await?;
                Ok::<_, DdragonError>(CachedManifest {
                    doc: Arc::new(doc),
                    fetched_at: OffsetDateTime::now_utc(),
                })
            })
            .await?;

        Ok(Arc::clone(&entry.doc))
    }

    /// Cached manifest without I/O.
    pub fn peek(&self) -> DdragonResult<Arc<ManifestDocument<T>>> {
        self.cell
            .get()
            .map(|e| Arc::clone(&e.doc))
            .ok_or_else(|| DdragonError::not_ready("manifest has not been fetched yet"))
    }

    pub fn is_cached(&self) -> bool {
        self.cell.initialized()
    }

    /// Time since the cached manifest was stored.
    pub fn age(&self) -> Option<time::Duration> {
        self.cell
            .get()
            .map(|e| OffsetDateTime::now_utc() - e.fetched_at)
    }
}
