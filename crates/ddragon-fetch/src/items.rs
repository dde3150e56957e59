//! Item fetcher.
//!
//! Items have no per-entity CDN document, so everything here is served from
//! the item manifest.

use std::sync::Arc;

use tracing::{debug, info};

use ddragon_core::builder::{build_item, item_detail_from_raw};
use ddragon_core::config::{validate_config, FetcherConfig};
use ddragon_core::decode::decode_item_manifest;
use ddragon_core::model::{Item, ItemDetail, ItemManifest, RawItem};
use ddragon_core::DdragonResult;

use crate::http::HttpClient;
use crate::manifest_cache::ManifestCache;

pub struct ItemFetcher {
    config: FetcherConfig,
    client: Arc<dyn HttpClient>,
    manifest: ManifestCache<RawItem>,
}

impl ItemFetcher {
    pub fn new(client: Arc<dyn HttpClient>, config: FetcherConfig) -> DdragonResult<Self> {
        validate_config(&config)?;
        Ok(Self {
            manifest: ManifestCache::new(config.enable_caching),
            config,
            client,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub async fn manifest(&self) -> DdragonResult<Arc<ItemManifest>> {
        let url = self.config.item_list_url();
        self.manifest
            .get_or_fetch(|| async {
                debug!(%url, "fetching item manifest");
                let body = self.client.get(&url).await?;
                let doc = decode_item_manifest(&body)?;
                info!(
                    version = %doc.data_version,
                    items = doc.entries.len(),
                    "item manifest loaded"
                );
                Ok(doc)
            })
            .await
    }

    pub fn cached_manifest(&self) -> DdragonResult<Arc<ItemManifest>> {
        self.manifest.peek()
    }

    /// Every item in manifest (id) order.
    pub async fn get_all_items(&self) -> DdragonResult<Vec<Item>> {
        let manifest = self.manifest().await?;
        Ok(manifest
            .entries
            .iter()
            .map(|(id, raw)| build_item(id, raw))
            .collect())
    }

    /// Detail view of one item, looked up by display name ignoring case.
    ///
    /// With several items sharing a name the lowest id wins. `Ok(None)` when
    /// nothing matches.
    pub async fn get_item_details(&self, name: &str) -> DdragonResult<Option<ItemDetail>> {
        let manifest = self.manifest().await?;
        Ok(manifest
            .find_by_name(name)
            .map(|(id, raw)| item_detail_from_raw(id, raw)))
    }
}
