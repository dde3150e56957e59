//! ddragon-fetch
//!
//! Async fetchers for Data Dragon champion and item data.
//!
//! It includes:
//! - the [`HttpClient`] seam (plus a reqwest implementation behind the
//!   default `reqwest-client` feature)
//! - a write-once, coalescing manifest cache per fetcher
//! - a case-insensitive detail cache
//! - a bounded-concurrency detail pipeline shared by every detail request a
//!   fetcher issues
//! - [`ChampionFetcher`], [`ItemFetcher`] and the [`DataDragon`] facade
//!
//! All state is owned by fetcher instances; there are no globals.

pub mod champions;
pub mod detail_cache;
pub mod http;
pub mod items;
pub mod manifest_cache;
pub mod pipeline;

use std::collections::BTreeMap;
use std::sync::Arc;

use ddragon_core::config::FetcherConfig;
use ddragon_core::model::{Champion, ChampionDetail, Item, ItemDetail};
use ddragon_core::DdragonResult;

pub use champions::{ChampionFetcher, ChampionRoster};
pub use detail_cache::DetailCache;
pub use http::HttpClient;
#[cfg(feature = "reqwest-client")]
pub use http::ReqwestClient;
pub use items::ItemFetcher;
pub use manifest_cache::ManifestCache;
pub use pipeline::{BoundedFetchPipeline, DetailBatch, DetailRequest};

/// Champion and item fetchers sharing one HTTP client and one config.
pub struct DataDragon {
    pub champions: ChampionFetcher,
    pub items: ItemFetcher,
}

impl DataDragon {
    pub fn new(client: Arc<dyn HttpClient>, config: FetcherConfig) -> DdragonResult<Self> {
        Ok(Self {
            champions: ChampionFetcher::new(Arc::clone(&client), config.clone())?,
            items: ItemFetcher::new(client, config)?,
        })
    }

    #[cfg(feature = "reqwest-client")]
    pub fn with_reqwest(config: FetcherConfig) -> DdragonResult<Self> {
        Self::new(Arc::new(ReqwestClient::new()?), config)
    }

    pub fn config(&self) -> &FetcherConfig {
        self.champions.config()
    }

    pub async fn get_all_champions(&self) -> DdragonResult<ChampionRoster> {
        self.champions.get_all_champions().await
    }

    pub async fn get_basic_champion_data(&self) -> DdragonResult<BTreeMap<String, Champion>> {
        self.champions.get_basic_champion_data().await
    }

    pub async fn load_champion_details<I, S>(&self, names: I) -> DdragonResult<DetailBatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.champions.load_champion_details(names).await
    }

    pub async fn champion_detail(&self, name: &str) -> DdragonResult<ChampionDetail> {
        self.champions.champion_detail(name).await
    }

    pub async fn get_all_items(&self) -> DdragonResult<Vec<Item>> {
        self.items.get_all_items().await
    }

    pub async fn get_item_details(&self, name: &str) -> DdragonResult<Option<ItemDetail>> {
        self.items.get_item_details(name).await
    }
}
