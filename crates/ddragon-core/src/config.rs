//! Configuration structures for ddragon.
//!
//! `FetcherConfig` is an explicit value handed to fetchers at construction.
//! The library never reads environment variables; the CLI maps flags and
//! `DDRAGON_*` variables into this struct.

use crate::errors::{DdragonError, DdragonResult};
use crate::version::DataVersion;

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_DATA_VERSION: &str = "13.18.1";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;
pub const DEFAULT_CACHE_DURATION_MINUTES: u64 = 60;

/// Hard ceiling on names accepted by a single detail batch (two 5-player teams).
pub const MAX_DETAIL_BATCH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// CDN root, without trailing slash.
    pub base_url: String,
    pub data_version: String,
    pub locale: String,
    /// Semaphore size for per-entity detail requests.
    pub max_concurrent_requests: usize,
    /// When false every manifest request goes to the network.
    pub enable_caching: bool,
    /// Advisory only. Cached documents live as long as the fetcher.
    pub cache_duration_minutes: u64,
    /// Fetch per-champion detail documents in `get_all_champions`.
    pub enrich_with_details: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_version: DEFAULT_DATA_VERSION.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            enable_caching: true,
            cache_duration_minutes: DEFAULT_CACHE_DURATION_MINUTES,
            enrich_with_details: true,
        }
    }
}

impl FetcherConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_version(mut self, version: impl Into<String>) -> Self {
        self.data_version = version.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_max_concurrent_requests(mut self, n: usize) -> Self {
        self.max_concurrent_requests = n;
        self
    }

    pub fn with_caching(mut self, enabled: bool) -> Self {
        self.enable_caching = enabled;
        self
    }

    pub fn with_cache_duration_minutes(mut self, minutes: u64) -> Self {
        self.cache_duration_minutes = minutes;
        self
    }

    pub fn with_details(mut self, enabled: bool) -> Self {
        self.enrich_with_details = enabled;
        self
    }

    fn data_root(&self) -> String {
        format!(
            "{}/cdn/{}/data/{}",
            self.base_url, self.data_version, self.locale
        )
    }

    pub fn champion_list_url(&self) -> String {
        format!("{}/champion.json", self.data_root())
    }

    /// Detail URL for a champion entity id (e.g. `MonkeyKing`, not `Wukong`).
    pub fn champion_detail_url(&self, champion_id: &str) -> String {
        format!("{}/champion/{champion_id}.json", self.data_root())
    }

    pub fn item_list_url(&self) -> String {
        format!("{}/item.json", self.data_root())
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &FetcherConfig) -> DdragonResult<()> {
    if cfg.base_url.trim().is_empty() {
        return Err(DdragonError::invalid_argument("base_url must not be empty"));
    }

    if cfg.max_concurrent_requests == 0 {
        return Err(DdragonError::invalid_argument(
            "max_concurrent_requests must be greater than zero",
        ));
    }

    if cfg.locale.trim().is_empty() {
        return Err(DdragonError::invalid_argument("locale must not be empty"));
    }

    DataVersion::parse(&cfg.data_version)?;

    Ok(())
}
