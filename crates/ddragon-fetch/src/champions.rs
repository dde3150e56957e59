//! Champion fetcher.
//!
//! Owns the champion manifest cache, the detail cache, and the detail
//! pipeline (with its concurrency gate). Construct one per process or per
//! test and pass it around; nothing here is global.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use ddragon_core::builder::{apply_champion_detail, build_champion};
use ddragon_core::config::{validate_config, FetcherConfig, MAX_DETAIL_BATCH};
use ddragon_core::decode::decode_champion_manifest;
use ddragon_core::model::{Champion, ChampionDetail, ChampionManifest, RawChampion};
use ddragon_core::{DdragonError, DdragonResult};

use crate::detail_cache::DetailCache;
use crate::http::HttpClient;
use crate::manifest_cache::ManifestCache;
use crate::pipeline::{BoundedFetchPipeline, DetailBatch, DetailRequest};

/// All champions plus the entities whose detail enrichment failed.
///
/// A champion listed in `detail_failures` is still present in `champions`,
/// built from manifest data alone.
#[derive(Debug, Serialize)]
pub struct ChampionRoster {
    pub data_version: String,
    pub champions: Vec<Champion>,
    #[serde(serialize_with = "serialize_failures")]
    pub detail_failures: BTreeMap<String, DdragonError>,
}

impl ChampionRoster {
    pub fn get(&self, name: &str) -> Option<&Champion> {
        self.champions
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

fn serialize_failures<S: serde::Serializer>(
    failures: &BTreeMap<String, DdragonError>,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_map(failures.iter().map(|(k, v)| (k, v.to_string())))
}

pub struct ChampionFetcher {
    config: FetcherConfig,
    client: Arc<dyn HttpClient>,
    manifest: ManifestCache<RawChampion>,
    details: Arc<DetailCache<ChampionDetail>>,
    pipeline: BoundedFetchPipeline,
}

impl ChampionFetcher {
    pub fn new(client: Arc<dyn HttpClient>, config: FetcherConfig) -> DdragonResult<Self> {
        validate_config(&config)?;

        let details = Arc::new(DetailCache::new());
        let pipeline = BoundedFetchPipeline::new(
            Arc::clone(&client),
            config.max_concurrent_requests,
            Arc::clone(&details),
        );

        Ok(Self {
            manifest: ManifestCache::new(config.enable_caching),
            config,
            client,
            details,
            pipeline,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Detail permits not held by an in-flight request.
    pub fn available_detail_permits(&self) -> usize {
        self.pipeline.available_permits()
    }

    pub fn cached_detail_count(&self) -> usize {
        self.details.len()
    }

    /// Champion manifest, fetched on first use.
    pub async fn manifest(&self) -> DdragonResult<Arc<ChampionManifest>> {
        let url = self.config.champion_list_url();
        self.manifest
            .get_or_fetch(|| async {
                debug!(%url, "fetching champion manifest");
                let body = self.client.get(&url).await?;
                let doc = decode_champion_manifest(&body)?;
                info!(
                    version = %doc.data_version,
                    champions = doc.entries.len(),
                    "champion manifest loaded"
                );
                Ok(doc)
            })
            .await
    }

    /// Cached champion manifest; `NotReady` before the first successful fetch.
    pub fn cached_manifest(&self) -> DdragonResult<Arc<ChampionManifest>> {
        self.manifest.peek()
    }

    /// Records built from the manifest alone, keyed by champion name.
    ///
    /// Detail documents already in the cache are overlaid; nothing new is
    /// fetched.
    pub async fn get_basic_champion_data(&self) -> DdragonResult<BTreeMap<String, Champion>> {
        let manifest = self.manifest().await?;
        Ok(self.basic_champions_from(&manifest))
    }

    /// Same as [`get_basic_champion_data`](Self::get_basic_champion_data)
    /// over a manifest the caller already holds (for example to report its
    /// `data_version` when caching is off).
    pub fn basic_champions_from(&self, manifest: &ChampionManifest) -> BTreeMap<String, Champion> {
        manifest
            .entries
            .iter()
            .map(|(id, raw)| {
                let mut c = build_champion(id, raw);
                if let Some(d) = self.details.get(&c.name) {
                    apply_champion_detail(&mut c, &d);
                }
                (c.name.clone(), c)
            })
            .collect()
    }

    /// Every champion, enriched with detail documents when
    /// `enrich_with_details` is set.
    ///
    /// Detail fetches here are not limited to [`MAX_DETAIL_BATCH`]; they go
    /// through the same concurrency gate and cache as
    /// [`load_champion_details`](Self::load_champion_details).
    pub async fn get_all_champions(&self) -> DdragonResult<ChampionRoster> {
        let manifest = self.manifest().await?;

        let mut champions: Vec<Champion> = manifest
            .entries
            .iter()
            .map(|(id, raw)| build_champion(id, raw))
            .collect();

        let mut detail_failures = BTreeMap::new();
        if self.config.enrich_with_details {
            let requests: Vec<DetailRequest> = manifest
                .entries
                .iter()
                .zip(&champions)
                .filter(|(_, c)| !self.details.contains(&c.name))
                .map(|((id, _), c)| self.detail_request(&c.name, id))
                .collect();

            if !requests.is_empty() {
                detail_failures = self.pipeline.run(requests).await.failures;
            }
        }

        for c in &mut champions {
            if let Some(d) = self.details.get(&c.name) {
                apply_champion_detail(c, &d);
            }
        }

        Ok(ChampionRoster {
            data_version: manifest.data_version.clone(),
            champions,
            detail_failures,
        })
    }

    /// Fetch detail documents for up to [`MAX_DETAIL_BATCH`] champions.
    ///
    /// Names are deduplicated ignoring case. Cached names cost no I/O. A name
    /// missing from the manifest fails the whole call with `NotFound` before
    /// any detail request is made; per-entity fetch or decode failures land in
    /// [`DetailBatch::failures`].
    pub async fn load_champion_details<I, S>(&self, names: I) -> DdragonResult<DetailBatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = distinct_names(names);
        if names.len() > MAX_DETAIL_BATCH {
            return Err(DdragonError::invalid_argument(format!(
                "at most {MAX_DETAIL_BATCH} champions per detail request, got {}",
                names.len()
            )));
        }

        let mut batch = DetailBatch::default();
        let mut missing = Vec::new();
        for name in names {
            match self.details.get(&name) {
                Some(d) => {
                    batch.details.insert(name, (*d).clone());
                }
                None => missing.push(name),
            }
        }

        if missing.is_empty() {
            debug!(hits = batch.details.len(), "detail request served from cache");
            return Ok(batch);
        }

        let manifest = self.manifest().await?;
        let requests = missing
            .into_iter()
            .map(|name| {
                let (id, _) = manifest
                    .find_by_name(&name)
                    .ok_or_else(|| DdragonError::not_found(name.clone()))?;
                Ok(self.detail_request(&name, id))
            })
            .collect::<DdragonResult<Vec<_>>>()?;

        batch.merge(self.pipeline.run(requests).await);
        Ok(batch)
    }

    /// Detail document for one champion; a per-entity failure becomes the
    /// error.
    pub async fn champion_detail(&self, name: &str) -> DdragonResult<ChampionDetail> {
        self.load_champion_details([name])
            .await?
            .into_result()?
            .into_values()
            .next()
            .ok_or_else(|| DdragonError::not_found(name))
    }

    fn detail_request(&self, name: &str, entity_id: &str) -> DetailRequest {
        DetailRequest {
            name: name.to_string(),
            entity_id: entity_id.to_string(),
            url: self.config.champion_detail_url(entity_id),
        }
    }
}

/// Trimmed, non-empty names, first spelling kept for case-insensitive
/// duplicates.
fn distinct_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty() && seen.insert(n.to_lowercase()))
        .collect()
}
