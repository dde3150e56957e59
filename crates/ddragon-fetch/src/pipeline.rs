//! Bounded-concurrency detail fetching.
//!
//! Each request becomes a task in a `JoinSet`. Before its GET a task takes a
//! permit from the fetcher-wide semaphore, so at most `limit` detail requests
//! are in flight across every batch issued by the same fetcher. Permits are
//! RAII guards: they return to the gate when the GET finishes, fails, or the
//! task is aborted.
//!
//! A batch never aborts on a single entity. Every request ends up in exactly
//! one of [`DetailBatch::details`] or [`DetailBatch::failures`].
//!
//! Dropping the future returned by [`BoundedFetchPipeline::run`] (for example
//! under `tokio::time::timeout`) drops the join set, which aborts the
//! outstanding tasks.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use ddragon_core::decode::decode_champion_detail;
use ddragon_core::model::ChampionDetail;
use ddragon_core::{DdragonError, DdragonResult};

use crate::detail_cache::DetailCache;
use crate::http::HttpClient;

/// One entity to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Name as requested by the caller; used as the result and cache key.
    pub name: String,
    /// CDN entity id (`MonkeyKing` for Wukong).
    pub entity_id: String,
    pub url: String,
}

/// Aggregate outcome of a detail batch, keyed by requested name.
#[derive(Debug, Default)]
pub struct DetailBatch {
    pub details: BTreeMap<String, ChampionDetail>,
    pub failures: BTreeMap<String, DdragonError>,
}

impl DetailBatch {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(&mut self, other: DetailBatch) {
        self.details.extend(other.details);
        self.failures.extend(other.failures);
    }

    /// Fail the whole batch if any entity failed (first failure in name order).
    pub fn into_result(mut self) -> DdragonResult<BTreeMap<String, ChampionDetail>> {
        match self.failures.pop_first() {
            Some((_, err)) => Err(err),
            None => Ok(self.details),
        }
    }
}

pub struct BoundedFetchPipeline {
    client: Arc<dyn HttpClient>,
    gate: Arc<Semaphore>,
    cache: Arc<DetailCache<ChampionDetail>>,
    limit: usize,
}

impl BoundedFetchPipeline {
    pub fn new(
        client: Arc<dyn HttpClient>,
        limit: usize,
        cache: Arc<DetailCache<ChampionDetail>>,
    ) -> Self {
        Self {
            client,
            gate: Arc::new(Semaphore::new(limit)),
            cache,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Permits not currently held by an in-flight request.
    pub fn available_permits(&self) -> usize {
        self.gate.available_permits()
    }

    /// Fetch every request concurrently and wait for all of them.
    ///
    /// Successful documents are written to the detail cache before this
    /// returns.
    pub async fn run(&self, requests: Vec<DetailRequest>) -> DetailBatch {
        let span = info_span!(
            "detail_batch",
            batch = %Uuid::new_v4(),
            requested = requests.len(),
            limit = self.limit,
        );

        async move {
            let mut pending: BTreeSet<String> = BTreeSet::new();
            let mut set = JoinSet::new();

            for req in requests {
                pending.insert(req.name.clone());
                let client = Arc::clone(&self.client);
                let gate = Arc::clone(&self.gate);
                let cache = Arc::clone(&self.cache);

                set.spawn(
                    async move {
                        let result = fetch_one(client.as_ref(), &gate, &req).await;
                        if let Ok(detail) = &result {
                            cache.insert(&req.name, detail.clone());
                        }
                        (req.name, result)
                    }
                    .in_current_span(),
                );
            }

            let mut batch = DetailBatch::default();
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok((name, Ok(detail))) => {
                        pending.remove(&name);
                        batch.details.insert(name, detail);
                    }
                    Ok((name, Err(err))) => {
                        warn!(%name, code = err.code(), error = %err, "detail fetch failed");
                        pending.remove(&name);
                        batch.failures.insert(name, err);
                    }
                    Err(join_err) => {
                        warn!(error = %join_err, "detail task terminated abnormally");
                    }
                }
            }

            // Tasks that panicked never reported their name.
            for name in pending {
                batch.failures.insert(
                    name,
                    DdragonError::invariant("detail task terminated abnormally"),
                );
            }

            info!(
                fetched = batch.details.len(),
                failed = batch.failures.len(),
                "detail batch complete"
            );
            batch
        }
        .instrument(span)
        .await
    }
}

async fn fetch_one(
    client: &dyn HttpClient,
    gate: &Semaphore,
    req: &DetailRequest,
) -> DdragonResult<ChampionDetail> {
    let body = {
        let _permit = gate
            .acquire()
            .await
            .map_err(|_| DdragonError::invariant("detail gate closed"))?;
        debug!(name = %req.name, url = %req.url, "fetching detail");
        client.get(&req.url).await?
    };

    decode_champion_detail(&body, &req.entity_id)
}
