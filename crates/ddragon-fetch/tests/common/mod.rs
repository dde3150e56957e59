//! Shared helpers for integration tests: an instrumented in-memory
//! `HttpClient` and Data Dragon JSON fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use serde_json::{json, Value};

use ddragon_core::config::FetcherConfig;
use ddragon_core::{DdragonError, DdragonResult};
use ddragon_fetch::HttpClient;

pub const BASE_URL: &str = "http://stub.local";

pub fn config() -> FetcherConfig {
    FetcherConfig::default().with_base_url(BASE_URL)
}

/// Routes URLs to canned bodies and records how it was called.
#[derive(Default)]
pub struct StubClient {
    routes: Mutex<HashMap<String, Bytes>>,
    failing: Mutex<HashSet<String>>,
    /// Remaining forced failures per URL; afterwards the route is served.
    fail_times: Mutex<HashMap<String, usize>>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
    delay: Mutex<Option<Duration>>,
}

impl StubClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, url: impl Into<String>, body: &Value) {
        self.routes
            .lock()
            .insert(url.into(), Bytes::from(body.to_string()));
    }

    pub fn route_raw(&self, url: impl Into<String>, body: &'static str) {
        self.routes
            .lock()
            .insert(url.into(), Bytes::from_static(body.as_bytes()));
    }

    pub fn fail(&self, url: impl Into<String>) {
        self.failing.lock().insert(url.into());
    }

    pub fn fail_first(&self, url: impl Into<String>, times: usize) {
        self.fail_times.lock().insert(url.into(), times);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    /// Calls whose URL contains `fragment`.
    pub fn calls_matching(&self, fragment: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(url, _)| url.contains(fragment))
            .map(|(_, n)| n)
            .sum()
    }

    pub fn high_water_mark(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }

    fn respond(&self, url: &str) -> DdragonResult<Bytes> {
        if self.failing.lock().contains(url) {
            return Err(DdragonError::fetch(url, "http error: 503 Service Unavailable"));
        }
        if let Some(left) = self.fail_times.lock().get_mut(url) {
            if *left > 0 {
                *left -= 1;
                return Err(DdragonError::fetch(url, "connection reset"));
            }
        }
        self.routes
            .lock()
            .get(url)
            .cloned()
            .ok_or_else(|| DdragonError::fetch(url, "http error: 404 Not Found"))
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn get(&self, url: &str) -> DdragonResult<Bytes> {
        *self.calls.lock().entry(url.to_string()).or_default() += 1;
        self.total.fetch_add(1, Ordering::SeqCst);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlight(&self.in_flight);
        self.high_water.fetch_max(now, Ordering::SeqCst);

        let delay = *self.delay.lock();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }

        self.respond(url)
    }
}

pub fn champion_list_url() -> String {
    config().champion_list_url()
}

pub fn champion_detail_url(id: &str) -> String {
    config().champion_detail_url(id)
}

pub fn item_list_url() -> String {
    config().item_list_url()
}

pub fn champion_entry(id: &str, name: &str, partype: &str) -> Value {
    json!({
        "id": id,
        "key": "1",
        "name": name,
        "title": format!("the {name}"),
        "blurb": format!("{name} blurb"),
        "tags": ["Fighter"],
        "partype": partype,
        "stats": {
            "hp": 600.0,
            "hpperlevel": 90.0,
            "mp": 300.0,
            "mpregen": 8.0,
            "attackrange": 175.0,
            "armor": 30.0,
            "spellblock": 32.0,
            "attackdamage": 60.0,
            "attackspeed": 0.65,
            "movespeed": 340.0
        }
    })
}

pub fn champion_manifest(entries: &[(&str, &str, &str)]) -> Value {
    let data: serde_json::Map<String, Value> = entries
        .iter()
        .map(|(id, name, partype)| (id.to_string(), champion_entry(id, name, partype)))
        .collect();
    json!({ "type": "champion", "version": "13.18.1", "data": data })
}

pub fn champion_detail(id: &str, name: &str, partype: &str) -> Value {
    let entry = json!({
        "id": id,
        "name": name,
        "title": format!("the {name}"),
        "lore": format!("{name} lore"),
        "partype": partype,
        "passive": { "name": format!("{name} passive"), "description": "passive" },
        "spells": [
            { "name": "Q", "description": "q", "tooltip": "q tip" },
            { "name": "W", "description": "w", "tooltip": "w tip" }
        ]
    });
    let mut data = serde_json::Map::new();
    data.insert(id.to_string(), entry);
    json!({ "type": "champion", "version": "13.18.1", "data": data })
}

/// Register a champion manifest plus one detail route per entry.
pub fn seed_champions(client: &StubClient, entries: &[(&str, &str, &str)]) {
    client.route(champion_list_url(), &champion_manifest(entries));
    for (id, name, partype) in entries {
        client.route(champion_detail_url(id), &champion_detail(id, name, partype));
    }
}

/// Ten champions with distinct ids and names.
pub fn ten_champions() -> Vec<(String, String)> {
    [
        "Aatrox", "Ahri", "Akali", "Alistar", "Amumu", "Anivia", "Annie", "Ashe", "Azir",
        "Bard",
    ]
    .iter()
    .map(|n| (n.to_string(), n.to_string()))
    .collect()
}

pub fn seed_ten(client: &StubClient) -> Vec<String> {
    let champs = ten_champions();
    let entries: Vec<(&str, &str, &str)> = champs
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str(), "Mana"))
        .collect();
    seed_champions(client, &entries);
    champs.into_iter().map(|(_, name)| name).collect()
}

pub fn item_manifest() -> Value {
    json!({
        "type": "item",
        "version": "13.18.1",
        "data": {
            "1001": {
                "name": "Boots",
                "description": "<mainText>Movement</mainText>",
                "plaintext": "Slightly increases Move Speed",
                "gold": { "base": 300, "total": 300, "sell": 210, "purchasable": true },
                "tags": ["Boots"],
                "stats": { "FlatMovementSpeedMod": 25.0 }
            },
            "1036": {
                "name": "Long Sword",
                "plaintext": "Slightly increases Attack Damage",
                "gold": { "base": 350, "total": 350, "sell": 245, "purchasable": true },
                "tags": ["Damage"],
                "stats": { "FlatPhysicalDamageMod": 10.0 }
            },
            "9999": {
                "name": null,
                "plaintext": null,
                "gold": null,
                "stats": null
            }
        }
    })
}
