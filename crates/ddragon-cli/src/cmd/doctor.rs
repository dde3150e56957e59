use anyhow::{bail, Result};
use serde::Serialize;

use ddragon_core::config::{validate_config, FetcherConfig, MAX_DETAIL_BATCH};

use crate::args::FetchArgs;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
    pub base_url: String,
    pub data_version: String,
    pub locale: String,
    pub max_concurrent_requests: usize,
    pub max_detail_batch: usize,
    pub enable_caching: bool,
    pub cache_duration_minutes: u64,
    pub enrich_with_details: bool,
    pub champion_list_url: String,
    pub item_list_url: String,
}

impl From<&FetcherConfig> for EffectiveConfig {
    fn from(c: &FetcherConfig) -> Self {
        Self {
            base_url: c.base_url.clone(),
            data_version: c.data_version.clone(),
            locale: c.locale.clone(),
            max_concurrent_requests: c.max_concurrent_requests,
            max_detail_batch: MAX_DETAIL_BATCH,
            enable_caching: c.enable_caching,
            cache_duration_minutes: c.cache_duration_minutes,
            enrich_with_details: c.enrich_with_details,
            champion_list_url: c.champion_list_url(),
            item_list_url: c.item_list_url(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub config: EffectiveConfig,
    pub checks: Vec<Check>,
}

pub async fn run(args: &FetchArgs) -> Result<()> {
    let cfg = args.to_config();
    let checks = checks(&cfg);
    let ok = checks.iter().all(|c| c.ok);
    let out = DoctorOut {
        ok,
        config: EffectiveConfig::from(&cfg),
        checks,
    };

    if output::is_json() {
        output::print(&out)?;
    } else {
        let c = &out.config;
        output::print_section(
            "config",
            &[
                ("base_url", c.base_url.clone()),
                ("data_version", c.data_version.clone()),
                ("locale", c.locale.clone()),
                ("concurrency", c.max_concurrent_requests.to_string()),
                ("caching", c.enable_caching.to_string()),
                ("details", c.enrich_with_details.to_string()),
                ("champions", c.champion_list_url.clone()),
                ("items", c.item_list_url.clone()),
            ],
        )?;
        let rows: Vec<(&str, String)> = out
            .checks
            .iter()
            .map(|c| {
                let mark = if c.ok { "ok" } else { "FAIL" };
                (c.name.as_str(), format!("{mark}  {}", c.detail))
            })
            .collect();
        output::print_section("checks", &rows)?;
    }

    if !ok {
        bail!("configuration is invalid");
    }
    Ok(())
}

fn checks(cfg: &FetcherConfig) -> Vec<Check> {
    let mut checks = Vec::new();

    checks.push(match validate_config(cfg) {
        Ok(()) => Check {
            name: "config".to_string(),
            ok: true,
            detail: "valid".to_string(),
        },
        Err(e) => Check {
            name: "config".to_string(),
            ok: false,
            detail: e.to_string(),
        },
    });

    let scheme_ok = cfg.base_url.starts_with("https://") || cfg.base_url.starts_with("http://");
    checks.push(Check {
        name: "base_url".to_string(),
        ok: scheme_ok,
        detail: if scheme_ok {
            "http(s) URL".to_string()
        } else {
            "must start with http:// or https://".to_string()
        },
    });

    checks
}
