//! ddragon-core
//!
//! Core primitives for ddragon:
//! - raw and canonical models for Data Dragon champions and items
//! - typed JSON decoding of manifest and detail documents
//! - stat-key normalization and tag derivation
//! - canonical record building
//! - fetcher configuration and data-version parsing
//!
//! This crate performs no network or filesystem I/O.

pub mod builder;
pub mod config;
pub mod decode;
pub mod errors;
pub mod model;
pub mod normalize;
pub mod version;

pub use crate::errors::{DdragonError, DdragonResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::builder::{
        apply_champion_detail, build_champion, build_item, champion_detail_from_raw,
        item_detail_from_raw,
    };
    pub use crate::config::{validate_config, FetcherConfig, MAX_DETAIL_BATCH};
    pub use crate::decode::{
        decode_champion_detail, decode_champion_manifest, decode_item_manifest,
    };
    pub use crate::model::{
        CanonicalStat, Champion, ChampionDetail, ChampionManifest, Item, ItemDetail,
        ItemManifest, ManifestDocument, RawChampion, RawItem, StatMap, TagSet,
    };
    pub use crate::normalize::{
        derive_tags_from_stats, detect_resources_from_raw_keys, normalize_stat_key,
    };
    pub use crate::version::DataVersion;
    pub use crate::{DdragonError, DdragonResult};
}
