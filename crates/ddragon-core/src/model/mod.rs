//! ddragon data models.
//!
//! Two layers:
//! - [`raw`]: vendor-shaped documents, decoded as-is from Data Dragon JSON.
//!   Every field the CDN may omit is an `Option`.
//! - [`canonical`]: records in the project's normalized vocabulary, produced by
//!   [`crate::builder`] and owned by the caller once returned.
//!
//! Models are mostly "dumb" data. Fetchers apply I/O and caching; the builder
//! applies normalization.

pub mod canonical;
pub mod raw;

pub use canonical::{
    Ability, CanonicalStat, Champion, ChampionDetail, Item, ItemDetail, StatMap, TagSet,
};
pub use raw::{
    Gold, ManifestDocument, NamedEntity, RawChampion, RawChampionDetail, RawItem, RawPassive,
    RawSpell,
};

/// Champion list document (`champion.json`).
pub type ChampionManifest = ManifestDocument<RawChampion>;

/// Item list document (`item.json`).
pub type ItemManifest = ManifestDocument<RawItem>;

/// Structural checks for decoded documents.
pub mod validate {
    use super::*;
    use crate::errors::{DdragonError, DdragonResult};

    /// A manifest that lists nothing is treated as a decode failure.
    pub fn manifest_non_empty<T>(doc: &ManifestDocument<T>, what: &str) -> DdragonResult<()> {
        if doc.entries.is_empty() {
            return Err(DdragonError::decode(what, "manifest has no entries"));
        }
        Ok(())
    }

    /// A champion record carries exactly the canonical key set.
    pub fn champion_complete(c: &Champion) -> DdragonResult<()> {
        if let Some(extra) = c.stats.keys().find(|k| CanonicalStat::from_key(k).is_none()) {
            return Err(DdragonError::invariant(format!(
                "champion {} carries non-canonical stat {extra}",
                c.name
            )));
        }
        for stat in CanonicalStat::ALL {
            if !c.stats.contains(stat.as_str()) {
                return Err(DdragonError::invariant(format!(
                    "champion {} is missing canonical stat {stat}",
                    c.name
                )));
            }
        }
        Ok(())
    }
}
