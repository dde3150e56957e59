//! Vendor-shaped documents, decoded as-is from Data Dragon JSON.
//!
//! Field names follow the CDN's JSON. Everything the CDN may omit is an
//! `Option`, so a sparse or partially-null entry still decodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level listing document (`champion.json`, `item.json`, or a
/// single-champion detail file, which reuses the same envelope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDocument<T> {
    #[serde(rename = "type", default)]
    pub schema_version: String,
    #[serde(rename = "version", default)]
    pub data_version: String,
    #[serde(rename = "data", default = "BTreeMap::new")]
    pub entries: BTreeMap<String, T>,
}

/// Entities that carry a display name used for lookups.
pub trait NamedEntity {
    fn display_name(&self) -> Option<&str>;
}

impl<T: NamedEntity> ManifestDocument<T> {
    /// Resolve a display name (or entity id) to its manifest entry.
    ///
    /// Display names are compared case-insensitively; an exact entity-id key
    /// is accepted as a fallback.
    pub fn find_by_name(&self, name: &str) -> Option<(&str, &T)> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|(_, e)| {
                e.display_name()
                    .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(id, _)| id.eq_ignore_ascii_case(wanted))
            })
            .map(|(id, e)| (id.as_str(), e))
    }
}

/// A champion entry in `champion.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChampion {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub blurb: Option<String>,
    pub tags: Option<Vec<String>>,
    pub partype: Option<String>,
    pub stats: Option<BTreeMap<String, f64>>,
}

impl NamedEntity for RawChampion {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Gold block of an item entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gold {
    #[serde(default)]
    pub base: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub sell: u32,
    #[serde(default)]
    pub purchasable: bool,
}

/// An item entry in `item.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub plaintext: Option<String>,
    pub gold: Option<Gold>,
    pub tags: Option<Vec<String>>,
    pub stats: Option<BTreeMap<String, f64>>,
}

impl NamedEntity for RawItem {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSpell {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPassive {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The single entry inside `champion/<id>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChampionDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub lore: Option<String>,
    pub partype: Option<String>,
    pub spells: Option<Vec<RawSpell>>,
    pub passive: Option<RawPassive>,
}

impl NamedEntity for RawChampionDetail {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
