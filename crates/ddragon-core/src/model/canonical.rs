//! Canonical records handed to callers.
//!
//! These types use the project's stable vocabulary rather than the CDN's
//! field names. Collections are `BTreeMap`/`BTreeSet` backed so that
//! iteration (and therefore JSON output) is deterministic.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::raw::Gold;

/// The closed set of canonical stat keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalStat {
    Health,
    AttackDamage,
    AbilityPower,
    Armor,
    MagicResist,
    AttackSpeed,
    MoveSpeed,
    HealthRegen,
    Mana,
    ManaRegen,
    CritChance,
    CritDamage,
}

impl CanonicalStat {
    /// Every canonical key, in declaration order.
    pub const ALL: [CanonicalStat; 12] = [
        Self::Health,
        Self::AttackDamage,
        Self::AbilityPower,
        Self::Armor,
        Self::MagicResist,
        Self::AttackSpeed,
        Self::MoveSpeed,
        Self::HealthRegen,
        Self::Mana,
        Self::ManaRegen,
        Self::CritChance,
        Self::CritDamage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::AttackDamage => "AttackDamage",
            Self::AbilityPower => "AbilityPower",
            Self::Armor => "Armor",
            Self::MagicResist => "MagicResist",
            Self::AttackSpeed => "AttackSpeed",
            Self::MoveSpeed => "MoveSpeed",
            Self::HealthRegen => "HealthRegen",
            Self::Mana => "Mana",
            Self::ManaRegen => "ManaRegen",
            Self::CritChance => "CritChance",
            Self::CritDamage => "CritDamage",
        }
    }

    /// Exact (case-sensitive) lookup of a canonical key string.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

impl fmt::Display for CanonicalStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stat values keyed by canonical key, or by the raw key when no mapping
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatMap(BTreeMap<String, f64>);

impl StatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `key`, summing with any existing value.
    pub fn accumulate(&mut self, key: impl Into<String>, value: f64) {
        *self.0.entry(key.into()).or_insert(0.0) += value;
    }

    /// Exactly the canonical keys, valued from `self` (`0.0` when absent).
    /// Raw keys with no canonical mapping are dropped.
    pub fn canonical_only(&self) -> StatMap {
        Self(
            CanonicalStat::ALL
                .into_iter()
                .map(|stat| (stat.as_str().to_string(), self.value(stat)))
                .collect(),
        )
    }

    /// Value for `key`, or `0.0` when absent.
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn value(&self, stat: CanonicalStat) -> f64 {
        self.get(stat.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for StatMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.accumulate(k, v);
        }
        out
    }
}

/// Deduplicated, lexicographically ordered tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the tag was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    pub fn union_with(&mut self, other: TagSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Remove every tag equal to `tag` ignoring ASCII case.
    pub fn remove_ignore_case(&mut self, tag: &str) {
        self.0.retain(|t| !t.eq_ignore_ascii_case(tag));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Canonical champion record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    /// Always holds every `CanonicalStat` key.
    pub stats: StatMap,
    pub tags: TagSet,
}

/// Canonical item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    /// Sparse: only keys the source supplied.
    pub stats: StatMap,
    pub tags: TagSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub tooltip: String,
}

/// Authoritative per-champion data from `champion/<id>.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionDetail {
    pub entity_id: String,
    pub name: String,
    pub title: String,
    /// Resource type, e.g. `Mana`, `Energy`, `None`.
    pub partype: String,
    pub lore: String,
    /// Passive first, then spells in slot order.
    pub abilities: Vec<Ability>,
}

/// Item detail; Data Dragon has no per-item file, so this is the full
/// manifest entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub entity_id: String,
    pub name: String,
    pub plaintext: Option<String>,
    pub description: Option<String>,
    pub gold: Option<Gold>,
    pub stats: BTreeMap<String, f64>,
    pub tags: Vec<String>,
}
