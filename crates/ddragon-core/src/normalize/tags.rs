//! Tag derivation from stats and raw stat keys.
//!
//! Canonical stat values produce playstyle tags (`AD`, `AP`, `Tank`, ...).
//! Resource types are not always visible in canonical values, so raw keys are
//! scanned separately for resource hints (`Resource:Mana`, `Resource:Energy`).

use crate::model::{CanonicalStat, StatMap, TagSet};

pub const TANK_HEALTH_THRESHOLD: f64 = 100.0;
pub const TANK_ARMOR_THRESHOLD: f64 = 30.0;
pub const TANK_MAGIC_RESIST_THRESHOLD: f64 = 30.0;

/// Prefix of every resource tag.
pub const RESOURCE_TAG_PREFIX: &str = "Resource:";

/// Ordered (patterns, resource) table. Every matching row contributes a tag.
pub const RESOURCE_MAP: &[(&[&str], &str)] = &[
    (&["mp", "mana"], "Mana"),
    (&["energy"], "Energy"),
    (&["fury", "rage"], "Fury"),
    (&["heat"], "Heat"),
    (&["chi"], "Chi"),
    (&["blood", "bloodwell"], "BloodWell"),
];

pub fn resource_tag(resource: &str) -> String {
    format!("{RESOURCE_TAG_PREFIX}{resource}")
}

/// Resource named by a Data Dragon `partype` (`Rage` is `Fury`, `Blood Well`
/// is `BloodWell`), matched whole against `RESOURCE_MAP` patterns ignoring
/// case and whitespace.
pub fn resource_for_partype(partype: &str) -> Option<&'static str> {
    let compact: String = partype
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    RESOURCE_MAP
        .iter()
        .find(|(patterns, _)| patterns.contains(&compact.as_str()))
        .map(|(_, resource)| *resource)
}

/// Derive descriptive tags from canonical stat values.
pub fn derive_tags_from_stats(stats: &StatMap) -> TagSet {
    let v = |s: CanonicalStat| stats.value(s);
    let mut tags = TagSet::new();

    if v(CanonicalStat::AttackDamage) > 0.0 {
        tags.insert("AD");
    }
    if v(CanonicalStat::AbilityPower) > 0.0 {
        tags.insert("AP");
    }
    if v(CanonicalStat::Health) >= TANK_HEALTH_THRESHOLD
        || v(CanonicalStat::Armor) >= TANK_ARMOR_THRESHOLD
        || v(CanonicalStat::MagicResist) >= TANK_MAGIC_RESIST_THRESHOLD
    {
        tags.insert("Tank");
    }
    if v(CanonicalStat::MoveSpeed) > 0.0 {
        tags.insert("MS");
    }
    if v(CanonicalStat::AttackSpeed) > 0.0 {
        tags.insert("AS");
    }
    if v(CanonicalStat::CritChance) > 0.0 {
        tags.insert("Crit");
    }
    if v(CanonicalStat::Mana) > 0.0 {
        tags.insert(resource_tag("Mana"));
    }

    tags
}

/// Detect resource tags from raw (pre-normalization) stat keys.
pub fn detect_resources_from_raw_keys<I, S>(raw_keys: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = TagSet::new();
    for key in raw_keys {
        let key = key.as_ref();
        if key.trim().is_empty() {
            continue;
        }
        let lower = key.to_lowercase();
        for (patterns, resource) in RESOURCE_MAP {
            if patterns.iter().any(|p| lower.contains(p)) {
                tags.insert(resource_tag(resource));
            }
        }
    }
    tags
}
