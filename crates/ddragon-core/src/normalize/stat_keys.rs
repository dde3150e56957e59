//! Stat-key normalization.
//!
//! Data Dragon stat keys differ between champions (`hp`, `armorperlevel`)
//! and items (`FlatHPPoolMod`, `FlatPhysicalDamageMod`). They are mapped onto
//! [`CanonicalStat`] names by case-insensitive substring matching against an
//! ordered table.
//!
//! Rules:
//! - rows are tried top to bottom, patterns left to right; the first hit wins
//! - patterns overlap and the table order decides; e.g. `hpregen` contains
//!   `hp` and resolves to `Health`, `mpregen` resolves to `Mana`, and
//!   `critdamage` resolves to `CritChance`
//! - keys matching nothing are returned unchanged

use crate::model::{CanonicalStat, StatMap};

/// Ordered (patterns, canonical) table. Do not reorder.
pub const KEY_MAP: &[(&[&str], CanonicalStat)] = &[
    (&["flathppoolmod", "hp"], CanonicalStat::Health),
    (
        &[
            "attackdamage",
            "flatphysicaldmgmod",
            "flatphysicaldamage",
            "physicaldamage",
        ],
        CanonicalStat::AttackDamage,
    ),
    (&["abilitypower", "ap", "spelldamage"], CanonicalStat::AbilityPower),
    (&["armor"], CanonicalStat::Armor),
    (&["spellblock", "magicresist", "mr"], CanonicalStat::MagicResist),
    (&["attackspeed"], CanonicalStat::AttackSpeed),
    (
        &["flatmovementspeedmod", "movespeed", "movement"],
        CanonicalStat::MoveSpeed,
    ),
    (&["hpregen", "flathpregenmod"], CanonicalStat::HealthRegen),
    (&["mp", "mana"], CanonicalStat::Mana),
    (&["mpregen", "manaregen"], CanonicalStat::ManaRegen),
    (&["flatcritchancemod", "crit"], CanonicalStat::CritChance),
    (&["flatcritdamagemod", "critdamage"], CanonicalStat::CritDamage),
];

/// Resolve a raw key to its canonical stat, if any row matches.
pub fn canonical_stat_for(raw_key: &str) -> Option<CanonicalStat> {
    if raw_key.trim().is_empty() {
        return None;
    }
    let lower = raw_key.to_lowercase();
    KEY_MAP
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(_, stat)| *stat)
}

/// Normalize a raw stat key into a canonical key.
///
/// Unmapped keys come back verbatim so callers can still trace them.
pub fn normalize_stat_key(raw_key: &str) -> String {
    match canonical_stat_for(raw_key) {
        Some(stat) => stat.as_str().to_string(),
        None => raw_key.to_string(),
    }
}

/// Normalize every key of a raw stat block.
///
/// Values of raw keys that collapse onto the same key are summed.
pub fn normalize_stats<'a, I>(raw: I) -> StatMap
where
    I: IntoIterator<Item = (&'a String, &'a f64)>,
{
    raw.into_iter()
        .map(|(k, v)| (normalize_stat_key(k), *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn champion_keys() {
        assert_eq!(normalize_stat_key("hp"), "Health");
        assert_eq!(normalize_stat_key("armor"), "Armor");
        assert_eq!(normalize_stat_key("spellblock"), "MagicResist");
        assert_eq!(normalize_stat_key("attackdamage"), "AttackDamage");
        assert_eq!(normalize_stat_key("attackspeed"), "AttackSpeed");
        assert_eq!(normalize_stat_key("movespeed"), "MoveSpeed");
        assert_eq!(normalize_stat_key("mp"), "Mana");
        assert_eq!(normalize_stat_key("crit"), "CritChance");
    }

    #[test]
    fn item_keys() {
        assert_eq!(normalize_stat_key("FlatHPPoolMod"), "Health");
        assert_eq!(normalize_stat_key("FlatPhysicalDamageMod"), "AttackDamage");
        assert_eq!(normalize_stat_key("FlatMagicDamageMod"), "FlatMagicDamageMod");
        assert_eq!(normalize_stat_key("FlatMovementSpeedMod"), "MoveSpeed");
        assert_eq!(normalize_stat_key("FlatCritChanceMod"), "CritChance");
        assert_eq!(normalize_stat_key("FlatSpellBlockMod"), "MagicResist");
    }

    #[test]
    fn case_variants_agree() {
        assert_eq!(normalize_stat_key("ArMoR"), "Armor");
        assert_eq!(normalize_stat_key("armor"), "Armor");
        assert_eq!(normalize_stat_key("ARMORPERLEVEL"), "Armor");
    }

    #[test]
    fn priority_order_shadows_later_rows() {
        assert_eq!(normalize_stat_key("hpregen"), "Health");
        assert_eq!(normalize_stat_key("mpregen"), "Mana");
        assert_eq!(normalize_stat_key("critdamage"), "CritChance");
        assert_eq!(normalize_stat_key("FlatCritDamageMod"), "CritChance");
    }

    #[test]
    fn unmapped_and_blank_keys_pass_through() {
        assert_eq!(normalize_stat_key("attackrange"), "attackrange");
        assert_eq!(normalize_stat_key(""), "");
        assert_eq!(normalize_stat_key("   "), "   ");
    }

    #[test]
    fn duplicate_synonyms_are_summed() {
        let mut raw = BTreeMap::new();
        raw.insert("hp".to_string(), 5.0);
        raw.insert("FlatHPPoolMod".to_string(), 45.0);
        let m = normalize_stats(&raw);
        assert_eq!(m.get("Health"), 50.0);
        assert_eq!(m.len(), 1);
    }

    proptest! {
        #[test]
        fn normalization_is_deterministic(key in "[a-zA-Z]{0,24}") {
            prop_assert_eq!(normalize_stat_key(&key), normalize_stat_key(&key));
        }

        #[test]
        fn normalization_ignores_case(key in "[a-zA-Z]{1,24}") {
            let lower = normalize_stat_key(&key.to_lowercase());
            let upper = normalize_stat_key(&key.to_uppercase());
            match canonical_stat_for(&key) {
                Some(_) => prop_assert_eq!(lower, upper),
                None => {
                    prop_assert_eq!(lower, key.to_lowercase());
                    prop_assert_eq!(upper, key.to_uppercase());
                }
            }
        }
    }
}
