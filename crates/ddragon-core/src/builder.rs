//! Canonical record building.
//!
//! Turns raw manifest entries (plus optional detail documents) into
//! [`Champion`] and [`Item`] records. Everything here runs on in-memory data;
//! fetchers do the I/O and call in once documents are decoded.

use crate::model::{
    Ability, Champion, ChampionDetail, Item, ItemDetail, RawChampion, RawChampionDetail, RawItem,
    StatMap, TagSet,
};
use crate::normalize::{
    derive_tags_from_stats, detect_resources_from_raw_keys, normalize_stats, resource_for_partype,
    resource_tag,
};

pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";
pub const NO_DESCRIPTION: &str = "No description available";

/// Build a champion record from its manifest entry.
///
/// The returned record carries exactly the canonical stat keys; raw keys
/// with no canonical mapping (`attackrange`, ...) are dropped.
pub fn build_champion(entity_id: &str, raw: &RawChampion) -> Champion {
    let name = raw
        .name
        .clone()
        .or_else(|| raw.id.clone())
        .unwrap_or_else(|| entity_id.to_string());

    let mut tags: TagSet = raw.tags.iter().flatten().cloned().collect();

    let stats = match &raw.stats {
        Some(block) => {
            let stats = normalize_stats(block).canonical_only();
            tags.union_with(derive_tags_from_stats(&stats));
            tags.union_with(detect_resources_from_raw_keys(block.keys()));
            stats
        }
        None => StatMap::new().canonical_only(),
    };

    Champion {
        id: raw.id.clone().unwrap_or_else(|| entity_id.to_string()),
        name,
        title: raw.title.clone().unwrap_or_default(),
        description: raw.blurb.clone().unwrap_or_default(),
        stats,
        tags,
    }
}

/// Overlay authoritative detail data onto a champion record.
///
/// The detail `partype` replaces the heuristic tag for the same resource:
/// the tag spelled like the partype (ignoring case) and, when the partype
/// names a known resource, that resource's tag (`Rage` replaces
/// `Resource:Fury`). Tags for other resources are left alone.
pub fn apply_champion_detail(champion: &mut Champion, detail: &ChampionDetail) {
    let partype = detail.partype.trim();
    if !partype.is_empty() {
        if let Some(resource) = resource_for_partype(partype) {
            champion.tags.remove_ignore_case(&resource_tag(resource));
        }
        let tag = resource_tag(partype);
        champion.tags.remove_ignore_case(&tag);
        champion.tags.insert(tag);
    }

    if champion.title.is_empty() && !detail.title.is_empty() {
        champion.title = detail.title.clone();
    }
    if champion.description.is_empty() && !detail.lore.is_empty() {
        champion.description = detail.lore.clone();
    }
}

/// Build an item record from its manifest entry.
///
/// Missing name, description, and cost fall back to fixed defaults. Stats stay
/// sparse: only keys present in the source appear.
pub fn build_item(entity_id: &str, raw: &RawItem) -> Item {
    let mut tags: TagSet = raw.tags.iter().flatten().cloned().collect();

    let stats = match &raw.stats {
        Some(block) => {
            let stats = normalize_stats(block);
            tags.union_with(derive_tags_from_stats(&stats));
            tags.union_with(detect_resources_from_raw_keys(block.keys()));
            stats
        }
        None => StatMap::new(),
    };

    Item {
        id: entity_id.to_string(),
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
        description: raw
            .plaintext
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        cost: raw.gold.map(|g| g.total).unwrap_or(0),
        stats,
        tags,
    }
}

/// Convert a decoded `champion/<id>.json` entry into a detail document.
pub fn champion_detail_from_raw(entity_id: &str, raw: &RawChampionDetail) -> ChampionDetail {
    let mut abilities = Vec::new();

    if let Some(p) = &raw.passive {
        abilities.push(Ability {
            name: p.name.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            tooltip: String::new(),
        });
    }

    for s in raw.spells.iter().flatten() {
        abilities.push(Ability {
            name: s.name.clone().unwrap_or_default(),
            description: s.description.clone().unwrap_or_default(),
            tooltip: s.tooltip.clone().unwrap_or_default(),
        });
    }

    ChampionDetail {
        entity_id: raw.id.clone().unwrap_or_else(|| entity_id.to_string()),
        name: raw.name.clone().unwrap_or_default(),
        title: raw.title.clone().unwrap_or_default(),
        partype: raw.partype.clone().unwrap_or_default(),
        lore: raw.lore.clone().unwrap_or_default(),
        abilities,
    }
}

/// Item detail straight from the manifest entry; raw stat keys are kept.
pub fn item_detail_from_raw(entity_id: &str, raw: &RawItem) -> ItemDetail {
    ItemDetail {
        entity_id: entity_id.to_string(),
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
        plaintext: raw.plaintext.clone(),
        description: raw.description.clone(),
        gold: raw.gold,
        stats: raw.stats.clone().unwrap_or_default(),
        tags: raw.tags.clone().unwrap_or_default(),
    }
}
