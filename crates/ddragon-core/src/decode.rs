//! Typed JSON decoding for Data Dragon documents.
//!
//! Bodies are decoded straight into the `raw` model types. Shape mismatches,
//! empty manifests, and a detail file that does not contain the requested
//! entity all surface as `DdragonError::Decode`.

use serde::de::DeserializeOwned;

use crate::builder::champion_detail_from_raw;
use crate::errors::{DdragonError, DdragonResult};
use crate::model::{
    validate, ChampionDetail, ChampionManifest, ItemManifest, ManifestDocument,
    RawChampionDetail,
};
use crate::version::{require_kind, ManifestKind};

/// Decode a manifest envelope and check its `type` and entry count.
pub fn decode_manifest<T: DeserializeOwned>(
    body: &[u8],
    kind: ManifestKind,
) -> DdragonResult<ManifestDocument<T>> {
    let what = format!("{} manifest", kind.as_str());
    let doc: ManifestDocument<T> =
        serde_json::from_slice(body).map_err(|e| DdragonError::decode(&what, e))?;
    require_kind(&doc.schema_version, kind)?;
    validate::manifest_non_empty(&doc, &what)?;
    Ok(doc)
}

pub fn decode_champion_manifest(body: &[u8]) -> DdragonResult<ChampionManifest> {
    decode_manifest(body, ManifestKind::Champion)
}

pub fn decode_item_manifest(body: &[u8]) -> DdragonResult<ItemManifest> {
    decode_manifest(body, ManifestKind::Item)
}

/// Decode `champion/<id>.json` and pick the entry for `champion_id`.
///
/// The file normally holds exactly one entry under `data.<id>`; a lone entry
/// under a different key is accepted.
pub fn decode_champion_detail(body: &[u8], champion_id: &str) -> DdragonResult<ChampionDetail> {
    let what = format!("champion detail {champion_id}");
    let mut doc: ManifestDocument<RawChampionDetail> =
        decode_manifest(body, ManifestKind::Champion).map_err(|e| match e {
            DdragonError::Decode { reason, .. } => DdragonError::decode(&what, reason),
            other => other,
        })?;

    let raw = match doc.entries.remove(champion_id) {
        Some(raw) => raw,
        None if doc.entries.len() == 1 => doc
            .entries
            .into_values()
            .next()
            .ok_or_else(|| DdragonError::invariant("single-entry map yielded nothing"))?,
        None => {
            return Err(DdragonError::decode(
                &what,
                format!("document has no entry for {champion_id}"),
            ))
        }
    };

    Ok(champion_detail_from_raw(champion_id, &raw))
}
