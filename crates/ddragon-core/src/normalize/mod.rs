//! Stat normalization and tag derivation.
//!
//! Pure functions only:
//! - no I/O
//! - no state
//! - identical input yields identical output
//!
//! The heuristic tables are behavior. Their order is part of the contract and
//! overlapping patterns are resolved by position, not by specificity.

pub mod stat_keys;
pub mod tags;

pub use stat_keys::{canonical_stat_for, normalize_stat_key, normalize_stats, KEY_MAP};
pub use tags::{
    derive_tags_from_stats, detect_resources_from_raw_keys, resource_for_partype, resource_tag,
    RESOURCE_MAP, RESOURCE_TAG_PREFIX,
};
