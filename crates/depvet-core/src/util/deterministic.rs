//! Deterministic ordering helpers.
//!
//! Report output must be byte-identical for identical input trees, so every
//! collection that crosses into the report is sorted here. Ordering is part
//! of the report contract and must not change without a schema version bump.

use crate::signals::model::SignalKind;

/// Sort hits by signal name and drop duplicates.
///
/// `SignalKind`'s derived `Ord` follows the alphabetical order of the
/// serialized names, so this renders hit lists the way they appear in the
/// report.
pub fn sort_hits(hits: &mut Vec<SignalKind>) {
    hits.sort();
    hits.dedup();
}
