// ============================================================
// AGGREGATOR USE CASE
// ============================================================
// Per-dimension counts and percentage shares over a record
// collection

use std::collections::HashMap;

use crate::domain::store::{AggregateStats, Dimension, StoreRecord, UNKNOWN_KEY};

/// Aggregate a collection along one dimension
///
/// Records whose key field is absent land in the `(unknown)` bucket, so
/// counts always sum to the collection total. Entries are sorted by
/// descending count, ties broken by ascending key. An empty collection
/// yields an empty result.
pub fn aggregate(records: &[StoreRecord], dimension: Dimension) -> Vec<AggregateStats> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let key = dimension.key_of(record).unwrap_or(UNKNOWN_KEY);
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    let total = records.len();
    let mut stats: Vec<AggregateStats> = counts
        .into_iter()
        .map(|(key, count)| AggregateStats {
            key,
            count,
            percentage: percentage_of(count, total),
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    stats
}

/// Aggregate a collection along every dimension
pub fn aggregate_all(records: &[StoreRecord]) -> Vec<(Dimension, Vec<AggregateStats>)> {
    Dimension::all()
        .into_iter()
        .map(|dimension| (dimension, aggregate(records, dimension)))
        .collect()
}

/// count / total x 100, rounded half-up to two decimals
///
/// f64::round is half-away-from-zero; counts are non-negative, so this is
/// half-up. Per-entry rounding means a dimension's percentages can sum to
/// 100.0 plus or minus a few hundredths.
fn percentage_of(count: usize, total: usize) -> f64 {
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
