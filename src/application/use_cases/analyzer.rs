// ============================================================
// ANALYZER USE CASE
// ============================================================
// Dataset-level summary over the cleaned collection

use std::collections::HashSet;

use super::aggregator::aggregate;
use crate::domain::store::{DatasetSummary, Dimension, StoreRecord};

/// Compute the dataset summary
///
/// Store and country counts are over distinct values (records without a
/// store number do not contribute a store count). Top country/city come
/// from the aggregator, so ties resolve the same way everywhere.
pub fn summarize(records: &[StoreRecord]) -> DatasetSummary {
    let store_numbers: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.store_number.as_deref())
        .collect();
    let countries: HashSet<&str> = records.iter().map(|r| r.country.as_str()).collect();

    let top_country = aggregate(records, Dimension::Country)
        .into_iter()
        .next()
        .map(|s| s.key);
    let top_city = aggregate(records, Dimension::City)
        .into_iter()
        .next()
        .map(|s| s.key);

    DatasetSummary {
        total_stores: store_numbers.len(),
        total_countries: countries.len(),
        top_country,
        top_city,
    }
}
