// ============================================================
// SUBSET EXTRACTOR
// ============================================================
// Pure country filter over the cleaned collection

use crate::domain::store::StoreRecord;

/// Extract the ordered sub-sequence of records for one country
///
/// The match is case-insensitive against the already-uppercased country
/// field. An empty result is a valid outcome, not an error.
pub fn extract_subset(records: &[StoreRecord], target_country: &str) -> Vec<StoreRecord> {
    let target = target_country.to_uppercase();

    records
        .iter()
        .filter(|record| record.country == target)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::Coordinates;

    fn record(store_number: &str, country: &str) -> StoreRecord {
        StoreRecord {
            brand: None,
            store_number: Some(store_number.to_string()),
            store_name: None,
            ownership: None,
            street_address: None,
            city: "Somewhere".to_string(),
            state_province: None,
            country: country.to_string(),
            postcode: None,
            phone_number: None,
            timezone: None,
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            record("1", "CN"),
            record("2", "US"),
            record("3", "CN"),
            record("4", "JP"),
        ];

        let subset = extract_subset(&records, "cn");

        let numbers: Vec<_> = subset
            .iter()
            .map(|r| r.store_number.as_deref().unwrap())
            .collect();
        assert_eq!(numbers, vec!["1", "3"]);
        assert!(subset.iter().all(|r| r.country == "CN"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = vec![record("1", "US")];
        assert!(extract_subset(&records, "CN").is_empty());
    }
}
