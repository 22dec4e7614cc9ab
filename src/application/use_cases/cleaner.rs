// ============================================================
// CLEANER USE CASE
// ============================================================
// Parse, validate, deduplicate, and normalize raw rows into the
// cleaned collection plus a cleaning report

use std::collections::HashSet;

use crate::domain::store::{
    CleaningReport, Coordinates, Ownership, RawRow, RejectReason, RowRejection, StoreRecord,
};

/// Schema fields tracked by the missing-value profile
const SCHEMA_FIELDS: [&str; 13] = [
    "brand",
    "store_number",
    "store_name",
    "ownership_type",
    "street_address",
    "city",
    "state_province",
    "country",
    "postcode",
    "phone_number",
    "timezone",
    "longitude",
    "latitude",
];

/// Knobs the cleaner takes from settings
#[derive(Debug, Clone)]
pub struct CleaningOptions {
    /// Fill an absent city from state/province before validation
    pub fill_missing_city: bool,

    /// When set, every record's brand is replaced with this value
    pub canonical_brand: Option<String>,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            fill_missing_city: true,
            canonical_brand: None,
        }
    }
}

/// Cleaning use case
pub struct Cleaner {
    options: CleaningOptions,
}

impl Cleaner {
    pub fn new(options: CleaningOptions) -> Self {
        Self { options }
    }

    /// Clean the raw row sequence
    ///
    /// Returns the cleaned collection (original row order preserved) and the
    /// report. `malformed_rows` is the loader's skip count, carried into the
    /// report unchanged. Side-effect-free: writing the cleaned file is the
    /// caller's job.
    pub fn clean(
        &self,
        rows: &[RawRow],
        malformed_rows: usize,
    ) -> (Vec<StoreRecord>, CleaningReport) {
        let mut report = CleaningReport {
            total_rows: rows.len(),
            malformed_rows,
            ..CleaningReport::default()
        };

        for field in SCHEMA_FIELDS {
            report.missing_by_field.insert(field.to_string(), 0);
        }

        let mut cleaned = Vec::new();
        let mut seen_store_numbers: HashSet<String> = HashSet::new();

        for row in rows {
            for field in SCHEMA_FIELDS {
                if row.get(field).is_none() {
                    if let Some(count) = report.missing_by_field.get_mut(field) {
                        *count += 1;
                    }
                }
            }

            let record = match self.parse_row(row) {
                Ok(record) => record,
                Err(reason) => {
                    tracing::debug!("Rejecting row {}: {}", row.index, reason);
                    report.rejections.push(RowRejection {
                        row_index: row.index,
                        reason,
                    });
                    continue;
                }
            };

            // First-seen wins; rows without a store number never collide
            if let Some(store_number) = &record.store_number {
                if !seen_store_numbers.insert(store_number.clone()) {
                    report.duplicates += 1;
                    continue;
                }
            }

            cleaned.push(record);
        }

        report.retained = cleaned.len();
        (cleaned, report)
    }

    /// Parse and validate one raw row
    fn parse_row(&self, row: &RawRow) -> Result<StoreRecord, RejectReason> {
        let raw_latitude = row.get("latitude");
        let raw_longitude = row.get("longitude");

        // A present-but-unparseable pair is its own reject reason,
        // distinct from an absent one
        let coordinates = match (raw_latitude, raw_longitude) {
            (Some(lat), Some(lon)) => {
                let latitude = lat
                    .parse::<f64>()
                    .map_err(|_| RejectReason::InvalidCoordinates)?;
                let longitude = lon
                    .parse::<f64>()
                    .map_err(|_| RejectReason::InvalidCoordinates)?;
                Some(Coordinates::new(latitude, longitude))
            }
            _ => None,
        };

        let city = row.get("city").or_else(|| {
            if self.options.fill_missing_city {
                row.get("state_province")
            } else {
                None
            }
        });

        let (country, city, coordinates) = match (row.get("country"), city, coordinates) {
            (Some(country), Some(city), Some(coordinates)) => (country, city, coordinates),
            _ => return Err(RejectReason::MissingRequiredField),
        };

        if !coordinates.in_range() {
            return Err(RejectReason::CoordinateOutOfRange);
        }

        let brand = match &self.options.canonical_brand {
            Some(canonical) => Some(canonical.clone()),
            None => row.get("brand").map(str::to_string),
        };

        Ok(StoreRecord {
            brand,
            store_number: row.get("store_number").map(str::to_string),
            store_name: row.get("store_name").map(str::to_string),
            ownership: row.get("ownership_type").map(Ownership::parse),
            street_address: row.get("street_address").map(str::to_string),
            city: city.to_string(),
            state_province: row.get("state_province").map(str::to_string),
            country: country.to_uppercase(),
            postcode: row.get("postcode").map(str::to_string),
            phone_number: row.get("phone_number").map(str::to_string),
            timezone: row.get("timezone").map(str::to_string),
            coordinates,
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleaningOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, pairs: &[(&str, &str)]) -> RawRow {
        RawRow::new(
            index,
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    fn store_row(index: usize, store_no: &str, country: &str, city: &str, lat: &str, lon: &str) -> RawRow {
        row(
            index,
            &[
                ("Store Number", store_no),
                ("Country", country),
                ("City", city),
                ("Latitude", lat),
                ("Longitude", lon),
            ],
        )
    }

    #[test]
    fn test_spec_example() {
        let rows = vec![
            store_row(0, "1", "us", "Seattle", "47.6", "-122.3"),
            store_row(1, "1", "US", "Seattle", "47.6", "-122.3"),
            store_row(2, "2", "cn", "Shanghai", "200", "121"),
        ];

        let (cleaned, report) = Cleaner::default().clean(&rows, 0);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].store_number.as_deref(), Some("1"));
        assert_eq!(cleaned[0].country, "US");
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.rejected(), 1);
        assert_eq!(
            report.rejections[0].reason,
            RejectReason::CoordinateOutOfRange
        );
        assert_eq!(report.retained, 1);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_dedup_is_stable_first_seen_wins() {
        let rows = vec![
            store_row(0, "7", "US", "Seattle", "47.6", "-122.3"),
            store_row(1, "7", "US", "Portland", "45.5", "-122.6"),
        ];

        let (cleaned, report) = Cleaner::default().clean(&rows, 0);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].city, "Seattle");
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn test_absent_store_numbers_never_collide() {
        let rows = vec![
            store_row(0, "", "US", "Seattle", "47.6", "-122.3"),
            store_row(1, "", "US", "Portland", "45.5", "-122.6"),
        ];

        let (cleaned, report) = Cleaner::default().clean(&rows, 0);

        assert_eq!(cleaned.len(), 2);
        assert_eq!(report.duplicates, 0);
    }

    #[test]
    fn test_unparseable_coordinates_rejected() {
        let rows = vec![store_row(0, "1", "US", "Seattle", "abc", "-122.3")];

        let (cleaned, report) = Cleaner::default().clean(&rows, 0);

        assert!(cleaned.is_empty());
        assert_eq!(
            report.rejections[0].reason,
            RejectReason::InvalidCoordinates
        );
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let rows = vec![
            row(
                0,
                &[("Store Number", "1"), ("City", "Seattle"), ("Latitude", "47.6"), ("Longitude", "-122.3")],
            ),
            row(1, &[]),
        ];

        let (cleaned, report) = Cleaner::default().clean(&rows, 0);

        assert!(cleaned.is_empty());
        assert_eq!(report.rejected(), 2);
        assert!(report
            .rejections
            .iter()
            .all(|r| r.reason == RejectReason::MissingRequiredField));
    }

    #[test]
    fn test_city_backfilled_from_state_province() {
        let rows = vec![row(
            0,
            &[
                ("Country", "EG"),
                ("State/Province", "Cairo"),
                ("Latitude", "30.0"),
                ("Longitude", "31.2"),
            ],
        )];

        let (cleaned, _) = Cleaner::default().clean(&rows, 0);
        assert_eq!(cleaned[0].city, "Cairo");

        let strict = Cleaner::new(CleaningOptions {
            fill_missing_city: false,
            canonical_brand: None,
        });
        let (cleaned, report) = strict.clean(&rows, 0);
        assert!(cleaned.is_empty());
        assert_eq!(
            report.rejections[0].reason,
            RejectReason::MissingRequiredField
        );
    }

    #[test]
    fn test_brand_unification() {
        let cleaner = Cleaner::new(CleaningOptions {
            fill_missing_city: true,
            canonical_brand: Some("Starbucks".to_string()),
        });

        let mut raw = store_row(0, "1", "US", "Seattle", "47.6", "-122.3");
        raw.fields
            .insert("brand".to_string(), "Teavana".to_string());

        let (cleaned, _) = cleaner.clean(&[raw], 0);
        assert_eq!(cleaned[0].brand.as_deref(), Some("Starbucks"));
    }

    #[test]
    fn test_normalization_uppercases_country_and_parses_ownership() {
        let mut raw = store_row(0, "1", "us", "Seattle", "47.6", "-122.3");
        raw.fields
            .insert("ownership_type".to_string(), "company owned".to_string());

        let (cleaned, _) = Cleaner::default().clean(&[raw], 0);

        assert_eq!(cleaned[0].country, "US");
        assert_eq!(cleaned[0].ownership, Some(Ownership::CompanyOwned));
    }

    #[test]
    fn test_missing_profile_counts_absent_fields() {
        let rows = vec![
            store_row(0, "1", "US", "Seattle", "47.6", "-122.3"),
            store_row(1, "2", "US", "", "47.7", "-122.4"),
        ];

        let (_, report) = Cleaner::new(CleaningOptions {
            fill_missing_city: false,
            canonical_brand: None,
        })
        .clean(&rows, 0);

        assert_eq!(report.missing_by_field["city"], 1);
        assert_eq!(report.missing_by_field["country"], 0);
        assert_eq!(report.missing_by_field["phone_number"], 2);
    }

    #[test]
    fn test_malformed_count_carried_through() {
        let (_, report) = Cleaner::default().clean(&[], 4);
        assert_eq!(report.malformed_rows, 4);
        assert!(report.is_balanced());
    }
}
