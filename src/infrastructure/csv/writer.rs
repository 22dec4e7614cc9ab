// ============================================================
// CSV WRITER
// ============================================================
// Write cleaned/subset record collections back out under the
// canonical schema header

use std::path::Path;

use crate::domain::error::AppError;
use crate::domain::store::StoreRecord;

/// Canonical output header, fixed schema order
pub const OUTPUT_HEADERS: [&str; 13] = [
    "Brand",
    "Store Number",
    "Store Name",
    "Ownership Type",
    "Street Address",
    "City",
    "State/Province",
    "Country",
    "Postcode",
    "Phone Number",
    "Timezone",
    "Longitude",
    "Latitude",
];

/// Write a record collection to `path`, overwriting any existing file
///
/// Absent fields are written as empty strings. Row order is preserved.
pub fn write_records(path: &Path, records: &[StoreRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::IoError(format!("Failed to open {}: {}", path.display(), e)))?;

    writer.write_record(OUTPUT_HEADERS)?;

    for record in records {
        let longitude = record.coordinates.longitude.to_string();
        let latitude = record.coordinates.latitude.to_string();

        writer.write_record([
            record.brand.as_deref().unwrap_or(""),
            record.store_number.as_deref().unwrap_or(""),
            record.store_name.as_deref().unwrap_or(""),
            record.ownership.as_ref().map(|o| o.as_str()).unwrap_or(""),
            record.street_address.as_deref().unwrap_or(""),
            record.city.as_str(),
            record.state_province.as_deref().unwrap_or(""),
            record.country.as_str(),
            record.postcode.as_deref().unwrap_or(""),
            record.phone_number.as_deref().unwrap_or(""),
            record.timezone.as_deref().unwrap_or(""),
            longitude.as_str(),
            latitude.as_str(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}
