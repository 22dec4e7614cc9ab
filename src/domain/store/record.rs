// ============================================================
// STORE RECORD TYPES
// ============================================================
// Data structures representing one cleaned retail store row

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic position of a store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether the pair falls inside the legal range
    /// (latitude [-90, 90], longitude [-180, 180])
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Ownership model of a store
///
/// Unrecognized input is preserved verbatim in `Other` rather than rejected;
/// ownership is not a required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    CompanyOwned,
    Licensed,
    JointVenture,
    Franchise,
    Other(String),
}

impl Ownership {
    /// Parse an ownership label, tolerating case and separator differences
    /// ("Company Owned", "company-owned", "COMPANY_OWNED" all match)
    pub fn parse(value: &str) -> Self {
        let folded: String = value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match folded.as_str() {
            "companyowned" => Ownership::CompanyOwned,
            "licensed" => Ownership::Licensed,
            "jointventure" => Ownership::JointVenture,
            "franchise" => Ownership::Franchise,
            _ => Ownership::Other(value.to_string()),
        }
    }

    /// Canonical label, as written to the cleaned output
    pub fn as_str(&self) -> &str {
        match self {
            Ownership::CompanyOwned => "Company Owned",
            Ownership::Licensed => "Licensed",
            Ownership::JointVenture => "Joint Venture",
            Ownership::Franchise => "Franchise",
            Ownership::Other(label) => label,
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One retail location after cleaning
///
/// City, country, and coordinates are required for a record to exist at all;
/// rows missing them are rejected by the cleaner and never reach this type.
/// Every other field uses `None` as the explicit absent marker (missing
/// column, or blank after trimming).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    pub brand: Option<String>,
    pub store_number: Option<String>,
    pub store_name: Option<String>,
    pub ownership: Option<Ownership>,
    pub street_address: Option<String>,
    pub city: String,
    pub state_province: Option<String>,
    /// Two-letter code, uppercased by the cleaner
    pub country: String,
    pub postcode: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: Option<String>,
    pub coordinates: Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_parse_variants() {
        assert_eq!(Ownership::parse("Company Owned"), Ownership::CompanyOwned);
        assert_eq!(Ownership::parse("company-owned"), Ownership::CompanyOwned);
        assert_eq!(Ownership::parse("JOINT_VENTURE"), Ownership::JointVenture);
        assert_eq!(Ownership::parse("Licensed"), Ownership::Licensed);
        assert_eq!(
            Ownership::parse("Co-op"),
            Ownership::Other("Co-op".to_string())
        );
    }

    #[test]
    fn test_ownership_round_trips_canonical_label() {
        assert_eq!(Ownership::parse("franchise").as_str(), "Franchise");
        assert_eq!(Ownership::parse("Co-op").as_str(), "Co-op");
    }

    #[test]
    fn test_coordinates_range() {
        assert!(Coordinates::new(47.6, -122.3).in_range());
        assert!(Coordinates::new(-90.0, 180.0).in_range());
        assert!(!Coordinates::new(200.0, 121.0).in_range());
        assert!(!Coordinates::new(47.6, -181.0).in_range());
    }
}
