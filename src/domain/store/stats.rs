// ============================================================
// AGGREGATE STATISTICS
// ============================================================
// Grouping dimensions and per-key count/percentage results

use super::StoreRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket label for records whose grouping field is absent
pub const UNKNOWN_KEY: &str = "(unknown)";

/// A grouping dimension over store records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Country,
    Province,
    City,
    Ownership,
}

impl Dimension {
    /// All dimensions the pipeline aggregates by
    pub fn all() -> [Dimension; 4] {
        [
            Dimension::Country,
            Dimension::Province,
            Dimension::City,
            Dimension::Ownership,
        ]
    }

    /// Extract this dimension's key from a record, if present
    pub fn key_of<'a>(&self, record: &'a StoreRecord) -> Option<&'a str> {
        match self {
            Dimension::Country => Some(record.country.as_str()),
            Dimension::Province => record.state_province.as_deref(),
            Dimension::City => Some(record.city.as_str()),
            Dimension::Ownership => record.ownership.as_ref().map(|o| o.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::Province => "province",
            Dimension::City => "city",
            Dimension::Ownership => "ownership",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Count and share of one grouping-key value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub key: String,
    pub count: usize,

    /// count / collection-total x 100, rounded half-up to two decimals
    pub percentage: f64,
}
