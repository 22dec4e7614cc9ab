// ============================================================
// DATASET SUMMARY
// ============================================================

use serde::{Deserialize, Serialize};

/// Dataset-level figures computed over the cleaned collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Distinct store numbers
    pub total_stores: usize,

    /// Distinct country codes
    pub total_countries: usize,

    /// Country with the most stores
    pub top_country: Option<String>,

    /// City with the most stores
    pub top_city: Option<String>,
}

impl DatasetSummary {
    /// Get human-readable summary
    pub fn format(&self) -> String {
        match (&self.top_country, &self.top_city) {
            (Some(country), Some(city)) => format!(
                "{} stores across {} countries and regions; most stores in {} (top city: {})",
                self.total_stores, self.total_countries, country, city
            ),
            _ => format!(
                "{} stores across {} countries and regions",
                self.total_stores, self.total_countries
            ),
        }
    }
}
