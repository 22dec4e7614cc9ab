// ============================================================
// SETTINGS
// ============================================================
// Run configuration, read once from a JSON settings file and
// validated before the pipeline touches any data file

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};

fn default_charts_dir() -> String {
    "charts".to_string()
}

fn default_top_n() -> usize {
    10
}

fn default_fill_missing_city() -> bool {
    true
}

/// Run configuration for the pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Path of the raw input dataset
    #[validate(length(min = 1))]
    pub input_path: String,

    /// Where the cleaned collection is written
    #[validate(length(min = 1))]
    pub cleaned_output_path: String,

    /// Where the target-country subset is written
    #[validate(length(min = 1))]
    pub subset_output_path: String,

    /// Two-letter country code; matched case-insensitively
    #[validate(length(min = 2, max = 2))]
    pub target_country: String,

    /// Directory chart files are written into (default: charts)
    #[serde(default = "default_charts_dir")]
    pub charts_dir: String,

    /// How many entries each chart shows (default: 10)
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1))]
    pub top_n: usize,

    /// Fill an absent city from state/province before validation
    /// (default: true)
    #[serde(default = "default_fill_missing_city")]
    pub fill_missing_city: bool,

    /// When set, every record's brand is replaced with this value
    #[serde(default)]
    pub canonical_brand: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read settings {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            AppError::ConfigError(format!("Invalid settings {}: {}", path.display(), e))
        })?;

        Ok(settings)
    }

    /// Validate settings values
    ///
    /// Called before any pipeline file access so that a bad configuration
    /// never fails mid-run.
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        if !self
            .target_country
            .chars()
            .all(|c| c.is_ascii_alphabetic())
        {
            return Err(AppError::ConfigError(format!(
                "target_country must be a 2-letter code, got {:?}",
                self.target_country
            )));
        }

        Ok(())
    }

    /// Target country uppercased for matching against cleaned records
    pub fn normalized_target_country(&self) -> String {
        self.target_country.to_uppercase()
    }
}
