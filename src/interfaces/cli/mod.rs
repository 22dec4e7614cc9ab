// ============================================================
// CLI INTERFACE
// ============================================================

use clap::Parser;

use crate::infrastructure::config::Settings;

/// Clean a global retail store dataset and report per-country aggregates
#[derive(Debug, Parser)]
#[command(name = "storeatlas", version)]
pub struct Cli {
    /// Path to the JSON settings file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Override the input dataset path from settings
    #[arg(long)]
    pub input: Option<String>,

    /// Override the target country code from settings
    #[arg(long)]
    pub target_country: Option<String>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,
}

impl Cli {
    /// Apply command-line overrides onto loaded settings
    ///
    /// Runs before settings validation, so an invalid override fails the
    /// same way an invalid settings file does.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(country) = &self.target_country {
            settings.target_country = country.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["storeatlas"]).unwrap();
        assert_eq!(cli.config, "config.json");
        assert_eq!(cli.input, None);
        assert!(!cli.no_charts);
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from([
            "storeatlas",
            "--input",
            "other.csv",
            "--target-country",
            "us",
            "--no-charts",
        ])
        .unwrap();

        let mut settings = Settings {
            input_path: "stores.csv".to_string(),
            cleaned_output_path: "cleaned.csv".to_string(),
            subset_output_path: "subset.csv".to_string(),
            target_country: "CN".to_string(),
            charts_dir: "charts".to_string(),
            top_n: 10,
            fill_missing_city: true,
            canonical_brand: None,
        };
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.input_path, "other.csv");
        assert_eq!(settings.target_country, "us");
        assert!(cli.no_charts);
    }
}
