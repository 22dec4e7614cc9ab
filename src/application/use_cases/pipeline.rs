// ============================================================
// PIPELINE USE CASE
// ============================================================
// Orchestrate load -> clean -> write -> subset -> write ->
// aggregate -> summarize for one run

use std::path::Path;

use super::aggregator::{aggregate, aggregate_all};
use super::analyzer::summarize;
use super::cleaner::{Cleaner, CleaningOptions};
use super::subset::extract_subset;
use crate::domain::error::Result;
use crate::domain::store::{AggregateStats, CleaningReport, DatasetSummary, Dimension};
use crate::infrastructure::config::Settings;
use crate::infrastructure::csv::{write_records, StoreCsvReader};

/// Everything one run produced, for the caller to log and render from
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub report: CleaningReport,
    pub summary: DatasetSummary,
    pub subset_len: usize,

    /// Cleaned-collection aggregates backing the global charts
    pub cleaned_by_country: Vec<AggregateStats>,
    pub cleaned_by_city: Vec<AggregateStats>,

    /// Subset aggregates, one list per dimension
    pub subset_aggregates: Vec<(Dimension, Vec<AggregateStats>)>,
}

impl PipelineOutcome {
    /// Subset stats for one dimension (empty when the subset is empty)
    pub fn subset_stats(&self, dimension: Dimension) -> &[AggregateStats] {
        self.subset_aggregates
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, stats)| stats.as_slice())
            .unwrap_or(&[])
    }
}

/// Pipeline use case
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the pipeline to completion
    ///
    /// Fatal only on IO failure; row-level problems end up in the report.
    /// Repeated runs over unchanged input overwrite the same outputs
    /// byte-for-byte.
    pub fn run(&self) -> Result<PipelineOutcome> {
        let loaded = StoreCsvReader::new().load_file(Path::new(&self.settings.input_path))?;
        tracing::info!(
            "Loaded {} rows from {} ({} malformed skipped)",
            loaded.rows.len(),
            self.settings.input_path,
            loaded.malformed_rows
        );

        let cleaner = Cleaner::new(CleaningOptions {
            fill_missing_city: self.settings.fill_missing_city,
            canonical_brand: self.settings.canonical_brand.clone(),
        });
        let (cleaned, report) = cleaner.clean(&loaded.rows, loaded.malformed_rows);

        write_records(Path::new(&self.settings.cleaned_output_path), &cleaned)?;
        tracing::info!(
            "Wrote {} cleaned records to {}",
            cleaned.len(),
            self.settings.cleaned_output_path
        );

        let target = self.settings.normalized_target_country();
        let subset = extract_subset(&cleaned, &target);
        if subset.is_empty() {
            tracing::info!("No records matched country {}", target);
        }

        write_records(Path::new(&self.settings.subset_output_path), &subset)?;
        tracing::info!(
            "Wrote {} {} records to {}",
            subset.len(),
            target,
            self.settings.subset_output_path
        );

        Ok(PipelineOutcome {
            summary: summarize(&cleaned),
            subset_len: subset.len(),
            cleaned_by_country: aggregate(&cleaned, Dimension::Country),
            cleaned_by_city: aggregate(&cleaned, Dimension::City),
            subset_aggregates: aggregate_all(&subset),
            report,
        })
    }
}
