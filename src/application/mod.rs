pub mod use_cases;

pub use use_cases::aggregator::{aggregate, aggregate_all};
pub use use_cases::analyzer::summarize;
pub use use_cases::cleaner::{Cleaner, CleaningOptions};
pub use use_cases::pipeline::{Pipeline, PipelineOutcome};
pub use use_cases::subset::extract_subset;
