// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV reading with encoding fallback, and schema-shaped writing

mod reader;
mod writer;

pub use reader::{LoadedRows, StoreCsvReader};
pub use writer::{write_records, OUTPUT_HEADERS};
