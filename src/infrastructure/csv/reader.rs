// ============================================================
// CSV READER
// ============================================================
// Load raw store rows with encoding fallback and error handling

use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::error::AppError;
use crate::domain::store::RawRow;

/// Result of loading one input file
#[derive(Debug, Clone)]
pub struct LoadedRows {
    /// Rows in file order, header excluded
    pub rows: Vec<RawRow>,

    /// Records skipped because they did not parse as rows
    /// (wrong column count, unreadable content)
    pub malformed_rows: usize,
}

/// CSV reader for the store dataset
pub struct StoreCsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for StoreCsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl StoreCsvReader {
    /// Create a new reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a CSV file and return its rows
    ///
    /// Fails only if the file cannot be opened or read, or carries no header
    /// row. Individual malformed records are skipped and counted, never
    /// fatal.
    pub fn load_file(&self, path: &Path) -> Result<LoadedRows, AppError> {
        let content = read_with_encoding_fallback(path)?;
        self.load_content(&content)
    }

    /// Load CSV rows from string content
    pub fn load_content(&self, content: &str) -> Result<LoadedRows, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::IoError(format!("Failed to read CSV header row: {}", e)))?
            .clone();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AppError::IoError(
                "Input file is empty or has no header row".to_string(),
            ));
        }

        let header_names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        let mut malformed_rows = 0usize;
        let mut index = 0usize;

        for result in reader.records() {
            match result {
                Ok(record) => {
                    let pairs = header_names
                        .iter()
                        .zip(record.iter())
                        .map(|(name, value)| (name.clone(), value.to_string()));
                    rows.push(RawRow::new(index, pairs));
                    index += 1;
                }
                Err(err) => {
                    malformed_rows += 1;
                    tracing::debug!("Skipping malformed CSV record: {}", err);
                }
            }
        }

        Ok(LoadedRows {
            rows,
            malformed_rows,
        })
    }
}

/// Read a file as text, falling back to a lossy Windows-1252 decode
/// when the bytes are not valid UTF-8
fn read_with_encoding_fallback(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    match std::str::from_utf8(&bytes) {
        Ok(content) => Ok(content.to_string()),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_simple_content() {
        let content = "Brand,Store Number,City\nStarbucks,100-1,Seattle\nStarbucks,200-2,Shanghai";
        let loaded = StoreCsvReader::new().load_content(content).unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.malformed_rows, 0);
        assert_eq!(loaded.rows[0].get("store_number"), Some("100-1"));
        assert_eq!(loaded.rows[1].get("city"), Some("Shanghai"));
    }

    #[test]
    fn test_reordered_columns() {
        let content = "City,Brand\nSeattle,Starbucks";
        let loaded = StoreCsvReader::new().load_content(content).unwrap();

        assert_eq!(loaded.rows[0].get("brand"), Some("Starbucks"));
        assert_eq!(loaded.rows[0].get("city"), Some("Seattle"));
    }

    #[test]
    fn test_malformed_rows_counted_not_fatal() {
        let content = "Brand,Store Number,City\nStarbucks,100-1,Seattle\nonly-one-field\nStarbucks,200-2,Shanghai";
        let loaded = StoreCsvReader::new().load_content(content).unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.malformed_rows, 1);
        // Indices stay contiguous over the rows that survived
        assert_eq!(loaded.rows[1].index, 1);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = StoreCsvReader::new().load_content("").unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = StoreCsvReader::new()
            .load_file(Path::new("/nonexistent/stores.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_non_utf8_file_decoded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "München" in Windows-1252: fc is not valid UTF-8
        file.write_all(b"Brand,City\nStarbucks,M\xfcnchen")
            .unwrap();

        let loaded = StoreCsvReader::new().load_file(file.path()).unwrap();
        assert_eq!(loaded.rows[0].get("city"), Some("München"));
    }
}
