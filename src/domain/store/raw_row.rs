// ============================================================
// RAW ROW TYPES
// ============================================================
// Header-keyed rows produced by the loader, before cleaning

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single input row, keyed by cleaned header name
///
/// Values are stored trimmed; fields that were missing or blank after
/// trimming are not present in the map at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    /// Row index (0-based, file order, header excluded)
    pub index: usize,

    /// Cleaned header name -> trimmed value
    pub fields: HashMap<String, String>,
}

impl RawRow {
    /// Create a new raw row from (header, value) pairs
    ///
    /// Blank values are dropped so that `get` only ever returns real content.
    pub fn new(index: usize, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let fields = pairs
            .into_iter()
            .filter_map(|(name, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((clean_header_name(&name), trimmed.to_string()))
                }
            })
            .collect();

        Self { index, fields }
    }

    /// Look up a field by cleaned header name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether the row carries no usable values at all
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Clean a header name for keyed lookup
/// Replace special characters with underscores, keep only alphanumeric
pub fn clean_header_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_header_name() {
        assert_eq!(clean_header_name("Store Number"), "store_number");
        assert_eq!(clean_header_name("State/Province"), "state_province");
        assert_eq!(clean_header_name("  Brand "), "brand");
    }

    #[test]
    fn test_blank_values_dropped() {
        let row = RawRow::new(
            0,
            vec![
                ("City".to_string(), "  Seattle ".to_string()),
                ("Postcode".to_string(), "   ".to_string()),
            ],
        );

        assert_eq!(row.get("city"), Some("Seattle"));
        assert_eq!(row.get("postcode"), None);
        assert!(!row.is_blank());
    }
}
