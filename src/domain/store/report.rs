// ============================================================
// CLEANING REPORT
// ============================================================
// Per-run accounting of what the cleaner kept, dropped, and why

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why a row was rejected during cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Latitude/longitude present but not parseable as numbers
    InvalidCoordinates,

    /// Country, city, or the coordinate pair absent
    MissingRequiredField,

    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    CoordinateOutOfRange,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidCoordinates => "invalid-coordinates",
            RejectReason::MissingRequiredField => "missing-required-field",
            RejectReason::CoordinateOutOfRange => "coordinate-out-of-range",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rejected row: where it was and why it was dropped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowRejection {
    pub row_index: usize,
    pub reason: RejectReason,
}

/// Accounting for a single cleaning run
///
/// Invariant: `retained + duplicates + rejected() == total_rows`. Rows the
/// loader could not parse as rows at all are carried in `malformed_rows` and
/// excluded from that identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Rows that parsed as rows and entered cleaning
    pub total_rows: usize,

    /// Rows skipped by the loader (wrong column count, bad encoding)
    pub malformed_rows: usize,

    /// Later occurrences of an already-seen store number
    pub duplicates: usize,

    /// Rejected rows with their reasons, in file order
    pub rejections: Vec<RowRejection>,

    /// Rows that survived into the cleaned collection
    pub retained: usize,

    /// Per-field absent-value counts over all parsed rows
    pub missing_by_field: BTreeMap<String, usize>,
}

impl CleaningReport {
    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }

    /// Check the report identity
    pub fn is_balanced(&self) -> bool {
        self.retained + self.duplicates + self.rejected() == self.total_rows
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Cleaning report:\n\
             - Total rows: {}\n\
             - Malformed (skipped by loader): {}\n\
             - Duplicates removed: {}\n\
             - Rejected: {}\n\
             - Retained: {}",
            self.total_rows,
            self.malformed_rows,
            self.duplicates,
            self.rejected(),
            self.retained
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_identity() {
        let report = CleaningReport {
            total_rows: 10,
            malformed_rows: 2,
            duplicates: 3,
            rejections: vec![
                RowRejection {
                    row_index: 4,
                    reason: RejectReason::MissingRequiredField,
                },
                RowRejection {
                    row_index: 7,
                    reason: RejectReason::CoordinateOutOfRange,
                },
            ],
            retained: 5,
            missing_by_field: BTreeMap::new(),
        };

        assert!(report.is_balanced());
        assert_eq!(report.rejected(), 2);
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(
            RejectReason::InvalidCoordinates.to_string(),
            "invalid-coordinates"
        );
        assert_eq!(
            RejectReason::MissingRequiredField.as_str(),
            "missing-required-field"
        );
    }
}
