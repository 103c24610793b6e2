use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why a data row was left out of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkipReason {
    /// Row is shorter than the column it needs
    MissingField { column: String },
    /// Field is not a decimal number
    InvalidNumber { column: String, value: String },
    /// Field parsed as NaN or infinity
    NonFinite { column: String },
    /// Row bytes are not UTF-8
    InvalidEncoding,
    /// Coordinates off the globe (strict mode only)
    OutOfRange,
}

impl SkipReason {
    /// Grouping key for report tallies, ignoring offending values
    pub fn category(&self) -> &'static str {
        match self {
            SkipReason::MissingField { .. } => "missing field",
            SkipReason::InvalidNumber { .. } => "invalid number",
            SkipReason::NonFinite { .. } => "non-finite number",
            SkipReason::InvalidEncoding => "invalid encoding",
            SkipReason::OutOfRange => "coordinates out of range",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField { column } => write!(f, "missing field '{}'", column),
            SkipReason::InvalidNumber { column, value } => {
                write!(f, "invalid number '{}' in '{}'", value, column)
            }
            SkipReason::NonFinite { column } => write!(f, "non-finite value in '{}'", column),
            SkipReason::InvalidEncoding => write!(f, "row is not valid UTF-8"),
            SkipReason::OutOfRange => write!(f, "coordinates out of range"),
        }
    }
}

/// Row accounting for one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub rows_read: usize,
    pub accepted: usize,
    pub skipped: BTreeMap<String, usize>,
    pub limit_reached: bool,
}

impl LoadReport {
    pub fn record_accepted(&mut self) {
        self.rows_read += 1;
        self.accepted += 1;
    }

    pub fn record_skipped(&mut self, reason: &SkipReason) {
        self.rows_read += 1;
        *self.skipped.entry(reason.category().to_string()).or_default() += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Load Summary:\n\
            - Rows read: {}\n\
            - Records accepted: {}\n\
            - Rows skipped: {}\n\
            - Stopped at limit: {}",
            self.rows_read,
            self.accepted,
            self.skipped_total(),
            if self.limit_reached { "yes" } else { "no" }
        );

        for (category, count) in &self.skipped {
            summary.push_str(&format!("\n  - {}: {}", category, count));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_tallies() {
        let mut report = LoadReport::default();
        report.record_accepted();
        report.record_skipped(&SkipReason::InvalidNumber {
            column: "latitude".to_string(),
            value: "abc".to_string(),
        });
        report.record_skipped(&SkipReason::InvalidNumber {
            column: "brightness".to_string(),
            value: "".to_string(),
        });
        report.record_skipped(&SkipReason::InvalidEncoding);

        assert_eq!(report.rows_read, 4);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.skipped_total(), 3);
        assert_eq!(report.skipped.get("invalid number"), Some(&2));
        assert_eq!(report.skipped.get("invalid encoding"), Some(&1));
    }

    #[test]
    fn test_summary_lists_categories() {
        let mut report = LoadReport::default();
        report.record_skipped(&SkipReason::MissingField {
            column: "acq_date".to_string(),
        });
        report.limit_reached = true;

        let summary = report.summary();
        assert!(summary.contains("Rows skipped: 1"));
        assert!(summary.contains("Stopped at limit: yes"));
        assert!(summary.contains("missing field: 1"));
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::InvalidNumber {
            column: "latitude".to_string(),
            value: "not_a_number".to_string(),
        };
        assert_eq!(
            reason.to_string(),
            "invalid number 'not_a_number' in 'latitude'"
        );
    }
}
