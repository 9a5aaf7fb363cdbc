//! Per-file results and the ordered result set of a run.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// Column names of the report, in order.
pub const REPORT_COLUMNS: [&str; 3] = ["file", "time_s", "full_text"];

/// Result of one successfully processed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OcrRecord {
    /// Source file name.
    pub file: String,
    /// Wall-clock seconds spent in the OCR call, rounded to two decimals.
    #[serde(serialize_with = "serialize_seconds")]
    pub time_s: f64,
    /// Extracted text with surrounding whitespace removed.
    pub full_text: String,
}

impl OcrRecord {
    /// Creates a record, rounding the elapsed time and trimming the text.
    pub fn new(file: impl Into<String>, elapsed: Duration, text: &str) -> Self {
        Self {
            file: file.into(),
            time_s: round_seconds(elapsed),
            full_text: text.trim().to_owned(),
        }
    }
}

/// Converts a duration to seconds rounded to two decimal places.
pub fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

fn serialize_seconds<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Ordered, append-only sequence of records produced by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<OcrRecord>,
}

impl RecordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record in processing order.
    pub fn push(&mut self, record: OcrRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no file succeeded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, OcrRecord> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[OcrRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type IntoIter = std::slice::Iter<'a, OcrRecord>;
    type Item = &'a OcrRecord;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_seconds() {
        assert_eq!(round_seconds(Duration::from_millis(1234)), 1.23);
        assert_eq!(round_seconds(Duration::from_millis(1239)), 1.24);
        assert_eq!(round_seconds(Duration::from_millis(4)), 0.0);
        assert_eq!(round_seconds(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_record_trims_text() {
        let record = OcrRecord::new("a.png", Duration::from_millis(500), "\n  Hello \t");
        assert_eq!(record.file, "a.png");
        assert_eq!(record.time_s, 0.5);
        assert_eq!(record.full_text, "Hello");
    }

    #[test]
    fn test_record_set_keeps_order() {
        let mut set = RecordSet::new();
        assert!(set.is_empty());

        set.push(OcrRecord::new("b.png", Duration::ZERO, "b"));
        set.push(OcrRecord::new("a.png", Duration::ZERO, "a"));

        let files: Vec<_> = set.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, ["b.png", "a.png"]);
        assert_eq!(set.len(), 2);
    }
}
