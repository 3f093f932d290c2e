//! JSON history reader.
//!
//! Expected shape:
//!
//! ```json
//! {"topics": {"Optics": [{"year": 2020, "frequency": 25, "total_questions": 100}]}}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use data_spi::{DataError, HistoryReader, Result, TopicRecords};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct JsonHistory {
    #[serde(default)]
    topics: TopicRecords,
}

/// Reads the `topics` object of a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHistoryReader;

impl JsonHistoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse records from any reader.
    pub fn read_from<R: Read>(&self, source: R) -> Result<TopicRecords> {
        let document: JsonHistory =
            serde_json::from_reader(source).map_err(|e| DataError::JsonError(e.to_string()))?;

        let mut records = document.topics;
        for series in records.values_mut() {
            series.sort_by_key(|r| r.year);
        }
        Ok(records)
    }
}

impl HistoryReader for JsonHistoryReader {
    fn name(&self) -> &str {
        "json"
    }

    fn read(&self, path: &Path) -> Result<TopicRecords> {
        info!(file_path = %path.display(), "Loading JSON data");
        let file = File::open(path)
            .map_err(|e| DataError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        let records = self.read_from(BufReader::new(file))?;
        info!(topics_count = records.len(), "JSON data loaded successfully");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_sorted_by_year() {
        let json = r#"{"topics": {"Algebra": [
            {"year": 2022, "frequency": 30, "total_questions": 100},
            {"year": 2020, "frequency": 20, "total_questions": 100}
        ]}}"#;
        let records = JsonHistoryReader::new().read_from(json.as_bytes()).unwrap();
        let years: Vec<i32> = records["Algebra"].iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2020, 2022]);
    }

    #[test]
    fn test_missing_topics_key_is_empty() {
        let records = JsonHistoryReader::new().read_from(&b"{}"[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = JsonHistoryReader::new().read_from(&b"{\"topics\": ["[..]).unwrap_err();
        assert!(matches!(err, DataError::JsonError(_)));
    }
}
