//! CSV history reader.
//!
//! Expected header: `topic,year,frequency,total_questions`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use data_spi::{DataError, HistoryReader, Result, TopicRecords, YearRecord};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CsvRow {
    topic: String,
    year: i32,
    frequency: i64,
    total_questions: i64,
}

/// Reads one record per CSV row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvHistoryReader;

impl CsvHistoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse records from any reader.
    pub fn read_from<R: Read>(&self, source: R) -> Result<TopicRecords> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut records = TopicRecords::new();
        for row in reader.deserialize() {
            let row: CsvRow = row.map_err(|e| DataError::CsvError(e.to_string()))?;
            records
                .entry(row.topic)
                .or_insert_with(Vec::new)
                .push(YearRecord::new(row.year, row.frequency, row.total_questions));
        }

        for series in records.values_mut() {
            series.sort_by_key(|r| r.year);
        }
        Ok(records)
    }
}

impl HistoryReader for CsvHistoryReader {
    fn name(&self) -> &str {
        "csv"
    }

    fn read(&self, path: &Path) -> Result<TopicRecords> {
        info!(file_path = %path.display(), "Loading CSV data");
        let file = File::open(path)
            .map_err(|e| DataError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        let records = self.read_from(BufReader::new(file))?;
        info!(topics_count = records.len(), "CSV data loaded successfully");
        Ok(records)
    }
}
