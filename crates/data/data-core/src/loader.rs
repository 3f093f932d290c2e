//! Format-detecting loader with a last-loaded cache.

use std::path::Path;

use data_spi::{DataError, HistoryReader, Result};
use tracing::debug;

use crate::csv_reader::CsvHistoryReader;
use crate::history::ExamHistory;
use crate::json_reader::JsonHistoryReader;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            "" => Err(DataError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(DataError::UnsupportedFormat(other.to_string())),
        }
    }

    fn reader(&self) -> &'static dyn HistoryReader {
        match self {
            DataFormat::Csv => &CsvHistoryReader,
            DataFormat::Json => &JsonHistoryReader,
        }
    }
}

/// Loads exam history files and keeps the most recent one.
#[derive(Debug, Default)]
pub struct HistoryLoader {
    cache: Option<ExamHistory>,
}

impl HistoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, choosing the reader by extension.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&ExamHistory> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path)?;
        self.load_with(format.reader(), path)
    }

    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<&ExamHistory> {
        self.load_with(&CsvHistoryReader, path.as_ref())
    }

    pub fn load_json(&mut self, path: impl AsRef<Path>) -> Result<&ExamHistory> {
        self.load_with(&JsonHistoryReader, path.as_ref())
    }

    /// Load with an explicit reader.
    pub fn load_with(&mut self, reader: &dyn HistoryReader, path: &Path) -> Result<&ExamHistory> {
        let history = ExamHistory::new(reader.read(path)?);
        debug!(reader = reader.name(), topics = history.topic_count(), "History cached");
        Ok(self.cache.insert(history))
    }

    /// Most recently loaded history.
    pub fn cached(&self) -> Option<&ExamHistory> {
        self.cache.as_ref()
    }

    /// Most recently loaded history, or [`DataError::NoData`].
    pub fn current(&self) -> Result<&ExamHistory> {
        self.cache.as_ref().ok_or(DataError::NoData)
    }

    pub fn clear(&mut self) {
        self.cache = None;
    }
}
