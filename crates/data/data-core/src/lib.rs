//! Exam History Core
//!
//! File readers for historical exam data, the in-memory [`ExamHistory`]
//! with validation and topic listing, and a caching [`HistoryLoader`].

pub mod csv_reader;
pub mod history;
pub mod json_reader;
pub mod loader;

// Re-export SPI types for convenience
pub use data_spi::{DataError, HistoryReader, Result, TopicRecords, TopicSummary, YearRecord};

pub use csv_reader::CsvHistoryReader;
pub use history::ExamHistory;
pub use json_reader::JsonHistoryReader;
pub use loader::{DataFormat, HistoryLoader};
