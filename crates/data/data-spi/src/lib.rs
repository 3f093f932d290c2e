//! Exam History Service Provider Interface
//!
//! Defines the record model, reader trait and errors for historical exam
//! topic data.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::HistoryReader;
pub use error::{DataError, Result};
pub use model::{TopicRecords, TopicSummary, YearRecord};
