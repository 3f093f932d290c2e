//! History reader trait definition.

use std::path::Path;

use crate::error::Result;
use crate::model::TopicRecords;

/// Reads per-topic yearly records from a file.
///
/// Implementations return records grouped by topic and sorted by year.
pub trait HistoryReader: Send + Sync {
    /// Reader name, typically the file format.
    fn name(&self) -> &str;

    /// Read every record in `path`.
    fn read(&self, path: &Path) -> Result<TopicRecords>;
}
