//! Yearly topic records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How often a topic appeared in one exam year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    /// Questions on this topic
    pub frequency: i64,
    /// Questions in the whole exam
    pub total_questions: i64,
}

impl YearRecord {
    pub fn new(year: i32, frequency: i64, total_questions: i64) -> Self {
        Self {
            year,
            frequency,
            total_questions,
        }
    }

    /// Share of the exam on a 0-100 scale; 0 when the total is not positive.
    pub fn percentage(&self) -> f64 {
        if self.total_questions > 0 {
            self.frequency as f64 / self.total_questions as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Records grouped by topic name.
pub type TopicRecords = BTreeMap<String, Vec<YearRecord>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(YearRecord::new(2020, 25, 100).percentage(), 25.0);
        assert!((YearRecord::new(2021, 1, 3).percentage() - 33.333333).abs() < 1e-5);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(YearRecord::new(2020, 5, 0).percentage(), 0.0);
        assert_eq!(YearRecord::new(2020, 5, -4).percentage(), 0.0);
    }
}
