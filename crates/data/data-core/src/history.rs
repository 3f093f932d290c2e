//! In-memory exam history.

use std::collections::HashSet;

use data_spi::{TopicRecords, TopicSummary, YearRecord};
use predictor_spi::SeriesSource;
use serde::{Deserialize, Serialize};

/// Yearly records for every topic, sorted by year.
///
/// Serves as the predictor's series source: a topic's series is its
/// yearly percentage share of the exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamHistory {
    topics: TopicRecords,
}

impl ExamHistory {
    pub fn new(mut topics: TopicRecords) -> Self {
        for series in topics.values_mut() {
            series.sort_by_key(|r| r.year);
        }
        Self { topics }
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn records(&self, topic: &str) -> Option<&[YearRecord]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    /// Percentage series for `topic`; empty when the topic is unknown.
    pub fn frequencies(&self, topic: &str) -> Vec<f64> {
        self.records(topic)
            .map(|records| records.iter().map(YearRecord::percentage).collect())
            .unwrap_or_default()
    }

    /// Data-quality problems, one message each; empty when the data is clean.
    pub fn validate(&self, min_years: usize) -> Vec<String> {
        if self.topics.is_empty() {
            return vec!["No data loaded".to_string()];
        }

        let mut errors = Vec::new();
        for (topic, records) in &self.topics {
            if records.len() < min_years {
                errors.push(format!(
                    "Topic '{}' has only {} years of data (minimum {} required)",
                    topic,
                    records.len(),
                    min_years
                ));
            }

            let distinct: HashSet<i32> = records.iter().map(|r| r.year).collect();
            if distinct.len() != records.len() {
                errors.push(format!("Topic '{}' has duplicate years", topic));
            }

            for r in records {
                if r.frequency < 0 {
                    errors.push(format!("Topic '{}' year {}: negative frequency", topic, r.year));
                }
                if r.total_questions <= 0 {
                    errors.push(format!(
                        "Topic '{}' year {}: invalid total questions",
                        topic, r.year
                    ));
                }
                if r.frequency > r.total_questions {
                    errors.push(format!(
                        "Topic '{}' year {}: frequency > total questions",
                        topic, r.year
                    ));
                }
            }
        }
        errors
    }

    /// Topics with at least `min_years` records.
    pub fn available_topics(&self, min_years: usize) -> Vec<TopicSummary> {
        self.topics
            .iter()
            .filter(|(_, records)| !records.is_empty() && records.len() >= min_years)
            .filter_map(|(name, records)| {
                let latest_year = records.iter().map(|r| r.year).max()?;
                Some(TopicSummary {
                    id: TopicSummary::slug(name),
                    name: name.clone(),
                    years_available: records.len(),
                    latest_year,
                })
            })
            .collect()
    }
}

impl From<TopicRecords> for ExamHistory {
    fn from(topics: TopicRecords) -> Self {
        Self::new(topics)
    }
}

impl SeriesSource for ExamHistory {
    fn series(&self, topic: &str) -> Option<Vec<f64>> {
        self.records(topic)
            .map(|records| records.iter().map(YearRecord::percentage).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> ExamHistory {
        let mut topics = TopicRecords::new();
        topics.insert(
            "Linear Algebra".to_string(),
            vec![
                YearRecord::new(2021, 22, 100),
                YearRecord::new(2019, 15, 100),
                YearRecord::new(2020, 18, 100),
            ],
        );
        topics.insert(
            "Optics".to_string(),
            vec![YearRecord::new(2020, 5, 50), YearRecord::new(2021, 6, 50)],
        );
        ExamHistory::new(topics)
    }

    #[test]
    fn test_frequencies_are_sorted_percentages() {
        assert_eq!(history().frequencies("Linear Algebra"), vec![15.0, 18.0, 22.0]);
        assert_eq!(history().frequencies("Optics"), vec![10.0, 12.0]);
        assert!(history().frequencies("Unknown").is_empty());
    }

    #[test]
    fn test_series_source() {
        let h = history();
        assert_eq!(h.series("Optics"), Some(vec![10.0, 12.0]));
        assert_eq!(h.series("optics"), None);
    }

    #[test]
    fn test_validate_clean_and_short() {
        let errors = history().validate(3);
        assert_eq!(
            errors,
            vec!["Topic 'Optics' has only 2 years of data (minimum 3 required)".to_string()]
        );
        assert!(history().validate(2).is_empty());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(ExamHistory::default().validate(3), vec!["No data loaded".to_string()]);
    }

    #[test]
    fn test_validate_record_problems() {
        let mut topics = TopicRecords::new();
        topics.insert(
            "Bad".to_string(),
            vec![
                YearRecord::new(2020, -1, 10),
                YearRecord::new(2020, 5, 0),
                YearRecord::new(2021, 12, 10),
            ],
        );
        let errors = ExamHistory::new(topics).validate(3);

        assert!(errors.contains(&"Topic 'Bad' has duplicate years".to_string()));
        assert!(errors.contains(&"Topic 'Bad' year 2020: negative frequency".to_string()));
        assert!(errors.contains(&"Topic 'Bad' year 2020: invalid total questions".to_string()));
        assert!(errors.contains(&"Topic 'Bad' year 2021: frequency > total questions".to_string()));
    }

    #[test]
    fn test_available_topics() {
        let topics = history().available_topics(3);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].id, "linear-algebra");
        assert_eq!(topics[0].name, "Linear Algebra");
        assert_eq!(topics[0].years_available, 3);
        assert_eq!(topics[0].latest_year, 2021);

        assert_eq!(history().available_topics(2).len(), 2);
    }
}
