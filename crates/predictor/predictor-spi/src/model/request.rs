//! Prediction request

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{PredictorError, Result};

/// Batch prediction request
///
/// # Example
///
/// ```rust
/// use predictor_spi::PredictionRequest;
///
/// let request = PredictionRequest::new(vec!["algebra".into(), "optics".into()])
///     .with_confidence(0.9);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Topics in output order
    pub topics: Vec<String>,
    /// Requested confidence in [0, 1]
    #[serde(default = "default_confidence")]
    pub confidence_level: f64,
    /// Skip the quantum path entirely
    #[serde(default)]
    pub force_classical: bool,
}

fn default_confidence() -> f64 {
    0.95
}

impl PredictionRequest {
    pub fn new(topics: Vec<String>) -> Self {
        Self {
            topics,
            confidence_level: default_confidence(),
            force_classical: false,
        }
    }

    pub fn with_confidence(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn force_classical(mut self, force: bool) -> Self {
        self.force_classical = force;
        self
    }

    /// Reject empty or duplicate topics and out-of-range confidence
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(PredictorError::invalid_request(
                "topics",
                "at least one topic is required",
            ));
        }

        let mut seen = HashSet::with_capacity(self.topics.len());
        for topic in &self.topics {
            if !seen.insert(topic.as_str()) {
                return Err(PredictorError::invalid_request(
                    "topics",
                    format!("duplicate topic '{}'", topic),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.confidence_level) {
            return Err(PredictorError::invalid_request(
                "confidence_level",
                format!("must be within [0, 1], got {}", self.confidence_level),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let request = PredictionRequest::new(topics(&["a"]));
        assert_eq!(request.confidence_level, 0.95);
        assert!(!request.force_classical);
    }

    #[test]
    fn test_empty_topics_rejected() {
        let err = PredictionRequest::new(vec![]).validate().unwrap_err();
        assert!(matches!(err, PredictorError::InvalidRequest { ref field, .. } if field == "topics"));
    }

    #[test]
    fn test_duplicate_topics_rejected() {
        let request = PredictionRequest::new(topics(&["a", "b", "a"]));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_topics_are_case_sensitive() {
        let request = PredictionRequest::new(topics(&["Algebra", "algebra"]));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_confidence_bounds() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let request = PredictionRequest::new(topics(&["a"])).with_confidence(bad);
            assert!(request.validate().is_err(), "accepted {}", bad);
        }
        for good in [0.0, 0.5, 1.0] {
            let request = PredictionRequest::new(topics(&["a"])).with_confidence(good);
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"topics": ["optics"]}"#).unwrap();
        assert_eq!(request.confidence_level, 0.95);
        assert!(!request.force_classical);
    }
}
