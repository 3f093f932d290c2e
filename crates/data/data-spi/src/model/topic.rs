//! Topic listing entry.

use serde::{Deserialize, Serialize};

/// A topic with enough history to predict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Lowercase slug with spaces replaced by dashes
    pub id: String,
    pub name: String,
    pub years_available: usize,
    pub latest_year: i32,
}

impl TopicSummary {
    /// Slug used as the topic id
    pub fn slug(name: &str) -> String {
        name.to_lowercase().replace(' ', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(TopicSummary::slug("Linear Algebra"), "linear-algebra");
        assert_eq!(TopicSummary::slug("optics"), "optics");
    }
}
