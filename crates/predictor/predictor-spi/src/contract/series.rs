//! Historical series lookup

use std::collections::{BTreeMap, HashMap};

/// Lookup from topic identifier to its ordered frequency series
pub trait SeriesSource {
    /// Series for `topic`, or `None` when the topic is unknown
    fn series(&self, topic: &str) -> Option<Vec<f64>>;
}

impl SeriesSource for HashMap<String, Vec<f64>> {
    fn series(&self, topic: &str) -> Option<Vec<f64>> {
        self.get(topic).cloned()
    }
}

impl SeriesSource for BTreeMap<String, Vec<f64>> {
    fn series(&self, topic: &str) -> Option<Vec<f64>> {
        self.get(topic).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_lookup() {
        let mut data = HashMap::new();
        data.insert("algebra".to_string(), vec![10.0, 12.0]);

        assert_eq!(data.series("algebra"), Some(vec![10.0, 12.0]));
        assert_eq!(data.series("Algebra"), None);
    }

    #[test]
    fn test_btree_map_lookup() {
        let data: BTreeMap<String, Vec<f64>> =
            [("optics".to_string(), vec![1.0])].into_iter().collect();
        assert_eq!(data.series("optics"), Some(vec![1.0]));
    }
}
