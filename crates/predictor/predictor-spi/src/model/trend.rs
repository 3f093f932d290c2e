//! Trend direction of a historical series

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a topic's recent history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    Unknown,
}

impl Trend {
    /// Classify a fitted slope
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Trend::Increasing
        } else if slope < 0.0 {
            Trend::Decreasing
        } else if slope == 0.0 {
            Trend::Stable
        } else {
            Trend::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
            Trend::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slope() {
        assert_eq!(Trend::from_slope(0.4), Trend::Increasing);
        assert_eq!(Trend::from_slope(-1e-9), Trend::Decreasing);
        assert_eq!(Trend::from_slope(0.0), Trend::Stable);
        assert_eq!(Trend::from_slope(f64::NAN), Trend::Unknown);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }
}
