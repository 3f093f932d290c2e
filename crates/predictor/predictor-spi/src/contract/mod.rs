//! Contract module containing estimator and data-source traits

mod estimator;
mod series;

pub use estimator::ImportanceEstimator;
pub use series::SeriesSource;
