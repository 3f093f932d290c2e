//! Predictor Service Provider Interface
//!
//! Defines the estimator and series-source contracts, the prediction
//! result model and the error type shared by the predictor stack.

pub mod contract;
pub mod error;
pub mod model;

pub use contract::{ImportanceEstimator, SeriesSource};
pub use error::{PredictorError, Result};
pub use model::{
    BlendWeights, Estimate, PredictionMethod, PredictionRequest, PredictionResponse, PredictionResult,
    QuantumDiagnostics, Trend, UncertaintyQuantification,
};
