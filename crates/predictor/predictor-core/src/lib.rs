//! Predictor Core
//!
//! Core implementations for topic importance prediction: the classical
//! trend estimator, the VQE-based pattern estimator, the method selection
//! policy and the per-topic orchestrator.

pub mod classical;
pub mod encoding;
pub mod orchestrator;
pub mod quantum;
pub mod selection;

// Re-export SPI types for implementations
pub use predictor_spi::{
    BlendWeights, Estimate, ImportanceEstimator, PredictionMethod, PredictionRequest,
    PredictionResponse, PredictionResult, PredictorError, QuantumDiagnostics, Result,
    SeriesSource, Trend, UncertaintyQuantification,
};

// Re-export main types
pub use classical::{ClassicalEstimator, LinearFit};
pub use encoding::SeriesEncoding;
pub use orchestrator::{SkipReason, TopicOutcome, TopicPredictor};
pub use quantum::QuantumPatternEstimator;
pub use selection::{select_method, MethodSelection};
