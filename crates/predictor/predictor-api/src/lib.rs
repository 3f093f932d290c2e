//! Predictor Consumer API
//!
//! Consumer configuration and builder API for topic importance prediction.
//!
//! This crate provides:
//! - [`PredictorConfig`] with defaults, environment loading and validation
//! - Construction of a [`TopicPredictor`] over an injected quantum backend
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::PredictorConfig;

// Re-export from core
pub use predictor_core::{
    classical, encoding, orchestrator, quantum, select_method, selection, ClassicalEstimator,
    LinearFit, MethodSelection, QuantumPatternEstimator, SeriesEncoding, SkipReason,
    TopicOutcome, TopicPredictor,
};

// Re-export traits and models from SPI
pub use predictor_spi::{
    BlendWeights, Estimate, ImportanceEstimator, PredictionMethod, PredictionRequest,
    PredictionResponse, PredictionResult, PredictorError, QuantumDiagnostics, Result,
    SeriesSource, Trend, UncertaintyQuantification,
};

// Re-export backends
pub use quantum_core::{StatevectorBackend, UnavailableBackend};
pub use quantum_spi::QuantumBackend;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::PredictorConfig;
    pub use predictor_core::{ClassicalEstimator, QuantumPatternEstimator, TopicPredictor};
    pub use predictor_spi::{
        ImportanceEstimator, PredictionMethod, PredictionRequest, PredictionResponse,
        PredictionResult, PredictorError, Result, SeriesSource, Trend,
    };
    pub use quantum_core::{StatevectorBackend, UnavailableBackend};
    pub use quantum_spi::QuantumBackend;
}
