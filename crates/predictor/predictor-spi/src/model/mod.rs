//! Model module containing prediction data types

mod method;
mod request;
mod result;
mod trend;

pub use method::{BlendWeights, PredictionMethod};
pub use request::PredictionRequest;
pub use result::{
    Estimate, PredictionResponse, PredictionResult, QuantumDiagnostics, UncertaintyQuantification,
};
pub use trend::Trend;
