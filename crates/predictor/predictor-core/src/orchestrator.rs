//! Prediction orchestrator
//!
//! Runs the selection policy once per request, then drives every topic
//! through an explicit outcome state machine:
//!
//! ```text
//! topic ──► Skipped            (absent, too short, or classical estimate rejected)
//!       ──► Success            (selected method succeeded)
//!       ──► FallbackSuccess    (classical result after quantum unavailable or failed)
//!       ──► FallbackFailure    (classical recovery failed too)
//! ```
//!
//! Per-topic problems never fail the batch.

use std::sync::Arc;
use std::time::Instant;

use predictor_spi::{
    BlendWeights, Estimate, ImportanceEstimator, PredictionMethod, PredictionRequest,
    PredictionResponse, PredictionResult, PredictorError, Result, SeriesSource,
    UncertaintyQuantification,
};
use quantum_spi::QuantumBackend;
use tracing::{debug, error, info, warn};

use crate::classical::ClassicalEstimator;
use crate::quantum::QuantumPatternEstimator;
use crate::selection::{select_method, MethodSelection};

/// Why a topic produced no result
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Topic not present in the series source
    Missing,
    /// Series shorter than the minimum-years threshold
    TooShort { length: usize, required: usize },
    /// Classical estimator rejected the series outside a fallback path
    Rejected(PredictorError),
}

/// Terminal state of one topic
#[derive(Debug, Clone, PartialEq)]
pub enum TopicOutcome {
    Success(PredictionResult),
    Skipped(SkipReason),
    FallbackSuccess(PredictionResult),
    FallbackFailure(PredictorError),
}

impl TopicOutcome {
    /// Whether the topic went through a fallback path
    pub fn used_fallback(&self) -> bool {
        matches!(
            self,
            TopicOutcome::FallbackSuccess(_) | TopicOutcome::FallbackFailure(_)
        )
    }

    pub fn into_result(self) -> Option<PredictionResult> {
        match self {
            TopicOutcome::Success(result) | TopicOutcome::FallbackSuccess(result) => Some(result),
            _ => None,
        }
    }
}

/// Hybrid quantum/classical topic importance predictor
///
/// Stateless between requests, so a single instance can be shared across
/// threads.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use predictor_core::{PredictionMethod, PredictionRequest, TopicPredictor};
///
/// let predictor = TopicPredictor::classical_only();
/// let mut history = HashMap::new();
/// history.insert("algebra".to_string(), vec![15.0, 18.0, 22.0, 25.0, 28.0]);
///
/// let request = PredictionRequest::new(vec!["algebra".into(), "optics".into()]);
/// let response = predictor.predict(&request, &history).unwrap();
///
/// assert_eq!(response.predictions.len(), 1);
/// assert_eq!(response.method_used, PredictionMethod::ClassicalFallback);
/// ```
pub struct TopicPredictor {
    classical: Box<dyn ImportanceEstimator>,
    quantum: Option<Box<dyn ImportanceEstimator>>,
    min_historical_years: usize,
}

impl TopicPredictor {
    /// Predictor without a quantum estimator
    pub fn classical_only() -> Self {
        Self {
            classical: Box::new(ClassicalEstimator::new()),
            quantum: None,
            min_historical_years: 3,
        }
    }

    /// Predictor over `backend` with default quantum settings
    ///
    /// An unavailable backend is logged and leaves the predictor
    /// classical-only.
    pub fn new(backend: Arc<dyn QuantumBackend>) -> Self {
        let predictor = Self::classical_only();
        match QuantumPatternEstimator::new(backend) {
            Ok(estimator) => predictor.with_quantum_estimator(estimator),
            Err(e) => {
                warn!(error = %e, "Quantum estimator disabled");
                predictor
            }
        }
    }

    pub fn with_quantum_estimator(mut self, estimator: impl ImportanceEstimator + 'static) -> Self {
        self.quantum = Some(Box::new(estimator));
        self
    }

    pub fn with_classical_estimator(
        mut self,
        estimator: impl ImportanceEstimator + 'static,
    ) -> Self {
        self.classical = Box::new(estimator);
        self
    }

    pub fn without_quantum(mut self) -> Self {
        self.quantum = None;
        self
    }

    /// Minimum series length for a topic to be estimated
    pub fn with_min_historical_years(mut self, years: usize) -> Self {
        self.min_historical_years = years;
        self
    }

    pub fn min_historical_years(&self) -> usize {
        self.min_historical_years
    }

    pub fn quantum_available(&self) -> bool {
        self.quantum.is_some()
    }

    /// Predict importance for every topic in `request`
    ///
    /// Fails only when the request itself is invalid.
    pub fn predict(
        &self,
        request: &PredictionRequest,
        source: &dyn SeriesSource,
    ) -> Result<PredictionResponse> {
        let start = Instant::now();
        request.validate()?;

        let selection = select_method(
            self.quantum_available(),
            request.force_classical,
            request.confidence_level,
        );

        info!(
            topics = request.topics.len(),
            confidence = request.confidence_level,
            force_classical = request.force_classical,
            method = %selection.method(),
            "Starting topic prediction"
        );

        let mut predictions = Vec::with_capacity(request.topics.len());
        let mut fallback_used = false;

        for topic in &request.topics {
            let outcome = self.predict_topic(topic, source, selection, request.confidence_level);
            fallback_used |= outcome.used_fallback();
            if let Some(result) = outcome.into_result() {
                predictions.push(result);
            }
        }

        let execution_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            predicted = predictions.len(),
            requested = request.topics.len(),
            fallback_used,
            execution_time_ms,
            "Topic prediction finished"
        );

        Ok(PredictionResponse {
            predictions,
            execution_time_ms,
            fallback_used,
            method_used: selection.method(),
        })
    }

    /// Drive one topic to its terminal state
    pub fn predict_topic(
        &self,
        topic: &str,
        source: &dyn SeriesSource,
        selection: MethodSelection,
        confidence_level: f64,
    ) -> TopicOutcome {
        let series = match source.series(topic) {
            Some(series) => series,
            None => {
                warn!(topic, "Topic not found in historical data");
                return TopicOutcome::Skipped(SkipReason::Missing);
            }
        };

        if series.len() < self.min_historical_years {
            warn!(
                topic,
                data_points = series.len(),
                required = self.min_historical_years,
                "Topic has insufficient data"
            );
            return TopicOutcome::Skipped(SkipReason::TooShort {
                length: series.len(),
                required: self.min_historical_years,
            });
        }

        match (selection, self.quantum.as_deref()) {
            (MethodSelection::Quantum, Some(quantum)) => {
                match quantum.estimate(&series, confidence_level) {
                    Ok(estimate) => {
                        debug!(topic, importance = estimate.importance, "Quantum prediction completed");
                        TopicOutcome::Success(PredictionResult::from_estimate(
                            topic,
                            estimate,
                            PredictionMethod::Quantum,
                        ))
                    }
                    Err(e) => self.recover(topic, &series, confidence_level, e),
                }
            }
            (MethodSelection::Hybrid(weights), Some(quantum)) => {
                let quantum_estimate = match quantum.estimate(&series, confidence_level) {
                    Ok(estimate) => estimate,
                    Err(e) => return self.recover(topic, &series, confidence_level, e),
                };
                match self.classical.estimate(&series, confidence_level) {
                    Ok(classical_estimate) => TopicOutcome::Success(blend(
                        topic,
                        &quantum_estimate,
                        &classical_estimate,
                        weights,
                    )),
                    Err(e) => {
                        warn!(topic, error = %e, "Classical half of hybrid prediction failed");
                        TopicOutcome::Skipped(SkipReason::Rejected(e))
                    }
                }
            }
            (MethodSelection::Classical { fallback }, _) => {
                self.classical_path(topic, &series, confidence_level, fallback)
            }
            // Quantum was selected but no estimator is configured
            (_, None) => self.classical_path(topic, &series, confidence_level, true),
        }
    }

    fn classical_path(
        &self,
        topic: &str,
        series: &[f64],
        confidence_level: f64,
        fallback: bool,
    ) -> TopicOutcome {
        match self.classical.estimate(series, confidence_level) {
            Ok(estimate) if fallback => TopicOutcome::FallbackSuccess(PredictionResult::from_estimate(
                topic,
                estimate,
                PredictionMethod::ClassicalFallback,
            )),
            Ok(estimate) => TopicOutcome::Success(PredictionResult::from_estimate(
                topic,
                estimate,
                PredictionMethod::Classical,
            )),
            Err(e) if fallback => {
                warn!(topic, error = %e, "Classical fallback failed, dropping topic");
                TopicOutcome::FallbackFailure(e)
            }
            Err(e) => {
                warn!(topic, error = %e, "Classical prediction failed, dropping topic");
                TopicOutcome::Skipped(SkipReason::Rejected(e))
            }
        }
    }

    fn recover(
        &self,
        topic: &str,
        series: &[f64],
        confidence_level: f64,
        cause: PredictorError,
    ) -> TopicOutcome {
        error!(topic, error = %cause, "Quantum prediction failed, falling back to classical");
        let outcome = self.classical_path(topic, series, confidence_level, true);
        if let TopicOutcome::FallbackSuccess(_) = outcome {
            info!(topic, "Classical fallback successful");
        }
        outcome
    }
}

/// Weighted combination of a quantum and a classical estimate
fn blend(
    topic: &str,
    quantum: &Estimate,
    classical: &Estimate,
    weights: BlendWeights,
) -> PredictionResult {
    let quantum_uncertainty = quantum.uncertainty();
    let classical_uncertainty = classical.uncertainty();

    PredictionResult {
        topic: topic.to_string(),
        importance: weights.blend(quantum.importance, classical.importance),
        confidence_interval: (
            weights.blend(quantum.lower, classical.lower),
            weights.blend(quantum.upper, classical.upper),
        ),
        trend: classical.trend,
        method: PredictionMethod::Hybrid,
        quantum_contribution: Some(weights.quantum),
        classical_contribution: Some(weights.classical),
        uncertainty: Some(UncertaintyQuantification {
            quantum_uncertainty,
            classical_uncertainty,
            blended_uncertainty: weights.blend(quantum_uncertainty, classical_uncertainty),
        }),
        diagnostics: quantum.diagnostics.clone(),
    }
}
