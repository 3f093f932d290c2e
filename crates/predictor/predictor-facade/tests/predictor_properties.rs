//! Property-based tests for the predictor stack using proptest
//!
//! Checks interval, blending and selection invariants over generated
//! series and confidence levels.

use std::collections::HashMap;
use std::sync::Arc;

use predictor_facade::{
    select_method, ClassicalEstimator, ImportanceEstimator, PredictionMethod, PredictionRequest,
    PredictorConfig, StatevectorBackend, TopicPredictor, UnavailableBackend,
};
use proptest::prelude::*;

fn series_strategy(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..100.0, min_len..12)
}

proptest! {
    /// Property: classical intervals are bounded and ordered
    #[test]
    fn classical_interval_well_formed(
        series in prop::collection::vec(-50.0f64..250.0, 2..20),
        confidence in 0.0f64..=1.0
    ) {
        let estimate = ClassicalEstimator::new().estimate(&series, confidence).unwrap();
        prop_assert!(0.0 <= estimate.lower);
        prop_assert!(estimate.lower <= estimate.importance);
        prop_assert!(estimate.importance <= estimate.upper);
        prop_assert!(estimate.upper <= 1.0);
    }

    /// Property: classical estimates are bit-identical across runs
    #[test]
    fn classical_deterministic(series in series_strategy(2)) {
        let a = ClassicalEstimator::new().estimate(&series, 0.95).unwrap();
        let b = ClassicalEstimator::new().estimate(&series, 0.95).unwrap();
        prop_assert_eq!(a.importance.to_bits(), b.importance.to_bits());
        prop_assert_eq!(a.lower.to_bits(), b.lower.to_bits());
        prop_assert_eq!(a.upper.to_bits(), b.upper.to_bits());
        prop_assert_eq!(a.trend, b.trend);
    }

    /// Property: the selection policy is a pure function of its inputs
    #[test]
    fn selection_is_pure(
        available in any::<bool>(),
        forced in any::<bool>(),
        confidence in 0.0f64..=1.0
    ) {
        let first = select_method(available, forced, confidence);
        let second = select_method(available, forced, confidence);
        prop_assert_eq!(first, second);
        if let Some(weights) = first.weights() {
            prop_assert!((weights.quantum + weights.classical - 1.0).abs() < 1e-6);
        }
    }

    /// Property: unavailable quantum turns every non-forced topic into a fallback
    #[test]
    fn unavailable_quantum_always_falls_back(
        series in series_strategy(3),
        confidence in 0.0f64..=1.0
    ) {
        let predictor = PredictorConfig::new()
            .build_predictor(Arc::new(UnavailableBackend::new()))
            .unwrap();
        let mut data = HashMap::new();
        data.insert("topic".to_string(), series);

        let request = PredictionRequest::new(vec!["topic".into()]).with_confidence(confidence);
        let response = predictor.predict(&request, &data).unwrap();

        prop_assert!(response.fallback_used);
        prop_assert_eq!(response.predictions.len(), 1);
        prop_assert_eq!(response.predictions[0].method, PredictionMethod::ClassicalFallback);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: hybrid contributions sum to one and uncertainty blends linearly
    #[test]
    fn hybrid_outputs_coherent(
        series in series_strategy(3),
        confidence in 0.0f64..0.99
    ) {
        let predictor = PredictorConfig::new()
            .with_max_qubits(3)
            .with_max_iterations(15)
            .build_predictor(Arc::new(StatevectorBackend::new()))
            .unwrap();
        let mut data = HashMap::new();
        data.insert("topic".to_string(), series);

        let request = PredictionRequest::new(vec!["topic".into()]).with_confidence(confidence);
        let response = predictor.predict(&request, &data).unwrap();
        let result = &response.predictions[0];

        prop_assert_eq!(result.method, PredictionMethod::Hybrid);
        let q = result.quantum_contribution.unwrap();
        let c = result.classical_contribution.unwrap();
        prop_assert!((q + c - 1.0).abs() < 1e-6);

        let u = result.uncertainty.unwrap();
        prop_assert!((u.blended_uncertainty - (q * u.quantum_uncertainty + c * u.classical_uncertainty)).abs() < 1e-6);

        prop_assert!(0.0 <= result.lower());
        prop_assert!(result.lower() <= result.importance);
        prop_assert!(result.importance <= result.upper());
        prop_assert!(result.upper() <= 1.0);
    }

    /// Property: quantum estimates stay inside [0, 1] with an ordered interval
    #[test]
    fn quantum_interval_well_formed(
        series in series_strategy(1),
        confidence in 0.0f64..=1.0
    ) {
        let predictor = TopicPredictor::classical_only()
            .with_min_historical_years(1)
            .with_quantum_estimator(
                predictor_facade::QuantumPatternEstimator::new(Arc::new(StatevectorBackend::new()))
                    .unwrap()
                    .with_max_qubits(3)
                    .with_max_iterations(10),
            );
        let mut data = HashMap::new();
        data.insert("topic".to_string(), series);

        let request = PredictionRequest::new(vec!["topic".into()]).with_confidence(confidence);
        let response = predictor.predict(&request, &data).unwrap();
        for result in &response.predictions {
            prop_assert!(0.0 <= result.lower());
            prop_assert!(result.lower() <= result.importance);
            prop_assert!(result.importance <= result.upper());
            prop_assert!(result.upper() <= 1.0);
        }
    }
}
