//! Decision Threshold and Classifier
//!
//! Converts a model probability into the literacy label. The threshold was
//! fixed during model evaluation at 0.30, deliberately below the usual 0.5;
//! do not "correct" it without re-evaluating the model.

use serde::Serialize;
use std::sync::Arc;

use super::inference::{InferenceError, Scorer};
use crate::encoder::COLUMN_COUNT;

/// Probability cutoff for the Literate label. Strictly greater-than:
/// a probability of exactly 0.30 classifies as Illiterate.
pub const DECISION_THRESHOLD: f32 = 0.30;

// ============================================================================
// PREDICTION OUTPUT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub probability: f32,
    pub class: u8,
    pub status: &'static str,
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Classifier adapter: an injected scoring backend plus the fixed decision
/// threshold. Stateless per call.
pub struct Classifier {
    scorer: Arc<dyn Scorer>,
    threshold: f32,
}

impl Classifier {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self::with_threshold(scorer, DECISION_THRESHOLD)
    }

    pub fn with_threshold(scorer: Arc<dyn Scorer>, threshold: f32) -> Self {
        Self { scorer, threshold }
    }

    /// Score a feature vector and apply the decision rule.
    pub fn predict(&self, features: &[f32; COLUMN_COUNT]) -> Result<Prediction, InferenceError> {
        let probability = self.scorer.score(features)?;
        let class = u8::from(probability > self.threshold);
        let status = if class == 1 { "Literate" } else { "Illiterate" };

        Ok(Prediction {
            probability,
            class,
            status,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer that always returns a fixed probability.
    struct FixedScorer(f32);

    impl Scorer for FixedScorer {
        fn score(&self, _features: &[f32; COLUMN_COUNT]) -> Result<f32, InferenceError> {
            Ok(self.0)
        }
    }

    /// Scorer that always fails.
    struct BrokenScorer;

    impl Scorer for BrokenScorer {
        fn score(&self, _features: &[f32; COLUMN_COUNT]) -> Result<f32, InferenceError> {
            Err(InferenceError::ScoreFailed("broken".to_string()))
        }
    }

    fn predict_with(probability: f32) -> Prediction {
        let classifier = Classifier::new(Arc::new(FixedScorer(probability)));
        classifier.predict(&[0.0; COLUMN_COUNT]).unwrap()
    }

    #[test]
    fn test_above_threshold_is_literate() {
        let prediction = predict_with(0.31);
        assert_eq!(prediction.class, 1);
        assert_eq!(prediction.status, "Literate");
        assert_eq!(prediction.probability, 0.31);
    }

    #[test]
    fn test_exactly_threshold_is_illiterate() {
        // Strict greater-than: 0.30 itself is the negative class
        let prediction = predict_with(DECISION_THRESHOLD);
        assert_eq!(prediction.class, 0);
        assert_eq!(prediction.status, "Illiterate");
    }

    #[test]
    fn test_below_threshold_is_illiterate() {
        let prediction = predict_with(0.05);
        assert_eq!(prediction.class, 0);
        assert_eq!(prediction.status, "Illiterate");
    }

    #[test]
    fn test_scorer_failure_propagates() {
        let classifier = Classifier::new(Arc::new(BrokenScorer));
        let result = classifier.predict(&[0.0; COLUMN_COUNT]);
        assert!(matches!(result, Err(InferenceError::ScoreFailed(_))));
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = Classifier::with_threshold(Arc::new(FixedScorer(0.4)), 0.5);
        let prediction = classifier.predict(&[0.0; COLUMN_COUNT]).unwrap();
        assert_eq!(prediction.class, 0);
    }
}
