//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the trained classifier once and scores 24-wide feature vectors.
//! The session is behind a mutex: `Session::run` needs exclusive access, so
//! concurrent requests serialize on the scoring call only.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use thiserror::Error;

use crate::encoder::COLUMN_COUNT;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("model load failed: {0}")]
    LoadFailed(String),

    #[error("inference failed: {0}")]
    ScoreFailed(String),
}

// ============================================================================
// SCORER TRAIT
// ============================================================================

/// Scoring backends (ONNX today; fakes in tests).
/// Input is a single record in schema order, output a probability in [0,1].
pub trait Scorer: Send + Sync {
    fn score(&self, features: &[f32; COLUMN_COUNT]) -> Result<f32, InferenceError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed scorer. Weights are immutable after load; only the run call
/// is serialized.
pub struct OnnxScorer {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxScorer {
    /// Load the model from file. Called once at startup; a failure here is
    /// fatal to the process, never a per-request error.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::LoadFailed(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::LoadFailed(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::LoadFailed(e.to_string()))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::LoadFailed("model has no outputs".to_string()))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Scorer for OnnxScorer {
    fn score(&self, features: &[f32; COLUMN_COUNT]) -> Result<f32, InferenceError> {
        // Single-row batch of the 24-wide schema
        let input_array = Array2::<f32>::from_shape_vec((1, COLUMN_COUNT), features.to_vec())
            .map_err(|e| InferenceError::ScoreFailed(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::ScoreFailed(format!("tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::ScoreFailed(e.to_string()))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError::ScoreFailed("no output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::ScoreFailed(format!("extract error: {}", e)))?;

        // Keras-style [1, 1] probability tensor
        output_tensor
            .1
            .first()
            .copied()
            .ok_or_else(|| InferenceError::ScoreFailed("empty output tensor".to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_model_is_not_found() {
        let result = OnnxScorer::load("/nonexistent/literacy_classifier.onnx");
        assert!(matches!(result, Err(InferenceError::ModelNotFound(_))));
    }
}
