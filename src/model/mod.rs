//! Model Module - Classifier Adapter
//!
//! Wraps the opaque pre-trained model behind a `Scorer` trait and applies
//! the fixed decision threshold. Swapping the backend (or faking it in
//! tests) never touches the encoding or HTTP layers.

pub mod inference;
pub mod threshold;

// Re-export common types
pub use inference::{InferenceError, OnnxScorer, Scorer};
pub use threshold::{Classifier, Prediction, DECISION_THRESHOLD};
