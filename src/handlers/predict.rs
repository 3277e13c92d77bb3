//! Prediction handler

use axum::{extract::State, Json};

use crate::encoder::{self, InputRecord};
use crate::model::Prediction;
use crate::{AppResult, AppState};

/// Score a demographic record.
///
/// Encoding is total: out-of-domain categories zero out their one-hot group
/// instead of rejecting the request, so the only per-request failure mode is
/// the scoring call itself.
pub async fn predict(
    State(state): State<AppState>,
    Json(record): Json<InputRecord>,
) -> AppResult<Json<Prediction>> {
    let encoded = encoder::encode(&record);

    if !encoded.unmapped.is_empty() {
        tracing::warn!(
            groups = ?encoded.unmapped,
            "input categories outside the known domains; their one-hot groups were zero-filled"
        );
    }

    let prediction = state.classifier.predict(encoded.as_array())?;

    tracing::debug!(
        probability = prediction.probability,
        status = prediction.status,
        "prediction served"
    );

    Ok(Json(prediction))
}

// ============================================================================
// TESTS
// ============================================================================
