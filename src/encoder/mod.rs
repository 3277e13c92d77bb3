//! Encoder Module - Demographic Feature Encoding
//!
//! Turns a raw demographic record into the fixed 24-column one-hot vector
//! the classifier was trained on. Encoding is total: categories outside the
//! known domains never fail, they leave their one-hot group all-zero after
//! the reindex step (the same behavior the training pipeline had).

pub mod layout;
pub mod mappings;

#[cfg(test)]
mod tests;

use serde::Deserialize;

pub use layout::{COLUMN_COUNT, FEATURE_GROUPS, MODEL_COLUMNS};

// ============================================================================
// INPUT RECORD
// ============================================================================

/// Raw per-request demographic record, as posted to /predict.
/// The transport layer only guarantees types, not domain membership.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    pub social_group: String,
    pub rural_urban: String,
    pub state: String,
    pub gender: String,
    pub age: u32,
    pub internet_access: String,
    pub computer_access: String,
    pub marital_status: String,
}

// ============================================================================
// ENCODED RECORD
// ============================================================================

/// Encoder output: the aligned feature vector plus a diagnostic list of
/// feature groups whose source category failed to map (those groups are
/// all-zero in `values`).
#[derive(Debug, Clone)]
pub struct EncodedRecord {
    pub values: [f32; COLUMN_COUNT],
    pub unmapped: Vec<&'static str>,
}

impl EncodedRecord {
    pub fn as_array(&self) -> &[f32; COLUMN_COUNT] {
        &self.values
    }
}

// ============================================================================
// ENCODING PIPELINE
// ============================================================================

/// Encode a record into the model's input vector.
///
/// Pipeline (order matters for schema compatibility with the trained model):
/// 1. Derive digital access, region and age bracket.
/// 2. Map the four categorical labels to their survey codes.
/// 3. Emit one `onehot__<Group>_<code>` column per resolved field.
/// 4. Reindex against [`MODEL_COLUMNS`], zero-filling missing columns and
///    dropping produced columns the schema does not know.
pub fn encode(record: &InputRecord) -> EncodedRecord {
    let digital = mappings::digital_access(&record.internet_access, &record.computer_access);
    let region = mappings::STATE_TO_REGION.get(record.state.as_str()).copied();
    let age_bracket = mappings::age_bracket(record.age);
    let social_group = mappings::SOCIAL_GROUP_CODES.get(record.social_group.as_str()).copied();
    let marital_status = mappings::MARITAL_STATUS_CODES.get(record.marital_status.as_str()).copied();
    let rural_urban = mappings::RURAL_URBAN_CODES.get(record.rural_urban.as_str()).copied();
    let gender = mappings::GENDER_CODES.get(record.gender.as_str()).copied();

    // One column name per field. An unmapped category produces no column at
    // all, so the reindex below leaves its whole group at zero.
    let mut produced: Vec<String> = Vec::with_capacity(7);
    let mut unmapped: Vec<&'static str> = Vec::new();

    match social_group {
        Some(code) => produced.push(format!("onehot__Social Group_{}", code)),
        None => unmapped.push("Social Group"),
    }
    match rural_urban {
        Some(code) => produced.push(format!("onehot__Rural/Urban_{}", code)),
        None => unmapped.push("Rural/Urban"),
    }
    match gender {
        Some(code) => produced.push(format!("onehot__Gender_{}", code)),
        None => unmapped.push("Gender"),
    }
    match marital_status {
        Some(code) => produced.push(format!("onehot__Marital Status_{}", code)),
        None => unmapped.push("Marital Status"),
    }

    // Digital access and age bracket always resolve
    produced.push(format!("onehot__Digital Access_{}", digital));
    produced.push(format!("onehot__Age Bracket_{}", age_bracket));

    match region {
        Some(name) => produced.push(format!("onehot__Region_{}", name)),
        None => unmapped.push("Region"),
    }

    // Reindex-with-fill: align the produced columns to the fixed schema
    let mut values = [0.0f32; COLUMN_COUNT];
    for (i, column) in MODEL_COLUMNS.iter().enumerate() {
        if produced.iter().any(|p| p == column) {
            values[i] = 1.0;
        }
    }

    EncodedRecord { values, unmapped }
}
