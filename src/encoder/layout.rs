//! Feature Layout - Centralized Column Schema
//!
//! **CRITICAL: This file controls the model input schema**
//!
//! The trained model knows nothing about column names, only positions.
//! The order below MUST match the column order the model was fit on.
//! Changing it silently breaks every prediction.

// ============================================================================
// MODEL COLUMNS (Authoritative source)
// ============================================================================

/// One-hot column names in the exact order the model expects them.
/// This is the SINGLE SOURCE OF TRUTH for the input schema.
pub const MODEL_COLUMNS: &[&str] = &[
    // === Social Group (0-3) ===
    "onehot__Social Group_1",
    "onehot__Social Group_2",
    "onehot__Social Group_3",
    "onehot__Social Group_9",
    // === Rural/Urban (4-5) ===
    "onehot__Rural/Urban_1",
    "onehot__Rural/Urban_2",
    // === Gender (6-7) ===
    "onehot__Gender_1",
    "onehot__Gender_2",
    // === Marital Status (8-10) ===
    "onehot__Marital Status_1",
    "onehot__Marital Status_2",
    "onehot__Marital Status_3",
    // === Digital Access (11-13) ===
    "onehot__Digital Access_0",
    "onehot__Digital Access_1",
    "onehot__Digital Access_2",
    // === Age Bracket (14-17) ===
    "onehot__Age Bracket_18-35",
    "onehot__Age Bracket_35-60",
    "onehot__Age Bracket_<18",
    "onehot__Age Bracket_>60",
    // === Region (18-23) ===
    "onehot__Region_Central India",
    "onehot__Region_East India",
    "onehot__Region_North India",
    "onehot__Region_Northeast India",
    "onehot__Region_South India",
    "onehot__Region_West India",
];

/// Total number of model input columns.
/// IMPORTANT: Must match MODEL_COLUMNS.len()!
pub const COLUMN_COUNT: usize = 24;

// ============================================================================
// FEATURE GROUPS
// ============================================================================

/// Feature groups as (name, start index, column count).
/// Exactly one column per group is hot for a fully mapped record; an
/// unmapped category leaves its whole group at zero.
pub const FEATURE_GROUPS: &[(&str, usize, usize)] = &[
    ("Social Group", 0, 4),
    ("Rural/Urban", 4, 2),
    ("Gender", 6, 2),
    ("Marital Status", 8, 3),
    ("Digital Access", 11, 3),
    ("Age Bracket", 14, 4),
    ("Region", 18, 6),
];

// ============================================================================
// COLUMN LOOKUP
// ============================================================================

/// Get column index by name (O(n) but columns are few)
pub fn column_index(name: &str) -> Option<usize> {
    MODEL_COLUMNS.iter().position(|&c| c == name)
}

/// Get column name by index
pub fn column_name(index: usize) -> Option<&'static str> {
    MODEL_COLUMNS.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
