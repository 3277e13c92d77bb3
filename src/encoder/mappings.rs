//! Static Mapping Tables
//!
//! Label-to-code and state-to-region tables the training pipeline used.
//! Built once at process start; lookups that miss return `None` and the
//! encoder degrades that group to all-zero instead of failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// STATE -> REGION
// ============================================================================

/// State/territory to region bucket (35 entries, 6 regions).
/// Union territories are folded into their geographic region.
pub static STATE_TO_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // North
        ("Jammu & Kashmir", "North India"),
        ("Himachal Pradesh", "North India"),
        ("Punjab", "North India"),
        ("Chandigarh", "North India"),
        ("Uttarakhand", "North India"),
        ("Haryana", "North India"),
        ("Delhi", "North India"),
        ("Rajasthan", "North India"),
        ("Uttar Pradesh", "North India"),
        // East
        ("Bihar", "East India"),
        ("West Bengal", "East India"),
        ("Jharkhand", "East India"),
        ("Odisha", "East India"),
        // Northeast
        ("Sikkim", "Northeast India"),
        ("Arunachal Pradesh", "Northeast India"),
        ("Nagaland", "Northeast India"),
        ("Manipur", "Northeast India"),
        ("Mizoram", "Northeast India"),
        ("Tripura", "Northeast India"),
        ("Meghalaya", "Northeast India"),
        ("Assam", "Northeast India"),
        // Central
        ("Chhattisgarh", "Central India"),
        ("Madhya Pradesh", "Central India"),
        // West
        ("Gujarat", "West India"),
        ("Maharashtra", "West India"),
        ("Goa", "West India"),
        ("Daman & Diu", "West India"),
        // South
        ("Andhra Pradesh", "South India"),
        ("Karnataka", "South India"),
        ("Kerala", "South India"),
        ("Tamil Nadu", "South India"),
        ("Pondicherry", "South India"),
        ("Telangana", "South India"),
        ("Lakshadweep", "South India"),
        ("Andaman and Nicobar Islands", "South India"),
    ])
});

// ============================================================================
// CATEGORICAL CODES
// ============================================================================

/// Social group labels to survey codes. 9 is the catch-all "Others" code
/// from the source dataset, not a typo.
pub static SOCIAL_GROUP_CODES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("Scheduled Tribes", 1),
        ("Scheduled Castes", 2),
        ("Other Backward Classes", 3),
        ("Others", 9),
    ])
});

pub static MARITAL_STATUS_CODES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("Single", 1),
        ("Married", 2),
        ("Widowed", 3),
    ])
});

pub static RURAL_URBAN_CODES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("Rural", 1),
        ("Urban", 2),
    ])
});

pub static GENDER_CODES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("Male", 1),
        ("Female", 2),
    ])
});

// ============================================================================
// DERIVED FEATURES
// ============================================================================

/// Bin an age into the bracket labels the model was trained on.
/// Boundaries are half-open: 18, 35 and 60 land in the upper bucket.
pub fn age_bracket(age: u32) -> &'static str {
    if age < 18 {
        "<18"
    } else if age < 35 {
        "18-35"
    } else if age < 60 {
        "35-60"
    } else {
        ">60"
    }
}

/// Count of digital access flags set. The comparison is against the literal
/// "Yes" exactly as in training; "yes", "YES" or anything else counts as no.
pub fn digital_access(internet_access: &str, computer_access: &str) -> u8 {
    let mut count = 0;
    if internet_access == "Yes" {
        count += 1;
    }
    if computer_access == "Yes" {
        count += 1;
    }
    count
}

// ============================================================================
// TESTS
// ============================================================================
