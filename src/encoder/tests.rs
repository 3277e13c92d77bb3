//! Integration tests for the encoding pipeline
//!
//! Exercises the full encode path against the fixed schema: region lookup,
//! age binning, digital access counting and the reindex zero-fill behavior.

use crate::encoder::{encode, layout, mappings, InputRecord, COLUMN_COUNT, FEATURE_GROUPS};

/// A record with every field inside the known domains.
fn valid_record() -> InputRecord {
    InputRecord {
        social_group: "Scheduled Tribes".to_string(),
        rural_urban: "Rural".to_string(),
        state: "Kerala".to_string(),
        gender: "Female".to_string(),
        age: 29,
        internet_access: "Yes".to_string(),
        computer_access: "No".to_string(),
        marital_status: "Married".to_string(),
    }
}

fn group_sum(values: &[f32; COLUMN_COUNT], group: &str) -> f32 {
    let &(_, start, len) = FEATURE_GROUPS
        .iter()
        .find(|(name, _, _)| *name == group)
        .expect("unknown group");
    values[start..start + len].iter().sum()
}

#[test]
fn test_vector_shape_and_domain() {
    let encoded = encode(&valid_record());
    assert_eq!(encoded.values.len(), COLUMN_COUNT);
    for v in encoded.values {
        assert!(v == 0.0 || v == 1.0, "non-binary value {}", v);
    }
}

#[test]
fn test_fully_mapped_record_sets_one_column_per_group() {
    let encoded = encode(&valid_record());
    for &(name, _, _) in FEATURE_GROUPS {
        assert_eq!(group_sum(&encoded.values, name), 1.0, "group {}", name);
    }
    assert!(encoded.unmapped.is_empty());
}

#[test]
fn test_known_scenario_exact_columns() {
    // Scheduled Tribes=1, Rural=1, Female=2, Married=2, one access flag,
    // age 29 -> 18-35, Kerala -> South India
    let encoded = encode(&valid_record());
    let expected = [
        "onehot__Social Group_1",
        "onehot__Rural/Urban_1",
        "onehot__Gender_2",
        "onehot__Marital Status_2",
        "onehot__Digital Access_1",
        "onehot__Age Bracket_18-35",
        "onehot__Region_South India",
    ];
    for (i, value) in encoded.values.iter().enumerate() {
        let name = layout::column_name(i).unwrap();
        let should_be_hot = expected.contains(&name);
        assert_eq!(*value == 1.0, should_be_hot, "column {}", name);
    }
}

#[test]
fn test_every_state_sets_exactly_one_region_column() {
    for (&state, &region) in mappings::STATE_TO_REGION.iter() {
        let mut record = valid_record();
        record.state = state.to_string();
        let encoded = encode(&record);
        assert_eq!(group_sum(&encoded.values, "Region"), 1.0, "state {}", state);

        let column = format!("onehot__Region_{}", region);
        let index = layout::column_index(&column).expect("region column in schema");
        assert_eq!(encoded.values[index], 1.0, "state {} -> {}", state, region);
    }
}

#[test]
fn test_unknown_state_zeroes_region_group_only() {
    let mut record = valid_record();
    record.state = "Atlantis".to_string();
    let encoded = encode(&record);

    assert_eq!(group_sum(&encoded.values, "Region"), 0.0);
    for &(name, _, _) in FEATURE_GROUPS.iter().filter(|(n, _, _)| *n != "Region") {
        assert_eq!(group_sum(&encoded.values, name), 1.0, "group {}", name);
    }
    assert_eq!(encoded.unmapped, vec!["Region"]);
}

#[test]
fn test_age_boundaries_fall_in_upper_bucket() {
    let cases = [
        (0, "onehot__Age Bracket_<18"),
        (17, "onehot__Age Bracket_<18"),
        (18, "onehot__Age Bracket_18-35"),
        (34, "onehot__Age Bracket_18-35"),
        (35, "onehot__Age Bracket_35-60"),
        (59, "onehot__Age Bracket_35-60"),
        (60, "onehot__Age Bracket_>60"),
        (104, "onehot__Age Bracket_>60"),
    ];
    for (age, column) in cases {
        let mut record = valid_record();
        record.age = age;
        let encoded = encode(&record);
        let index = layout::column_index(column).unwrap();
        assert_eq!(encoded.values[index], 1.0, "age {}", age);
        assert_eq!(group_sum(&encoded.values, "Age Bracket"), 1.0, "age {}", age);
    }
}

#[test]
fn test_digital_access_levels() {
    let cases = [
        ("No", "No", "onehot__Digital Access_0"),
        ("Yes", "No", "onehot__Digital Access_1"),
        ("No", "Yes", "onehot__Digital Access_1"),
        ("Yes", "Yes", "onehot__Digital Access_2"),
        // Only the literal "Yes" counts
        ("yes", "YES", "onehot__Digital Access_0"),
    ];
    for (internet, computer, column) in cases {
        let mut record = valid_record();
        record.internet_access = internet.to_string();
        record.computer_access = computer.to_string();
        let encoded = encode(&record);
        let index = layout::column_index(column).unwrap();
        assert_eq!(encoded.values[index], 1.0, "{}/{}", internet, computer);
    }
}

#[test]
fn test_garbage_record_encodes_to_all_zero_groups() {
    let record = InputRecord {
        social_group: "Nobility".to_string(),
        rural_urban: "Suburban".to_string(),
        state: "Atlantis".to_string(),
        gender: "Unknown".to_string(),
        age: 40,
        internet_access: "maybe".to_string(),
        computer_access: "".to_string(),
        marital_status: "Divorced".to_string(),
    };
    let encoded = encode(&record);

    // Derived groups still resolve; all label-mapped groups zero out
    assert_eq!(group_sum(&encoded.values, "Age Bracket"), 1.0);
    assert_eq!(group_sum(&encoded.values, "Digital Access"), 1.0);
    for group in ["Social Group", "Rural/Urban", "Gender", "Marital Status", "Region"] {
        assert_eq!(group_sum(&encoded.values, group), 0.0, "group {}", group);
        assert!(encoded.unmapped.contains(&group));
    }
}
