//! Integration tests for the feature table
//!
//! Tests symbolic resolution, free-text pass-through, and rejection.

use phrasal_foundation::{
    ErrorKind, FEATURE_TABLE, Feature, FeatureValue, FeatureValues, Number, Tense, resolve_feature,
};

#[test]
fn symbolic_features_resolve() {
    assert_eq!(
        resolve_feature("tense", "past").unwrap(),
        (Feature::Tense, FeatureValue::Tense(Tense::Past))
    );
    assert_eq!(
        resolve_feature("number", "plural").unwrap(),
        (Feature::Number, FeatureValue::Number(Number::Plural))
    );
    assert_eq!(
        resolve_feature("passive", "true").unwrap(),
        (Feature::Passive, FeatureValue::Flag(true))
    );
    assert_eq!(
        resolve_feature("perfect", "false").unwrap(),
        (Feature::Perfect, FeatureValue::Flag(false))
    );
}

#[test]
fn free_text_features_pass_through() {
    for name in ["cue_phrase", "complementiser"] {
        let (feature, value) = resolve_feature(name, "Oddly Cased text").unwrap();
        assert!(feature.is_free_text());
        assert_eq!(value, FeatureValue::Text("Oddly Cased text".into()));
    }
}

#[test]
fn conjunction_is_only_set_by_coordination() {
    let err = resolve_feature("conjunction", "or").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedFeature(ref name) if name == "conjunction"));
    assert_eq!(
        FEATURE_TABLE.iter().filter(|entry| entry.in_feature_map).count(),
        6
    );
}

#[test]
fn unknown_feature_is_rejected() {
    let err = resolve_feature("mood", "subjunctive").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedFeature(ref name) if name == "mood"));
}

#[test]
fn unknown_value_lists_the_accepted_values() {
    let err = resolve_feature("tense", "yesterday").unwrap_err();
    match err.kind {
        ErrorKind::UnrecognizedFeatureValue {
            feature,
            value,
            valid,
        } => {
            assert_eq!(feature, "tense");
            assert_eq!(value, "yesterday");
            assert_eq!(valid, vec!["past", "present", "future"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn symbolic_lookup_is_case_sensitive() {
    assert!(resolve_feature("tense", "Past").is_err());
    assert!(resolve_feature("passive", "True").is_err());
}

#[test]
fn table_rows_match_their_features() {
    for entry in &FEATURE_TABLE {
        assert_eq!(entry.feature.name(), entry.name);
        assert_eq!(
            entry.feature.is_free_text(),
            matches!(entry.values, FeatureValues::FreeText)
        );
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn free_text_is_verbatim(raw in ".{0,24}") {
            for entry in FEATURE_TABLE
                .iter()
                .filter(|entry| entry.in_feature_map && entry.feature.is_free_text()) {
                let (_, value) = resolve_feature(entry.name, &raw).unwrap();
                prop_assert_eq!(value, FeatureValue::Text(raw.clone()));
            }
        }

        #[test]
        fn symbolic_values_round_trip_through_display(row in 0usize..FEATURE_TABLE.len()) {
            let entry = &FEATURE_TABLE[row];
            if let FeatureValues::Symbolic(values) = entry.values {
                for (key, expected) in values {
                    let (_, value) = resolve_feature(entry.name, key).unwrap();
                    prop_assert_eq!(&value, expected);
                    prop_assert_eq!(value.to_string(), *key);
                }
            }
        }

        #[test]
        fn unknown_symbolic_values_are_rejected(raw in "[A-Z]{1,8}") {
            let err = resolve_feature("tense", &raw).unwrap_err();
            let is_value_error = matches!(err.kind, ErrorKind::UnrecognizedFeatureValue { .. });
            prop_assert!(is_value_error);
        }
    }
}
