//! Observable behaviour of expansion over JSON requests
//!
//! Each test drives a request through decoding and expansion with the
//! recording factory and inspects the capability invocation trace.

use phrasal_foundation::{Capability, ErrorKind, Feature, FeatureValue, NodeKind, Tense};
use phrasal_realiser::{Argument, PhraseTree, TreeFactory};
use phrasal_spec::{ExpansionConfig, decode_node, expand, generate_sentence};
use serde_json::{Value, json};

fn generate(request: &Value) -> phrasal_foundation::Result<PhraseTree> {
    generate_sentence(request, &TreeFactory, &ExpansionConfig::default())
}

fn expand_node(node: &Value) -> phrasal_foundation::Result<Argument> {
    let config = ExpansionConfig::default();
    let spec = decode_node::<PhraseTree>(node, &config)?;
    expand(&TreeFactory, spec, &config).map(Argument::from)
}

fn phrase(argument: Option<&Argument>) -> &PhraseTree {
    argument.and_then(Argument::as_phrase).expect("a phrase")
}

// =============================================================================
// Role Mapping
// =============================================================================

#[test]
fn subject_maps_to_one_set_subject() {
    let clause = generate(&json!({"sentence": {"subject": "dog"}})).unwrap();
    assert_eq!(clause.invocations().len(), 1);
    assert_eq!(clause.count(Capability::SetSubject), 1);
    assert_eq!(clause.words(Capability::SetSubject), vec!["dog"]);
}

#[test]
fn modifiers_apply_in_input_order() {
    let clause = generate(&json!({
        "sentence": {"subject": {"type": "noun_phrase", "head": "ball", "modifiers": ["big", "red"]}}
    }))
    .unwrap();
    let np = phrase(clause.last(Capability::SetSubject));
    assert_eq!(np.words(Capability::AddModifier), vec!["big", "red"]);
}

#[test]
fn clause_roles_apply_in_fixed_order() {
    let clause = generate(&json!({
        "sentence": {
            "features": {"tense": "past"},
            "modifiers": "today",
            "complements": "home",
            "verb": "walk",
            "indirect_object": "him",
            "object": "it",
            "subject": "I"
        }
    }))
    .unwrap();
    let order: Vec<Capability> = clause.invocations().iter().map(|i| i.capability).collect();
    assert_eq!(
        order,
        vec![
            Capability::SetSubject,
            Capability::SetObject,
            Capability::SetIndirectObject,
            Capability::SetVerb,
            Capability::AddComplement,
            Capability::AddModifier,
            Capability::SetFeature,
        ]
    );
}

#[test]
fn noun_phrase_head_is_set_before_its_slots() {
    let np = expand_node(&json!({
        "type": "noun_phrase", "complements": "x", "determiner": "the", "head": "dog"
    }))
    .unwrap();
    let np = phrase(Some(&np));
    assert_eq!(np.invocations()[0].capability, Capability::SetNoun);
    assert_eq!(np.invocations()[1].capability, Capability::SetDeterminer);
    assert_eq!(np.invocations()[2].capability, Capability::AddComplement);
}

// =============================================================================
// Leaves
// =============================================================================

#[test]
fn words_are_not_wrapped() {
    assert_eq!(expand_node(&json!("dog")).unwrap(), Argument::Word("dog".into()));
}

#[test]
fn non_string_leaves_are_rejected() {
    for (leaf, found) in [
        (json!(42), "a number"),
        (json!(true), "a boolean"),
        (Value::Null, "null"),
    ] {
        let err = expand_node(&leaf).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidLeafType(shape) if shape == found));
    }
}

#[test]
fn nested_arrays_are_invalid_leaves() {
    let err = generate(&json!({"sentence": {"subject": [["dog"]]}})).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidLeafType("an array")));
    assert_eq!(err.context.unwrap().path_string(), "sentence.subject[0]");
}

// =============================================================================
// Structural Errors
// =============================================================================

#[test]
fn preposition_phrase_without_preposition() {
    let err = expand_node(&json!({"type": "preposition_phrase", "noun": "table"})).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingRequiredField {
            node: NodeKind::PrepositionPhrase,
            field: "preposition"
        }
    ));
}

#[test]
fn coordinated_phrase_without_coordinates() {
    let err = expand_node(&json!({"type": "coordinated_phrase"})).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingRequiredField {
            field: "coordinates",
            ..
        }
    ));
}

#[test]
fn unknown_type_is_named() {
    let err = expand_node(&json!({"type": "banana"})).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedNodeType(ref tag) if tag == "banana"));
}

#[test]
fn composite_without_type() {
    let err = expand_node(&json!({"head": "dog"})).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingType));
}

#[test]
fn missing_sentence() {
    for request in [json!({}), json!({"sentence": "dog"}), json!([1, 2])] {
        let err = generate(&request).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingSentence), "{request}");
    }
}

#[test]
fn first_violation_aborts_the_request() {
    let err = generate(&json!({
        "sentence": {
            "subject": {"type": "banana"},
            "object": {"type": "noun_phrase"}
        }
    }))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedNodeType(_)));
}

// =============================================================================
// Sentences and Clauses
// =============================================================================

#[test]
fn empty_sentence_builds_an_empty_clause() {
    let clause = generate(&json!({"sentence": {}})).unwrap();
    assert_eq!(clause.kind(), NodeKind::Clause);
    assert!(clause.is_empty());
}

#[test]
fn nested_clause_is_fully_built() {
    let clause = generate(&json!({
        "sentence": {"object": {"type": "clause", "spec": {"subject": "it", "verb": "rains"}}}
    }))
    .unwrap();
    let inner = phrase(clause.last(Capability::SetObject));
    assert_eq!(inner.kind(), NodeKind::Clause);
    assert_eq!(inner.words(Capability::SetSubject), vec!["it"]);
    assert_eq!(inner.words(Capability::SetVerb), vec!["rains"]);
}

// =============================================================================
// Coordination and Features
// =============================================================================

#[test]
fn coordination_with_conjunction() {
    let coord = expand_node(&json!({
        "type": "coordinated_phrase", "coordinates": ["cats", "dogs"], "conjunction": "and"
    }))
    .unwrap();
    let coord = phrase(Some(&coord));
    assert_eq!(coord.words(Capability::AddCoordinate), vec!["cats", "dogs"]);
    assert_eq!(
        coord.feature(Feature::Conjunction),
        Some(&FeatureValue::Text("and".into()))
    );
}

#[test]
fn conjunction_is_free_text() {
    let coord = expand_node(&json!({
        "type": "coordinated_phrase", "coordinates": ["tea", "coffee"], "conjunction": "as well as"
    }))
    .unwrap();
    assert_eq!(
        phrase(Some(&coord)).feature(Feature::Conjunction),
        Some(&FeatureValue::Text("as well as".into()))
    );
}

#[test]
fn features_apply_in_input_order() {
    let clause = generate(&json!({
        "sentence": {"features": {"perfect": true, "tense": "past", "cue_phrase": "however"}}
    }))
    .unwrap();
    let applied: Vec<Feature> = clause
        .arguments(Capability::SetFeature)
        .filter_map(|argument| match argument {
            Argument::Feature { feature, .. } => Some(*feature),
            _ => None,
        })
        .collect();
    assert_eq!(applied, vec![Feature::Perfect, Feature::Tense, Feature::CuePhrase]);
    assert_eq!(
        clause.feature(Feature::Tense),
        Some(&FeatureValue::Tense(Tense::Past))
    );
}

#[test]
fn unknown_feature_value_reports_the_valid_set() {
    let err = generate(&json!({"sentence": {"features": {"tense": "yesterday"}}})).unwrap_err();
    assert_eq!(
        err.kind.to_string(),
        "unrecognised tense: yesterday. Can only be past, present, future"
    );
    assert_eq!(err.context.unwrap().path_string(), "sentence.features.tense");
}

#[test]
fn unknown_feature_name() {
    let err = generate(&json!({"sentence": {"features": {"mood": "grumpy"}}})).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedFeature(ref name) if name == "mood"));
}

#[test]
fn conjunction_is_not_a_clause_feature() {
    let request = json!({"sentence": {"subject": "dog", "features": {"conjunction": "or"}}});
    let err = generate(&request).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedFeature(ref name) if name == "conjunction"));
    assert_eq!(
        err.context.unwrap().path_string(),
        "sentence.features.conjunction"
    );
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn nesting_limit() {
    let mut spec = json!({"subject": "it", "verb": "rain"});
    for _ in 0..4 {
        spec = json!({"object": {"type": "clause", "spec": spec}});
    }
    let request = json!({"sentence": spec});

    let shallow = ExpansionConfig::new().with_max_depth(4);
    let err = generate_sentence(&request, &TreeFactory, &shallow).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NestingTooDeep { limit: 4 }));

    let enough = ExpansionConfig::new().with_max_depth(5);
    assert!(generate_sentence(&request, &TreeFactory, &enough).is_ok());
}

#[test]
fn strict_keys() {
    let request = json!({"sentence": {"subject": "dog", "adverb": "loudly"}});
    assert!(generate(&request).is_ok());

    let strict = ExpansionConfig::new().with_strict_keys(true);
    let err = generate_sentence(&request, &TreeFactory, &strict).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnrecognizedKey { node: NodeKind::Clause, ref key } if key == "adverb"
    ));
}
