//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use phrasal_foundation::{Error, ErrorContext, ErrorKind, NodeKind, PathSegment};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_type() {
    let err = Error::missing_type();
    assert!(matches!(err.kind, ErrorKind::MissingType));
    assert_eq!(format!("{err}"), "elements must have a type");
}

#[test]
fn error_unrecognized_node_type() {
    let err = Error::unrecognized_node_type("banana");
    assert!(matches!(err.kind, ErrorKind::UnrecognizedNodeType(ref tag) if tag == "banana"));
    assert!(format!("{err}").contains("banana"));
}

#[test]
fn error_missing_field() {
    let err = Error::missing_field(NodeKind::CoordinatedPhrase, "coordinates");
    let msg = format!("{err}");
    assert!(msg.contains("coordinated_phrase"));
    assert!(msg.contains("coordinates"));
}

#[test]
fn error_unrecognized_feature_value_lists_all_values() {
    let err = Error::unrecognized_feature_value(
        "number",
        "dual",
        vec!["singular".into(), "plural".into()],
    );
    assert_eq!(
        format!("{err}"),
        "unrecognised number: dual. Can only be singular, plural"
    );
}

#[test]
fn error_invalid_leaf() {
    let err = Error::invalid_leaf("a number");
    assert!(format!("{err}").contains("a number"));
}

#[test]
fn error_nesting_too_deep() {
    let err = Error::nesting_too_deep(64);
    assert!(matches!(err.kind, ErrorKind::NestingTooDeep { limit: 64 }));
    assert!(format!("{err}").contains("64"));
}

// =============================================================================
// Error Names
// =============================================================================

#[test]
fn every_structural_kind_has_a_stable_name() {
    let cases = [
        (Error::missing_type(), "MissingTypeError"),
        (Error::unrecognized_node_type("x"), "UnrecognizedNodeType"),
        (
            Error::missing_field(NodeKind::NounPhrase, "head"),
            "MissingRequiredField",
        ),
        (Error::missing_sentence(), "MissingSentenceError"),
        (Error::unrecognized_feature("mood"), "UnrecognizedFeature"),
        (
            Error::unrecognized_feature_value("tense", "x", vec![]),
            "UnrecognizedFeatureValue",
        ),
        (Error::invalid_leaf("null"), "InvalidLeafType"),
        (Error::nesting_too_deep(1), "NestingTooDeep"),
    ];
    for (err, name) in cases {
        assert_eq!(err.kind.name(), name);
        assert!(err.is_structural());
    }
}

#[test]
fn transport_errors_are_not_structural() {
    let parse = Error::new(ErrorKind::ParseError {
        message: "EOF while parsing".into(),
        line: 1,
        column: 2,
    });
    assert!(!parse.is_structural());
    assert_eq!(format!("{parse}"), "parse error at 1:2: EOF while parsing");
    assert!(!Error::new(ErrorKind::Internal("bug".into())).is_structural());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_from_path() {
    let path = [
        PathSegment::Key("sentence".into()),
        PathSegment::Key("object".into()),
        PathSegment::Key("spec".into()),
        PathSegment::Key("subject".into()),
        PathSegment::Index(1),
    ];
    let ctx = ErrorContext::at(&path);
    assert_eq!(ctx.path_string(), "sentence.object.spec.subject[1]");
}

#[test]
fn context_display_with_source() {
    let ctx = ErrorContext::new().with_source("req.json").with_key("sentence");
    assert_eq!(format!("{ctx}"), "in req.json at sentence");
}

#[test]
fn empty_context_displays_nothing() {
    assert_eq!(format!("{}", ErrorContext::new()), "");
}
