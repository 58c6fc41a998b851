//! Request handling integration tests
//!
//! Tests the complete path from request text to sentence or error payload.

use phrasal::realiser::EnglishRealiser;
use phrasal::spec::{ExpansionConfig, Response, realise_request, respond};
use serde_json::json;

fn respond_default(body: &str) -> serde_json::Value {
    serde_json::to_value(respond(body, &EnglishRealiser, &ExpansionConfig::default())).unwrap()
}

// =============================================================================
// Sentences
// =============================================================================

#[test]
fn minimal_sentence() {
    let request = json!({"sentence": {"subject": "dog", "verb": "bark"}});
    let text = realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).unwrap();
    assert_eq!(text, "Dog barks.");
}

#[test]
fn past_tense_with_determiners() {
    let request = json!({
        "sentence": {
            "subject": {"type": "noun_phrase", "head": "dog", "determiner": "the"},
            "verb": "chase",
            "object": {"type": "noun_phrase", "head": "cat", "determiner": "a"},
            "features": {"tense": "past"}
        }
    });
    let text = realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).unwrap();
    assert_eq!(text, "The dog chased a cat.");
}

#[test]
fn coordinated_subject_agrees_in_number() {
    let request = json!({
        "sentence": {
            "subject": {
                "type": "coordinated_phrase",
                "coordinates": [
                    {"type": "noun_phrase", "head": "cat", "determiner": "the"},
                    {"type": "noun_phrase", "head": "dog", "determiner": "the"}
                ]
            },
            "verb": "sleep"
        }
    });
    let text = realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).unwrap();
    assert_eq!(text, "The cat and the dog sleep.");
}

#[test]
fn empty_sentence_is_accepted() {
    let request = json!({"sentence": {}});
    assert!(realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).is_ok());
}

// =============================================================================
// Responses
// =============================================================================

#[test]
fn response_carries_text() {
    let response = respond_default(r#"{"sentence": {"subject": "dog", "verb": "bark"}}"#);
    assert_eq!(response, json!({"text": "Dog barks."}));
}

#[test]
fn response_carries_error_and_path() {
    let response = respond_default(
        r#"{"sentence": {"subject": {"type": "noun_phrase", "determiner": "the"}}}"#,
    );
    assert_eq!(response["error"], "MissingRequiredField");
    assert_eq!(response["path"], "sentence.subject");
    assert!(response["message"].as_str().unwrap().contains("head"));
}

#[test]
fn missing_sentence_has_no_path() {
    let response = respond_default(r#"{"subject": "dog"}"#);
    assert_eq!(response["error"], "MissingSentenceError");
    assert!(response.get("path").is_none());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let response = respond(
        "{\"sentence\": ",
        &EnglishRealiser,
        &ExpansionConfig::default(),
    );
    let Response::Rejected(payload) = response else {
        panic!("expected a rejection");
    };
    assert_eq!(payload.error, "ParseError");
    assert!(payload.message.starts_with("parse error at 1:"));
}

#[test]
fn invalid_feature_value_lists_choices() {
    let response = respond_default(r#"{"sentence": {"verb": "go", "features": {"tense": "someday"}}}"#);
    assert_eq!(response["error"], "UnrecognizedFeatureValue");
    assert_eq!(response["path"], "sentence.features.tense");
    let message = response["message"].as_str().unwrap();
    assert!(message.contains("someday"));
    assert!(message.contains("past"));
}

#[test]
fn strict_mode_reports_unknown_keys() {
    let body = r#"{"sentence": {"subject": "dog", "colour": "red"}}"#;
    let lenient = respond(body, &EnglishRealiser, &ExpansionConfig::default());
    assert!(matches!(lenient, Response::Sentence { .. }));

    let strict = respond(body, &EnglishRealiser, &ExpansionConfig::new().with_strict_keys(true));
    let Response::Rejected(payload) = strict else {
        panic!("expected a rejection");
    };
    assert_eq!(payload.error, "UnrecognizedKey");
}
