//! Whole-request handling: JSON text in, phrase tree or sentence out.

use phrasal_foundation::{Error, ErrorKind, Result};
use phrasal_realiser::{PhraseFactory, RealisationEngine};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ExpansionConfig;
use crate::decode::Decoder;
use crate::expand::build_clause;

/// Parses a request body.
///
/// # Errors
///
/// Returns `ParseError` with the line and column of the first syntax error.
pub fn parse_request(source: &str) -> Result<Value> {
    serde_json::from_str(source).map_err(|err| {
        let message = err.to_string();
        // serde_json appends the position, which ParseError reports separately.
        let message = message
            .split(" at line ")
            .next()
            .unwrap_or_default()
            .to_string();
        Error::new(ErrorKind::ParseError {
            message,
            line: err.line(),
            column: err.column(),
        })
    })
}

/// Validates a request and builds its sentence clause.
///
/// # Errors
///
/// Returns the first structural violation in the request.
pub fn generate_sentence<F: PhraseFactory>(
    request: &Value,
    factory: &F,
    config: &ExpansionConfig,
) -> Result<F::Element> {
    let spec = Decoder::new(config).decode_request(request)?;
    debug!(slots = spec.slots().len(), depth = spec.depth(), "request decoded");
    build_clause(factory, spec, config)
}

/// Builds a request's sentence and realises it with terminal punctuation.
///
/// # Errors
///
/// Returns the first structural violation in the request.
pub fn realise_request<R: RealisationEngine>(
    request: &Value,
    engine: &R,
    config: &ExpansionConfig,
) -> Result<String> {
    let clause = generate_sentence(request, engine, config)?;
    let text = engine.realise_sentence(&clause);
    debug!(len = text.len(), "sentence realised");
    Ok(text)
}

/// The error body returned for a rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    /// The name of the violated rule, e.g. `MissingRequiredField`.
    pub error: &'static str,
    /// A human-readable description.
    pub message: String,
    /// Path to the offending node, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&Error> for ErrorPayload {
    fn from(err: &Error) -> Self {
        let path = err
            .context
            .as_ref()
            .map(|context| context.path_string())
            .filter(|path| !path.is_empty());
        Self {
            error: err.kind.name(),
            message: err.kind.to_string(),
            path,
        }
    }
}

/// The outcome of one request, as returned to a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// The realised sentence.
    Sentence {
        /// The surface text.
        text: String,
    },
    /// The request was rejected.
    Rejected(ErrorPayload),
}

/// Parses, expands, and realises one request body.
#[must_use]
pub fn respond<R: RealisationEngine>(body: &str, engine: &R, config: &ExpansionConfig) -> Response {
    match parse_request(body).and_then(|request| realise_request(&request, engine, config)) {
        Ok(text) => Response::Sentence { text },
        Err(err) => Response::Rejected(ErrorPayload::from(&err)),
    }
}
