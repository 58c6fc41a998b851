//! Error types for the Phrasal system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. Every
//! structural violation aborts the whole request, so a single error carries
//! the path from the request root to the node that broke the rule.

use std::fmt;

use thiserror::Error;

use crate::grammar::NodeKind;

/// Result alias used across all Phrasal crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Phrasal operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing `type` discriminator error.
    #[must_use]
    pub fn missing_type() -> Self {
        Self::new(ErrorKind::MissingType)
    }

    /// Creates an unrecognized node type error.
    #[must_use]
    pub fn unrecognized_node_type(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedNodeType(tag.into()))
    }

    /// Creates a missing required field error.
    #[must_use]
    pub fn missing_field(node: NodeKind, field: &'static str) -> Self {
        Self::new(ErrorKind::MissingRequiredField { node, field })
    }

    /// Creates a missing sentence error.
    #[must_use]
    pub fn missing_sentence() -> Self {
        Self::new(ErrorKind::MissingSentence)
    }

    /// Creates an unrecognized feature error.
    #[must_use]
    pub fn unrecognized_feature(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedFeature(name.into()))
    }

    /// Creates an unrecognized feature value error.
    #[must_use]
    pub fn unrecognized_feature_value(
        feature: impl Into<String>,
        value: impl Into<String>,
        valid: Vec<String>,
    ) -> Self {
        Self::new(ErrorKind::UnrecognizedFeatureValue {
            feature: feature.into(),
            value: value.into(),
            valid,
        })
    }

    /// Creates an invalid leaf error for a value of the given JSON shape.
    #[must_use]
    pub fn invalid_leaf(found: &'static str) -> Self {
        Self::new(ErrorKind::InvalidLeafType(found))
    }

    /// Creates a nesting limit error.
    #[must_use]
    pub fn nesting_too_deep(limit: usize) -> Self {
        Self::new(ErrorKind::NestingTooDeep { limit })
    }

    /// Returns true if this is a structural validation error of the request
    /// (as opposed to an I/O or parse failure of the transport).
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::ParseError { .. } | ErrorKind::Io(_) | ErrorKind::Internal(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A composite node carries no `type` discriminator.
    #[error("elements must have a type")]
    MissingType,

    /// The `type` discriminator names no known node kind.
    #[error("the type is unrecognised: {0}")]
    UnrecognizedNodeType(String),

    /// A field that the node kind requires is absent.
    #[error("{node} requires the field `{field}`")]
    MissingRequiredField {
        /// The node kind being expanded.
        node: NodeKind,
        /// The missing field.
        field: &'static str,
    },

    /// A required sequence field is present but empty.
    #[error("{node} requires at least one entry in `{field}`")]
    EmptyRequiredField {
        /// The node kind being expanded.
        node: NodeKind,
        /// The empty field.
        field: &'static str,
    },

    /// The request has no `sentence` object.
    #[error("request must contain a 'sentence' object")]
    MissingSentence,

    /// A feature name that is not in the feature table.
    #[error("unrecognised feature: {0}")]
    UnrecognizedFeature(String),

    /// A symbolic feature value outside the accepted set.
    #[error("unrecognised {feature}: {value}. Can only be {}", valid.join(", "))]
    UnrecognizedFeatureValue {
        /// The feature name.
        feature: String,
        /// The rejected value.
        value: String,
        /// Every value the feature accepts.
        valid: Vec<String>,
    },

    /// A leaf that is neither a word, a handle, nor a composite node.
    #[error("invalid leaf: expected a string or a typed node, got {0}")]
    InvalidLeafType(&'static str),

    /// A slot holds a value of the wrong shape.
    #[error("invalid value for `{role}`: expected {expected}, got {found}")]
    InvalidSlotValue {
        /// The slot name.
        role: String,
        /// Description of the accepted shape.
        expected: &'static str,
        /// The shape that was found.
        found: &'static str,
    },

    /// A key that no node kind recognizes (only raised in strict mode).
    #[error("unrecognised key `{key}` in {node}")]
    UnrecognizedKey {
        /// The node kind being expanded.
        node: NodeKind,
        /// The offending key.
        key: String,
    },

    /// Input nesting exceeds the configured maximum depth.
    #[error("nesting too deep: more than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },

    /// The request body is not valid JSON.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Reading a request or configuration failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// The stable name of this kind, as reported in error payloads.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MissingType => "MissingTypeError",
            Self::UnrecognizedNodeType(_) => "UnrecognizedNodeType",
            Self::MissingRequiredField { .. } => "MissingRequiredField",
            Self::EmptyRequiredField { .. } => "EmptyRequiredField",
            Self::MissingSentence => "MissingSentenceError",
            Self::UnrecognizedFeature(_) => "UnrecognizedFeature",
            Self::UnrecognizedFeatureValue { .. } => "UnrecognizedFeatureValue",
            Self::InvalidLeafType(_) => "InvalidLeafType",
            Self::InvalidSlotValue { .. } => "InvalidSlotValue",
            Self::UnrecognizedKey { .. } => "UnrecognizedKey",
            Self::NestingTooDeep { .. } => "NestingTooDeep",
            Self::ParseError { .. } => "ParseError",
            Self::Io(_) => "IoError",
            Self::Internal(_) => "InternalError",
        }
    }
}

/// One step of the path from the request root to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A mapping key.
    Key(String),
    /// A sequence index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or request name.
    pub source: Option<String>,
    /// Path from the request root to the offending node.
    pub path: Vec<PathSegment>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context pointing at the given path.
    #[must_use]
    pub fn at(path: &[PathSegment]) -> Self {
        Self {
            source: None,
            path: path.to_vec(),
        }
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a key segment.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.path.push(PathSegment::Key(key.into()));
        self
    }

    /// Appends an index segment.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    /// Renders the path as `sentence.object.spec.subject[1]`.
    #[must_use]
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            if let PathSegment::Key(_) = segment {
                if !out.is_empty() {
                    out.push('.');
                }
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if !self.path.is_empty() {
                write!(f, " ")?;
            }
        }
        if !self.path.is_empty() {
            write!(f, "at {}", self.path_string())?;
        }
        Ok(())
    }
}
