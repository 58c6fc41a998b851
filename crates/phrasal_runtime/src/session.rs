//! Session state for the CLI and REPL.
//!
//! A session owns the runtime configuration and the realisation engine, and
//! turns request documents into sentences and printable output.

use std::path::Path;

use phrasal_foundation::{Error, ErrorContext, ErrorKind, Result};
use phrasal_realiser::pretty::pretty_print_with_config;
use phrasal_realiser::{EnglishRealiser, PhraseTree, RealisationEngine};
use phrasal_spec::{ErrorPayload, generate_sentence, parse_request};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::RuntimeConfig;

/// Source name used for requests read from standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// The result of one successful request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Generation {
    /// The realised sentence.
    pub text: String,
    /// The phrase tree the sentence was realised from.
    pub tree: PhraseTree,
}

/// Counters over the lifetime of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Requests that produced a sentence.
    pub generated: usize,
    /// Requests that were rejected.
    pub rejected: usize,
}

/// Session state.
#[derive(Debug, Default)]
pub struct Session {
    config: RuntimeConfig,
    engine: EnglishRealiser,
    stats: SessionStats,
}

impl Session {
    /// Creates a session with the given configuration.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            engine: EnglishRealiser::new(),
            stats: SessionStats::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns the configuration for modification.
    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    /// Returns the session counters.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Expands and realises a parsed request.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation in the request.
    pub fn generate(&mut self, request: &Value) -> Result<Generation> {
        let result = generate_sentence(request, &self.engine, &self.config.expansion).map(|tree| {
            let text = self.engine.realise_sentence(&tree);
            Generation { text, tree }
        });
        match &result {
            Ok(_) => self.stats.generated += 1,
            Err(err) => {
                self.stats.rejected += 1;
                debug!(error = err.kind.name(), "request rejected");
            }
        }
        result
    }

    /// Parses request text, then expands and realises it.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed JSON, otherwise the first
    /// structural violation in the request.
    pub fn generate_source(&mut self, source: &str) -> Result<Generation> {
        match parse_request(source) {
            Ok(request) => self.generate(&request),
            Err(err) => {
                self.stats.rejected += 1;
                Err(err)
            }
        }
    }

    /// Reads a request file (`-` for standard input) and realises it.
    ///
    /// Errors carry the file name as their source.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise any error
    /// from [`Session::generate_source`].
    pub fn generate_file(&mut self, path: &str) -> Result<Generation> {
        let source_name = if path == "-" { STDIN_SOURCE } else { path };
        info!(source = source_name, "reading request");
        read_source(path)
            .and_then(|source| self.generate_source(&source))
            .map_err(|err| with_source(err, source_name))
    }

    /// Formats a successful generation according to the output settings.
    #[must_use]
    pub fn render(&self, generation: &Generation) -> String {
        if self.config.json_output {
            return serde_json::to_string_pretty(generation)
                .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"));
        }
        if self.config.show_tree {
            let tree = pretty_print_with_config(&generation.tree, &self.config.pretty());
            format!("{}\n{tree}", generation.text)
        } else {
            generation.text.clone()
        }
    }

    /// Formats an error according to the output settings.
    #[must_use]
    pub fn render_error(&self, err: &Error) -> String {
        if self.config.json_output {
            let payload = ErrorPayload::from(err);
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| describe(err))
        } else {
            describe(err)
        }
    }
}

/// Describes an error for a terminal: the message followed by its location.
#[must_use]
pub fn describe(err: &Error) -> String {
    let location = err
        .context
        .as_ref()
        .map(ToString::to_string)
        .filter(|location| !location.is_empty());
    match location {
        Some(location) => format!("Error: {} ({location})", err.kind),
        None => format!("Error: {}", err.kind),
    }
}

fn read_source(path: &str) -> Result<String> {
    let read = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(Path::new(path))
    };
    read.map_err(|err| Error::new(ErrorKind::Io(err.to_string())))
}

fn with_source(err: Error, source: &str) -> Error {
    let context = err.context.clone().unwrap_or_else(ErrorContext::new);
    err.with_context(context.with_source(source))
}
