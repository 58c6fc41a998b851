//! Configuration for the CLI and REPL.
//!
//! A [`RuntimeConfig`] can be built from presets, adjusted with `with_*`
//! builders, or loaded from a JSON file. Missing fields take their defaults,
//! so a configuration file only needs the settings it changes:
//!
//! ```json
//! { "show_tree": true, "expansion": { "max_depth": 16 } }
//! ```

use std::path::Path;

use phrasal_foundation::{Error, ErrorContext, ErrorKind, Result};
use phrasal_realiser::pretty::PrettyConfig;
use phrasal_spec::{ExpansionConfig, parse_request};
use serde::{Deserialize, Serialize};

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Decoder and expander limits.
    pub expansion: ExpansionConfig,
    /// Print the phrase tree after each sentence.
    pub show_tree: bool,
    /// Print results and errors as JSON objects.
    pub json_output: bool,
    /// Default log filter when no environment filter is set.
    pub log_level: String,
    /// Print the banner when the REPL starts.
    pub banner: bool,
    /// Line width at which printed trees are broken.
    pub tree_width: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            expansion: ExpansionConfig::default(),
            show_tree: false,
            json_output: false,
            log_level: "warn".to_string(),
            banner: true,
            tree_width: 80,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration for inspecting expansion: trees on, debug logging.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            show_tree: true,
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error if it
    /// is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorKind::Io(err.to_string()))
                .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;
        Self::from_json(&source).map_err(|err| {
            let context = err.context.clone().unwrap_or_default();
            err.with_context(context.with_source(path.display().to_string()))
        })
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed JSON or fields of the wrong type.
    pub fn from_json(source: &str) -> Result<Self> {
        let value = parse_request(source)?;
        serde_json::from_value(value).map_err(|err| {
            Error::new(ErrorKind::ParseError {
                message: err.to_string(),
                line: 0,
                column: 0,
            })
        })
    }

    /// Sets the expansion configuration.
    #[must_use]
    pub fn with_expansion(mut self, expansion: ExpansionConfig) -> Self {
        self.expansion = expansion;
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.expansion.max_depth = max_depth;
        self
    }

    /// Enables or disables strict key checking.
    #[must_use]
    pub fn with_strict_keys(mut self, strict: bool) -> Self {
        self.expansion.strict_keys = strict;
        self
    }

    /// Enables or disables tree output.
    #[must_use]
    pub fn with_tree(mut self, show: bool) -> Self {
        self.show_tree = show;
        self
    }

    /// Enables or disables JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Sets the default log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables or disables the REPL banner.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// The pretty-printer settings for trees.
    #[must_use]
    pub fn pretty(&self) -> PrettyConfig {
        PrettyConfig {
            max_width: self.tree_width,
            ..PrettyConfig::default()
        }
    }
}
