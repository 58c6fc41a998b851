//! Expansion limits and strictness.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of composite nodes.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration of the decoder and expander.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Maximum number of composite nodes on any path from the sentence root.
    pub max_depth: usize,
    /// Reject keys a node kind does not understand instead of ignoring them.
    pub strict_keys: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_keys: false,
        }
    }
}

impl ExpansionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables strict key checking.
    #[must_use]
    pub const fn with_strict_keys(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }
}
