//! Phrasal - JSON phrase specifications to sentences
//!
//! This crate re-exports all layers of the Phrasal system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: phrasal_runtime    — CLI, REPL, session, configuration
//! Layer 2: phrasal_spec       — Decoding, slot dispatch, expansion
//! Layer 1: phrasal_realiser   — Element traits, phrase trees, English realiser
//! Layer 0: phrasal_foundation — Core types (Error, grammar, feature table)
//! ```
//!
//! # Example
//!
//! ```
//! use phrasal::realiser::EnglishRealiser;
//! use phrasal::spec::{ExpansionConfig, realise_request};
//!
//! let request = serde_json::json!({"sentence": {"subject": "dog", "verb": "bark"}});
//! let text = realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).unwrap();
//! assert_eq!(text, "Dog barks.");
//! ```

pub use phrasal_foundation as foundation;
pub use phrasal_realiser as realiser;
pub use phrasal_runtime as runtime;
pub use phrasal_spec as spec;
