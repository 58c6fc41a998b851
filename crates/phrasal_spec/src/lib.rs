//! Expansion of JSON phrase specifications into phrase trees.
//!
//! This crate provides:
//! - [`node`] - Typed phrase specifications with single-or-list slot values
//! - [`decode`] - JSON decoding and structural validation with error paths
//! - [`slots`] - The slot dispatch table mapping roles to capabilities
//! - [`expand`] - The element expander and the clause builder
//! - [`request`] - Whole-request handling on top of a realisation engine
//!
//! # Example
//!
//! ```
//! use phrasal_realiser::EnglishRealiser;
//! use phrasal_spec::{ExpansionConfig, parse_request, realise_request};
//!
//! let request = parse_request(r#"{
//!     "sentence": {
//!         "subject": {"type": "noun_phrase", "head": "dog", "determiner": "the"},
//!         "verb": "chase",
//!         "object": {"type": "noun_phrase", "head": "cat", "determiner": "a"},
//!         "features": {"tense": "past"}
//!     }
//! }"#).unwrap();
//! let text = realise_request(&request, &EnglishRealiser, &ExpansionConfig::default()).unwrap();
//! assert_eq!(text, "The dog chased a cat.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod decode;
pub mod expand;
pub mod node;
pub mod request;
pub mod slots;


pub use config::{DEFAULT_MAX_DEPTH, ExpansionConfig};
pub use decode::{Decoder, decode_node, decode_request};
pub use expand::{Expander, build_clause, expand};
pub use node::{
    ClauseSpec, CoordinatedPhraseSpec, FeatureSpec, NounPhraseSpec, OneOrMany, PhraseSpec,
    PrepositionPhraseSpec, Slot, VerbPhraseSpec,
};
pub use request::{
    ErrorPayload, Response, generate_sentence, parse_request, realise_request, respond,
};
pub use slots::{Dispatch, SLOT_TABLE, SlotEntry, apply_slot, dispatch};
