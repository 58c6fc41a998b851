//! The boundary between phrase-specification expansion and realisation.
//!
//! This crate provides:
//! - [`PhraseElement`], [`PhraseFactory`], [`RealisationEngine`] - The
//!   capability contract a realisation engine exposes
//! - [`PhraseTree`] - A phrase element that records every capability invocation
//! - [`EnglishRealiser`] - A small reference engine rendering phrase trees as English
//! - [`pretty`] - An s-expression view of recorded phrase trees
//!
//! # Architecture
//!
//! ```text
//!   expansion engine                         realisation engine
//! ┌──────────────────┐  create_*()        ┌──────────────────────┐
//! │ clause builder   │ ─────────────────▶ │ PhraseFactory        │
//! │ element expander │  set_*/add_*()     │   └─ PhraseElement   │
//! │ slot dispatch    │ ─────────────────▶ │                      │
//! └──────────────────┘                    │ realise(root) → text │
//!                                         └──────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod english;
pub mod pretty;
pub mod tree;

pub use element::{Constituent, PhraseElement, PhraseFactory, RealisationEngine};
pub use english::EnglishRealiser;
pub use tree::{Argument, Invocation, PhraseTree, TreeFactory};
