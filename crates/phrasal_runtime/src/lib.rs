//! REPL, CLI, and session handling for Phrasal.
//!
//! This crate provides:
//! - [`Session`] - Turns request documents into sentences and printable output
//! - [`Repl`] - Interactive read-eval-print loop over JSON requests
//! - [`RuntimeConfig`] - Presets, builders, and JSON configuration files
//! - [`init_logging`] - The `tracing` subscriber used by the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{Outcome, Repl};
pub use session::{Generation, Session, SessionStats, describe};
