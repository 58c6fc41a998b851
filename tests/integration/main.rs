//! Cross-layer integration tests for Phrasal
//!
//! Tests that verify correct interaction between multiple crates.

mod repl;
mod requests;
