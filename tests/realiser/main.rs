//! Integration tests for Layer 1: Realiser
//!
//! Tests for the recording phrase tree and the English realiser.

mod english;
