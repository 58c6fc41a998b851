//! Integration tests for Layer 2: Spec
//!
//! Tests for decoding, slot dispatch, and expansion of phrase specifications.

mod builders;
mod properties;
