//! Core vocabulary shared by every Phrasal layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with the path to the offending node
//! - [`NodeKind`], [`Role`], [`Capability`] - The closed grammar of phrase specifications
//! - [`Feature`], [`FeatureValue`] - The feature table and its resolution rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod feature;
pub mod grammar;

pub use error::{Error, ErrorContext, ErrorKind, PathSegment, Result};
pub use feature::{
    FEATURE_TABLE, Feature, FeatureEntry, FeatureValue, FeatureValues, Number, Tense, resolve_feature,
};
pub use grammar::{Capability, NodeKind, Role};
