//! The feature table.
//!
//! Maps each feature name to the capability identifier it sets on a phrase
//! element and to the values it accepts. Enumerated features resolve a
//! symbolic value through a fixed table; free-text features pass their value
//! through untouched. The table is static data and is never mutated.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Grammatical tense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tense {
    /// `past`
    Past,
    /// `present`
    Present,
    /// `future`
    Future,
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Number {
    /// `singular`
    Singular,
    /// `plural`
    Plural,
}

/// A feature capability identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feature {
    /// `tense`
    Tense,
    /// `number`
    Number,
    /// `passive`
    Passive,
    /// `perfect`
    Perfect,
    /// `cue_phrase`
    CuePhrase,
    /// `complementiser`
    Complementiser,
    /// `conjunction`
    Conjunction,
}

/// A resolved feature value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FeatureValue {
    /// A tense.
    Tense(Tense),
    /// A grammatical number.
    Number(Number),
    /// A boolean flag (`passive`, `perfect`).
    Flag(bool),
    /// Free text (`cue_phrase`, `complementiser`, `conjunction`).
    Text(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tense(Tense::Past) => f.write_str("past"),
            Self::Tense(Tense::Present) => f.write_str("present"),
            Self::Tense(Tense::Future) => f.write_str("future"),
            Self::Number(Number::Singular) => f.write_str("singular"),
            Self::Number(Number::Plural) => f.write_str("plural"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// The values a feature accepts.
#[derive(Debug)]
pub enum FeatureValues {
    /// A closed set of symbolic values.
    Symbolic(&'static [(&'static str, FeatureValue)]),
    /// Any string.
    FreeText,
}

/// One row of the feature table.
#[derive(Debug)]
pub struct FeatureEntry {
    /// The feature name as written in a specification.
    pub name: &'static str,
    /// The capability identifier the value is set under.
    pub feature: Feature,
    /// The accepted values.
    pub values: FeatureValues,
    /// Whether a `features` mapping may name this row. `conjunction` is only
    /// set through a coordinated phrase.
    pub in_feature_map: bool,
}

const TENSE_VALUES: &[(&str, FeatureValue)] = &[
    ("past", FeatureValue::Tense(Tense::Past)),
    ("present", FeatureValue::Tense(Tense::Present)),
    ("future", FeatureValue::Tense(Tense::Future)),
];

const NUMBER_VALUES: &[(&str, FeatureValue)] = &[
    ("singular", FeatureValue::Number(Number::Singular)),
    ("plural", FeatureValue::Number(Number::Plural)),
];

const FLAG_VALUES: &[(&str, FeatureValue)] = &[
    ("true", FeatureValue::Flag(true)),
    ("false", FeatureValue::Flag(false)),
];

/// The process-wide feature table.
pub static FEATURE_TABLE: [FeatureEntry; 7] = [
    FeatureEntry {
        name: "tense",
        feature: Feature::Tense,
        values: FeatureValues::Symbolic(TENSE_VALUES),
        in_feature_map: true,
    },
    FeatureEntry {
        name: "number",
        feature: Feature::Number,
        values: FeatureValues::Symbolic(NUMBER_VALUES),
        in_feature_map: true,
    },
    FeatureEntry {
        name: "passive",
        feature: Feature::Passive,
        values: FeatureValues::Symbolic(FLAG_VALUES),
        in_feature_map: true,
    },
    FeatureEntry {
        name: "perfect",
        feature: Feature::Perfect,
        values: FeatureValues::Symbolic(FLAG_VALUES),
        in_feature_map: true,
    },
    FeatureEntry {
        name: "cue_phrase",
        feature: Feature::CuePhrase,
        values: FeatureValues::FreeText,
        in_feature_map: true,
    },
    FeatureEntry {
        name: "complementiser",
        feature: Feature::Complementiser,
        values: FeatureValues::FreeText,
        in_feature_map: true,
    },
    FeatureEntry {
        name: "conjunction",
        feature: Feature::Conjunction,
        values: FeatureValues::FreeText,
        in_feature_map: false,
    },
];

impl Feature {
    /// Looks up the feature table row a `features` mapping may name.
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedFeature` if no such row has this name.
    pub fn lookup(name: &str) -> Result<&'static FeatureEntry> {
        FEATURE_TABLE
            .iter()
            .find(|entry| entry.in_feature_map && entry.name == name)
            .ok_or_else(|| Error::unrecognized_feature(name))
    }

    /// The table row for this feature.
    #[must_use]
    pub fn entry(self) -> &'static FeatureEntry {
        let row = match self {
            Self::Tense => 0,
            Self::Number => 1,
            Self::Passive => 2,
            Self::Perfect => 3,
            Self::CuePhrase => 4,
            Self::Complementiser => 5,
            Self::Conjunction => 6,
        };
        &FEATURE_TABLE[row]
    }

    /// The feature name as written in a specification.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Whether this feature takes free text.
    #[must_use]
    pub fn is_free_text(self) -> bool {
        matches!(self.entry().values, FeatureValues::FreeText)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FeatureEntry {
    /// Resolves a raw value against this row.
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedFeatureValue` if the row is symbolic and `raw` is
    /// not one of its keys.
    pub fn resolve(&self, raw: &str) -> Result<FeatureValue> {
        match self.values {
            FeatureValues::FreeText => Ok(FeatureValue::Text(raw.to_string())),
            FeatureValues::Symbolic(values) => values
                .iter()
                .find(|(key, _)| *key == raw)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    Error::unrecognized_feature_value(self.name, raw, self.valid_values())
                }),
        }
    }

    /// The accepted symbolic values, empty for free-text features.
    #[must_use]
    pub fn valid_values(&self) -> Vec<String> {
        match self.values {
            FeatureValues::FreeText => Vec::new(),
            FeatureValues::Symbolic(values) => {
                values.iter().map(|(key, _)| (*key).to_string()).collect()
            }
        }
    }
}

/// Resolves a feature name and raw value to a capability identifier and value.
///
/// # Errors
///
/// Returns `UnrecognizedFeature` for an unknown name and
/// `UnrecognizedFeatureValue` for a symbolic value outside the accepted set.
pub fn resolve_feature(name: &str, raw: &str) -> Result<(Feature, FeatureValue)> {
    let entry = Feature::lookup(name)?;
    Ok((entry.feature, entry.resolve(raw)?))
}
