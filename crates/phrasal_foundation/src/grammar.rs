//! The closed grammar of phrase specifications.
//!
//! Node kinds, slot roles, and element capabilities are small closed sets.
//! Modelling them as enums lets every dispatch over them be an exhaustive
//! `match` instead of a string lookup that can fail at runtime.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// NodeKind
// =============================================================================

/// The discriminator of a composite phrase specification node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    /// An embedded clause (`{"type": "clause", "spec": {...}}`).
    Clause,
    /// A noun phrase with a head noun.
    NounPhrase,
    /// A verb phrase with a head verb.
    VerbPhrase,
    /// A preposition phrase (`preposition` + `noun`).
    PrepositionPhrase,
    /// A coordination of two or more phrases.
    CoordinatedPhrase,
}

impl NodeKind {
    /// All node kinds, in declaration order.
    pub const ALL: [NodeKind; 5] = [
        Self::Clause,
        Self::NounPhrase,
        Self::VerbPhrase,
        Self::PrepositionPhrase,
        Self::CoordinatedPhrase,
    ];

    /// Parses the value of a `type` discriminator.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// The `type` discriminator for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Clause => "clause",
            Self::NounPhrase => "noun_phrase",
            Self::VerbPhrase => "verb_phrase",
            Self::PrepositionPhrase => "preposition_phrase",
            Self::CoordinatedPhrase => "coordinated_phrase",
        }
    }

    /// Keys a node of this kind understands besides `type`.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Clause => &["spec"],
            Self::NounPhrase => &[
                "head",
                "determiner",
                "modifiers",
                "pre-modifiers",
                "post-modifiers",
                "complements",
                "features",
            ],
            Self::VerbPhrase => &[
                "head",
                "features",
                "modifiers",
                "pre-modifiers",
                "post-modifiers",
            ],
            Self::PrepositionPhrase => &["noun", "preposition"],
            Self::CoordinatedPhrase => &["coordinates", "conjunction"],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Role
// =============================================================================

/// A named grammatical relation that can be attached to a phrase element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// `subject`
    Subject,
    /// `object`
    Object,
    /// `indirect_object`
    IndirectObject,
    /// `verb`
    Verb,
    /// `preposition`
    Preposition,
    /// `determiner`
    Determiner,
    /// `complements`
    Complements,
    /// `modifiers`
    Modifiers,
    /// `pre-modifiers`
    PreModifiers,
    /// `post-modifiers`
    PostModifiers,
    /// `coordinates`
    Coordinates,
    /// `features`
    Features,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 12] = [
        Self::Subject,
        Self::Object,
        Self::IndirectObject,
        Self::Verb,
        Self::Preposition,
        Self::Determiner,
        Self::Complements,
        Self::Modifiers,
        Self::PreModifiers,
        Self::PostModifiers,
        Self::Coordinates,
        Self::Features,
    ];

    /// Roles a sentence specification applies, in application order.
    pub const CLAUSE: [Role; 7] = [
        Self::Subject,
        Self::Object,
        Self::IndirectObject,
        Self::Verb,
        Self::Complements,
        Self::Modifiers,
        Self::Features,
    ];

    /// Roles a noun phrase applies after its head, in application order.
    pub const NOUN_PHRASE: [Role; 6] = [
        Self::Determiner,
        Self::Modifiers,
        Self::PreModifiers,
        Self::PostModifiers,
        Self::Complements,
        Self::Features,
    ];

    /// Roles a verb phrase applies after its head, in application order.
    pub const VERB_PHRASE: [Role; 4] = [
        Self::Features,
        Self::Modifiers,
        Self::PreModifiers,
        Self::PostModifiers,
    ];

    /// The key naming this role in a phrase specification.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Object => "object",
            Self::IndirectObject => "indirect_object",
            Self::Verb => "verb",
            Self::Preposition => "preposition",
            Self::Determiner => "determiner",
            Self::Complements => "complements",
            Self::Modifiers => "modifiers",
            Self::PreModifiers => "pre-modifiers",
            Self::PostModifiers => "post-modifiers",
            Self::Coordinates => "coordinates",
            Self::Features => "features",
        }
    }

    /// Parses a role from its specification key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Capability
// =============================================================================

/// An operation a target phrase element exposes to the expansion engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Capability {
    /// `setDeterminer`
    SetDeterminer,
    /// `setSubject`
    SetSubject,
    /// `setObject`
    SetObject,
    /// `setIndirectObject`
    SetIndirectObject,
    /// `setVerb`
    SetVerb,
    /// `setPreposition`
    SetPreposition,
    /// `setNoun`
    SetNoun,
    /// `addCoordinate`
    AddCoordinate,
    /// `addComplement`
    AddComplement,
    /// `addModifier`
    AddModifier,
    /// `addPreModifier`
    AddPreModifier,
    /// `addPostModifier`
    AddPostModifier,
    /// `setFeature`
    SetFeature,
}

impl Capability {
    /// The conventional camel-case name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetDeterminer => "setDeterminer",
            Self::SetSubject => "setSubject",
            Self::SetObject => "setObject",
            Self::SetIndirectObject => "setIndirectObject",
            Self::SetVerb => "setVerb",
            Self::SetPreposition => "setPreposition",
            Self::SetNoun => "setNoun",
            Self::AddCoordinate => "addCoordinate",
            Self::AddComplement => "addComplement",
            Self::AddModifier => "addModifier",
            Self::AddPreModifier => "addPreModifier",
            Self::AddPostModifier => "addPostModifier",
            Self::SetFeature => "setFeature",
        }
    }

    /// Whether repeated invocations accumulate (`add*`) rather than replace (`set*`).
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(
            self,
            Self::AddCoordinate
                | Self::AddComplement
                | Self::AddModifier
                | Self::AddPreModifier
                | Self::AddPostModifier
        )
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
