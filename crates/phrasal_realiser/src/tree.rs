//! A phrase element that records its capability invocations.
//!
//! [`PhraseTree`] keeps every invocation in order instead of interpreting it,
//! so the tree mirrors exactly what the expansion engine asked for. The
//! English realiser reads the recorded invocations back; tests inspect them
//! directly.

use phrasal_foundation::{Capability, Feature, FeatureValue, NodeKind};
use serde::Serialize;

use crate::element::{Constituent, PhraseElement, PhraseFactory};

/// The argument of one recorded invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
    /// A lexical leaf.
    Word(String),
    /// A nested element.
    Phrase(PhraseTree),
    /// A feature assignment.
    Feature {
        /// The feature capability identifier.
        feature: Feature,
        /// The resolved value.
        value: FeatureValue,
    },
}

impl Argument {
    /// Returns the word if this argument is a lexical leaf.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Returns the nested tree if this argument is a phrase.
    #[must_use]
    pub fn as_phrase(&self) -> Option<&PhraseTree> {
        match self {
            Self::Phrase(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<Constituent<PhraseTree>> for Argument {
    fn from(value: Constituent<PhraseTree>) -> Self {
        match value {
            Constituent::Word(word) => Self::Word(word),
            Constituent::Phrase(tree) => Self::Phrase(tree),
        }
    }
}

/// One recorded capability invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invocation {
    /// The capability that was invoked.
    pub capability: Capability,
    /// The argument it was invoked with.
    pub argument: Argument,
}

/// A phrase element recording its invocations in order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhraseTree {
    kind: NodeKind,
    invocations: Vec<Invocation>,
}

impl PhraseTree {
    /// Creates an empty element of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            invocations: Vec::new(),
        }
    }

    /// Returns the kind of element.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns every recorded invocation, oldest first.
    #[must_use]
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Returns true if nothing has been invoked on this element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Returns the arguments of every invocation of `capability`, oldest first.
    pub fn arguments(&self, capability: Capability) -> impl Iterator<Item = &Argument> {
        self.invocations
            .iter()
            .filter(move |invocation| invocation.capability == capability)
            .map(|invocation| &invocation.argument)
    }

    /// Returns the argument of the most recent invocation of `capability`.
    ///
    /// This is the effective value of a `set*` capability.
    #[must_use]
    pub fn last(&self, capability: Capability) -> Option<&Argument> {
        self.arguments(capability).last()
    }

    /// Returns how many times `capability` was invoked.
    #[must_use]
    pub fn count(&self, capability: Capability) -> usize {
        self.arguments(capability).count()
    }

    /// Returns the words passed to `capability`, skipping nested phrases.
    #[must_use]
    pub fn words(&self, capability: Capability) -> Vec<&str> {
        self.arguments(capability)
            .filter_map(Argument::as_word)
            .collect()
    }

    /// Returns the effective value of a feature, if it was set.
    #[must_use]
    pub fn feature(&self, feature: Feature) -> Option<&FeatureValue> {
        self.arguments(Capability::SetFeature)
            .filter_map(|argument| match argument {
                Argument::Feature { feature: f, value } if *f == feature => Some(value),
                _ => None,
            })
            .last()
    }

    fn record(&mut self, capability: Capability, value: Constituent<Self>) {
        self.invocations.push(Invocation {
            capability,
            argument: value.into(),
        });
    }
}

impl PhraseElement for PhraseTree {
    fn set_determiner(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetDeterminer, value);
    }

    fn set_subject(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetSubject, value);
    }

    fn set_object(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetObject, value);
    }

    fn set_indirect_object(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetIndirectObject, value);
    }

    fn set_verb(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetVerb, value);
    }

    fn set_preposition(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetPreposition, value);
    }

    fn set_noun(&mut self, value: Constituent<Self>) {
        self.record(Capability::SetNoun, value);
    }

    fn add_coordinate(&mut self, value: Constituent<Self>) {
        self.record(Capability::AddCoordinate, value);
    }

    fn add_complement(&mut self, value: Constituent<Self>) {
        self.record(Capability::AddComplement, value);
    }

    fn add_modifier(&mut self, value: Constituent<Self>) {
        self.record(Capability::AddModifier, value);
    }

    fn add_pre_modifier(&mut self, value: Constituent<Self>) {
        self.record(Capability::AddPreModifier, value);
    }

    fn add_post_modifier(&mut self, value: Constituent<Self>) {
        self.record(Capability::AddPostModifier, value);
    }

    fn set_feature(&mut self, feature: Feature, value: FeatureValue) {
        self.invocations.push(Invocation {
            capability: Capability::SetFeature,
            argument: Argument::Feature { feature, value },
        });
    }
}

/// A factory producing [`PhraseTree`] elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeFactory;

impl PhraseFactory for TreeFactory {
    type Element = PhraseTree;

    fn create_clause(&self) -> PhraseTree {
        PhraseTree::new(NodeKind::Clause)
    }

    fn create_noun_phrase(&self) -> PhraseTree {
        PhraseTree::new(NodeKind::NounPhrase)
    }

    fn create_verb_phrase(&self) -> PhraseTree {
        PhraseTree::new(NodeKind::VerbPhrase)
    }

    fn create_preposition_phrase(&self) -> PhraseTree {
        PhraseTree::new(NodeKind::PrepositionPhrase)
    }

    fn create_coordinated_phrase(&self) -> PhraseTree {
        PhraseTree::new(NodeKind::CoordinatedPhrase)
    }
}
