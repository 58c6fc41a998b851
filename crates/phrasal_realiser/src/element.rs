//! The capability contract of a realisation engine.
//!
//! The expansion engine never inspects a phrase element. It creates elements
//! through a [`PhraseFactory`] and populates them through the capabilities of
//! [`PhraseElement`]; everything else belongs to the engine.

use phrasal_foundation::{Capability, Error, ErrorKind, Feature, FeatureValue, Result};

/// A value passed to a phrase element capability.
///
/// Lexical leaves are handed over as bare words, never wrapped in an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Constituent<E> {
    /// A raw word naming a head or argument.
    Word(String),
    /// An element built by the engine's factory.
    Phrase(E),
}

impl<E> Constituent<E> {
    /// Creates a word constituent.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self::Word(word.into())
    }

    /// Returns the word if this is a lexical leaf.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            Self::Phrase(_) => None,
        }
    }

    /// Returns the element if this is a phrase.
    #[must_use]
    pub fn as_phrase(&self) -> Option<&E> {
        match self {
            Self::Word(_) => None,
            Self::Phrase(element) => Some(element),
        }
    }
}

impl<E> From<&str> for Constituent<E> {
    fn from(word: &str) -> Self {
        Self::Word(word.to_string())
    }
}

/// A mutable phrase element owned by a realisation engine.
///
/// `set_*` capabilities replace the previous value; `add_*` capabilities
/// accumulate in invocation order.
pub trait PhraseElement: Sized {
    /// Sets the determiner of a noun phrase.
    fn set_determiner(&mut self, value: Constituent<Self>);

    /// Sets the subject of a clause.
    fn set_subject(&mut self, value: Constituent<Self>);

    /// Sets the direct object of a clause.
    fn set_object(&mut self, value: Constituent<Self>);

    /// Sets the indirect object of a clause.
    fn set_indirect_object(&mut self, value: Constituent<Self>);

    /// Sets the verb of a clause or the head of a verb phrase.
    fn set_verb(&mut self, value: Constituent<Self>);

    /// Sets the preposition of a preposition phrase.
    fn set_preposition(&mut self, value: Constituent<Self>);

    /// Sets the head noun of a noun phrase.
    fn set_noun(&mut self, value: Constituent<Self>);

    /// Appends a coordinate to a coordinated phrase.
    fn add_coordinate(&mut self, value: Constituent<Self>);

    /// Appends a complement.
    fn add_complement(&mut self, value: Constituent<Self>);

    /// Appends a modifier.
    fn add_modifier(&mut self, value: Constituent<Self>);

    /// Appends a pre-modifier.
    fn add_pre_modifier(&mut self, value: Constituent<Self>);

    /// Appends a post-modifier.
    fn add_post_modifier(&mut self, value: Constituent<Self>);

    /// Sets a grammatical feature.
    fn set_feature(&mut self, feature: Feature, value: FeatureValue);

    /// Invokes a constituent-taking capability by identifier.
    ///
    /// # Errors
    ///
    /// Returns an internal error for [`Capability::SetFeature`], which takes a
    /// feature rather than a constituent.
    fn invoke(&mut self, capability: Capability, value: Constituent<Self>) -> Result<()> {
        match capability {
            Capability::SetDeterminer => self.set_determiner(value),
            Capability::SetSubject => self.set_subject(value),
            Capability::SetObject => self.set_object(value),
            Capability::SetIndirectObject => self.set_indirect_object(value),
            Capability::SetVerb => self.set_verb(value),
            Capability::SetPreposition => self.set_preposition(value),
            Capability::SetNoun => self.set_noun(value),
            Capability::AddCoordinate => self.add_coordinate(value),
            Capability::AddComplement => self.add_complement(value),
            Capability::AddModifier => self.add_modifier(value),
            Capability::AddPreModifier => self.add_pre_modifier(value),
            Capability::AddPostModifier => self.add_post_modifier(value),
            Capability::SetFeature => {
                return Err(Error::new(ErrorKind::Internal(
                    "setFeature takes a feature, not a constituent".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Creates empty phrase elements, one factory operation per node kind.
pub trait PhraseFactory {
    /// The element type this factory creates.
    type Element: PhraseElement;

    /// Creates an empty clause.
    fn create_clause(&self) -> Self::Element;

    /// Creates an empty noun phrase.
    fn create_noun_phrase(&self) -> Self::Element;

    /// Creates an empty verb phrase.
    fn create_verb_phrase(&self) -> Self::Element;

    /// Creates an empty preposition phrase.
    fn create_preposition_phrase(&self) -> Self::Element;

    /// Creates an empty coordinated phrase.
    fn create_coordinated_phrase(&self) -> Self::Element;
}

/// A factory that can also render the trees it builds.
pub trait RealisationEngine: PhraseFactory {
    /// Renders an element as a phrase, without sentence punctuation.
    fn realise(&self, root: &Self::Element) -> String;

    /// Renders an element as a sentence: capitalised and punctuated.
    fn realise_sentence(&self, root: &Self::Element) -> String;
}
