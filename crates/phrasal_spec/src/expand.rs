//! The element expander and the clause builder.
//!
//! Walks a typed [`PhraseSpec`] depth-first and builds the matching phrase
//! elements through a [`PhraseFactory`]. Every element is fully populated
//! before it is handed to its parent, and nothing is retained once the root
//! is returned.
//!
//! # Expansion Algorithm
//!
//! 1. Words and handles are returned unchanged
//! 2. A composite node creates one element of its kind
//! 3. Mandatory parts (head, noun, preposition, coordinates) are attached first
//! 4. Optional slots are applied in the fixed role order of the node kind

use phrasal_foundation::{Error, ErrorKind, Feature, FeatureValue, NodeKind, Result, Role};
use phrasal_realiser::{Constituent, PhraseElement, PhraseFactory};
use tracing::trace;

use crate::config::ExpansionConfig;
use crate::node::{
    ClauseSpec, CoordinatedPhraseSpec, NounPhraseSpec, PhraseSpec, PrepositionPhraseSpec, Slot,
    VerbPhraseSpec,
};
use crate::slots::apply_slot;

// =============================================================================
// Expander
// =============================================================================

/// Builds phrase elements from specifications.
pub struct Expander<'a, F: PhraseFactory> {
    /// Factory for new elements.
    factory: &'a F,
    /// Limits.
    config: &'a ExpansionConfig,
    /// Composite nodes currently being built.
    depth: usize,
}

impl<'a, F: PhraseFactory> Expander<'a, F> {
    /// Creates an expander over the given factory.
    pub fn new(factory: &'a F, config: &'a ExpansionConfig) -> Self {
        Self {
            factory,
            config,
            depth: 0,
        }
    }

    /// Expands one node.
    ///
    /// Words and handles are returned as-is, so expanding the result of an
    /// expansion again yields the same constituent.
    ///
    /// # Errors
    ///
    /// Returns `NestingTooDeep` if the node nests more composite nodes than
    /// the configured maximum, and `EmptyRequiredField` for a coordination
    /// without coordinates.
    pub fn expand(&mut self, node: PhraseSpec<F::Element>) -> Result<Constituent<F::Element>> {
        match node {
            PhraseSpec::Word(word) => Ok(Constituent::Word(word)),
            PhraseSpec::Handle(element) => Ok(Constituent::Phrase(element)),
            PhraseSpec::Clause(spec) => self.build_clause(spec).map(Constituent::Phrase),
            PhraseSpec::NounPhrase(spec) => self
                .nested(NodeKind::NounPhrase, |this| this.noun_phrase(spec))
                .map(Constituent::Phrase),
            PhraseSpec::VerbPhrase(spec) => self
                .nested(NodeKind::VerbPhrase, |this| this.verb_phrase(spec))
                .map(Constituent::Phrase),
            PhraseSpec::PrepositionPhrase(spec) => self
                .nested(NodeKind::PrepositionPhrase, |this| {
                    this.preposition_phrase(*spec)
                })
                .map(Constituent::Phrase),
            PhraseSpec::CoordinatedPhrase(spec) => self
                .nested(NodeKind::CoordinatedPhrase, |this| {
                    this.coordinated_phrase(spec)
                })
                .map(Constituent::Phrase),
        }
    }

    /// Builds exactly one clause element from a sentence specification.
    ///
    /// An empty specification yields an empty clause.
    ///
    /// # Errors
    ///
    /// Propagates errors from the expansion of any slot value.
    pub fn build_clause(&mut self, spec: ClauseSpec<F::Element>) -> Result<F::Element> {
        self.nested(NodeKind::Clause, |this| {
            let mut clause = this.factory.create_clause();
            this.apply_slots(&mut clause, spec.slots)?;
            Ok(clause)
        })
    }

    /// Runs `build` one level deeper, enforcing the nesting limit.
    fn nested<T>(&mut self, kind: NodeKind, build: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.config.max_depth {
            return Err(Error::nesting_too_deep(self.config.max_depth));
        }
        trace!(%kind, depth = self.depth, "expanding");
        self.depth += 1;
        let result = build(self);
        self.depth -= 1;
        result
    }

    fn apply_slots(&mut self, target: &mut F::Element, slots: Vec<Slot<F::Element>>) -> Result<()> {
        for slot in slots {
            apply_slot(target, slot, |item| self.expand(item))?;
        }
        Ok(())
    }

    fn noun_phrase(&mut self, spec: NounPhraseSpec<F::Element>) -> Result<F::Element> {
        let mut np = self.factory.create_noun_phrase();
        let head = self.expand(*spec.head)?;
        np.set_noun(head);
        self.apply_slots(&mut np, spec.slots)?;
        Ok(np)
    }

    fn verb_phrase(&mut self, spec: VerbPhraseSpec<F::Element>) -> Result<F::Element> {
        let mut vp = self.factory.create_verb_phrase();
        let head = self.expand(*spec.head)?;
        vp.set_verb(head);
        self.apply_slots(&mut vp, spec.slots)?;
        Ok(vp)
    }

    fn preposition_phrase(&mut self, spec: PrepositionPhraseSpec<F::Element>) -> Result<F::Element> {
        let mut pp = self.factory.create_preposition_phrase();
        let noun = self.expand(*spec.noun)?;
        pp.add_complement(noun);
        let preposition = Slot::Phrases {
            role: Role::Preposition,
            value: spec.preposition,
        };
        apply_slot(&mut pp, preposition, |item| self.expand(item))?;
        Ok(pp)
    }

    fn coordinated_phrase(&mut self, spec: CoordinatedPhraseSpec<F::Element>) -> Result<F::Element> {
        if spec.coordinates.is_empty() {
            return Err(Error::new(ErrorKind::EmptyRequiredField {
                node: NodeKind::CoordinatedPhrase,
                field: "coordinates",
            }));
        }
        let mut coordination = self.factory.create_coordinated_phrase();
        for coordinate in spec.coordinates {
            let coordinate = self.expand(coordinate)?;
            coordination.add_coordinate(coordinate);
        }
        if let Some(conjunction) = spec.conjunction {
            coordination.set_feature(Feature::Conjunction, FeatureValue::Text(conjunction));
        }
        Ok(coordination)
    }
}

// =============================================================================
// Convenience functions
// =============================================================================

/// Expands one node with a fresh expander.
///
/// # Errors
///
/// See [`Expander::expand`].
pub fn expand<F: PhraseFactory>(
    factory: &F,
    node: PhraseSpec<F::Element>,
    config: &ExpansionConfig,
) -> Result<Constituent<F::Element>> {
    Expander::new(factory, config).expand(node)
}

/// Builds a clause with a fresh expander.
///
/// # Errors
///
/// See [`Expander::build_clause`].
pub fn build_clause<F: PhraseFactory>(
    factory: &F,
    spec: ClauseSpec<F::Element>,
    config: &ExpansionConfig,
) -> Result<F::Element> {
    Expander::new(factory, config).build_clause(spec)
}
