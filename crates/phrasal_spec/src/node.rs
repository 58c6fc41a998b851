//! Typed phrase specifications.
//!
//! A [`PhraseSpec`] is the decoded form of one JSON node: a closed tagged
//! union over the lexical leaves and the five composite kinds. Slot values are
//! normalized to [`OneOrMany`] once, at decode time, so the expander never
//! inspects JSON shapes.
//!
//! Specifications can also be built directly:
//!
//! ```
//! use phrasal_realiser::PhraseTree;
//! use phrasal_spec::{ClauseSpec, NounPhraseSpec, PhraseSpec};
//!
//! let sentence: ClauseSpec<PhraseTree> = ClauseSpec::new()
//!     .subject(NounPhraseSpec::new("dog").determiner("the"))
//!     .verb("chase")
//!     .object(vec![PhraseSpec::from("cats"), PhraseSpec::from("mice")]);
//! assert_eq!(sentence.slots().len(), 3);
//! ```

use phrasal_foundation::{Feature, FeatureValue, NodeKind, Result, Role, resolve_feature};
use phrasal_realiser::Constituent;

// =============================================================================
// OneOrMany
// =============================================================================

/// A slot value given either as a single item or as a sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum OneOrMany<T> {
    /// A scalar value: the capability is invoked once.
    One(T),
    /// A sequence: the capability is invoked once per item, in order.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns true for an empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    /// Converts into a vector of items.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<E> From<PhraseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: PhraseSpec<E>) -> Self {
        Self::One(spec)
    }
}

impl<E> From<&str> for OneOrMany<PhraseSpec<E>> {
    fn from(word: &str) -> Self {
        Self::One(word.into())
    }
}

impl<E> From<NounPhraseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: NounPhraseSpec<E>) -> Self {
        Self::One(spec.into())
    }
}

impl<E> From<VerbPhraseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: VerbPhraseSpec<E>) -> Self {
        Self::One(spec.into())
    }
}

impl<E> From<PrepositionPhraseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: PrepositionPhraseSpec<E>) -> Self {
        Self::One(spec.into())
    }
}

impl<E> From<CoordinatedPhraseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: CoordinatedPhraseSpec<E>) -> Self {
        Self::One(spec.into())
    }
}

impl<E> From<ClauseSpec<E>> for OneOrMany<PhraseSpec<E>> {
    fn from(spec: ClauseSpec<E>) -> Self {
        Self::One(spec.into())
    }
}

// =============================================================================
// PhraseSpec
// =============================================================================

/// One node of a phrase specification.
///
/// `E` is the element type of the realisation engine, so that previously
/// built sub-phrases can be reused as leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum PhraseSpec<E> {
    /// A raw word naming a head or argument.
    Word(String),
    /// An already-expanded element.
    Handle(E),
    /// An embedded clause.
    Clause(ClauseSpec<E>),
    /// A noun phrase.
    NounPhrase(NounPhraseSpec<E>),
    /// A verb phrase.
    VerbPhrase(VerbPhraseSpec<E>),
    /// A preposition phrase.
    PrepositionPhrase(Box<PrepositionPhraseSpec<E>>),
    /// A coordinated phrase.
    CoordinatedPhrase(CoordinatedPhraseSpec<E>),
}

impl<E> PhraseSpec<E> {
    /// Creates a word leaf.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self::Word(word.into())
    }

    /// The node kind, or `None` for a lexical leaf.
    #[must_use]
    pub const fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::Word(_) | Self::Handle(_) => None,
            Self::Clause(_) => Some(NodeKind::Clause),
            Self::NounPhrase(_) => Some(NodeKind::NounPhrase),
            Self::VerbPhrase(_) => Some(NodeKind::VerbPhrase),
            Self::PrepositionPhrase(_) => Some(NodeKind::PrepositionPhrase),
            Self::CoordinatedPhrase(_) => Some(NodeKind::CoordinatedPhrase),
        }
    }

    /// Returns true for words and handles.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.kind().is_none()
    }

    /// Number of composite nodes on the deepest path through this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Word(_) | Self::Handle(_) => 0,
            Self::Clause(spec) => spec.depth(),
            Self::NounPhrase(spec) => 1 + spec.head.depth().max(slots_depth(&spec.slots)),
            Self::VerbPhrase(spec) => 1 + spec.head.depth().max(slots_depth(&spec.slots)),
            Self::PrepositionPhrase(spec) => {
                1 + spec.noun.depth().max(many_depth(&spec.preposition))
            }
            Self::CoordinatedPhrase(spec) => {
                1 + spec.coordinates.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

impl<E> From<&str> for PhraseSpec<E> {
    fn from(word: &str) -> Self {
        Self::Word(word.to_string())
    }
}

impl<E> From<String> for PhraseSpec<E> {
    fn from(word: String) -> Self {
        Self::Word(word)
    }
}

impl<E> From<Constituent<E>> for PhraseSpec<E> {
    fn from(constituent: Constituent<E>) -> Self {
        match constituent {
            Constituent::Word(word) => Self::Word(word),
            Constituent::Phrase(element) => Self::Handle(element),
        }
    }
}

impl<E> From<ClauseSpec<E>> for PhraseSpec<E> {
    fn from(spec: ClauseSpec<E>) -> Self {
        Self::Clause(spec)
    }
}

impl<E> From<NounPhraseSpec<E>> for PhraseSpec<E> {
    fn from(spec: NounPhraseSpec<E>) -> Self {
        Self::NounPhrase(spec)
    }
}

impl<E> From<VerbPhraseSpec<E>> for PhraseSpec<E> {
    fn from(spec: VerbPhraseSpec<E>) -> Self {
        Self::VerbPhrase(spec)
    }
}

impl<E> From<PrepositionPhraseSpec<E>> for PhraseSpec<E> {
    fn from(spec: PrepositionPhraseSpec<E>) -> Self {
        Self::PrepositionPhrase(Box::new(spec))
    }
}

impl<E> From<CoordinatedPhraseSpec<E>> for PhraseSpec<E> {
    fn from(spec: CoordinatedPhraseSpec<E>) -> Self {
        Self::CoordinatedPhrase(spec)
    }
}

fn many_depth<E>(value: &OneOrMany<PhraseSpec<E>>) -> usize {
    value.iter().map(PhraseSpec::depth).max().unwrap_or(0)
}

fn slots_depth<E>(slots: &[Slot<E>]) -> usize {
    slots.iter().map(Slot::depth).max().unwrap_or(0)
}

// =============================================================================
// Slots and features
// =============================================================================

/// A role attached to a composite node, with its value.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<E> {
    /// A role whose value is one or more phrase specifications.
    Phrases {
        /// The role.
        role: Role,
        /// The value, normalized.
        value: OneOrMany<PhraseSpec<E>>,
    },
    /// The `features` role.
    Features(FeatureSpec),
}

impl<E> Slot<E> {
    /// The role this slot fills.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Phrases { role, .. } => *role,
            Self::Features(_) => Role::Features,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Phrases { value, .. } => many_depth(value),
            Self::Features(_) => 0,
        }
    }
}

/// Inserts a slot at its position in `order`, replacing any slot with the same role.
fn insert_slot<E>(slots: &mut Vec<Slot<E>>, order: &[Role], slot: Slot<E>) {
    let rank = |role: Role| {
        order
            .iter()
            .position(|r| *r == role)
            .unwrap_or(order.len())
    };
    let role = slot.role();
    if let Some(existing) = slots.iter_mut().find(|s| s.role() == role) {
        *existing = slot;
        return;
    }
    let at = slots
        .iter()
        .position(|s| rank(s.role()) > rank(role))
        .unwrap_or(slots.len());
    slots.insert(at, slot);
}

/// An ordered list of resolved feature assignments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSpec {
    entries: Vec<(Feature, FeatureValue)>,
}

impl FeatureSpec {
    /// Creates an empty feature list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already resolved feature.
    #[must_use]
    pub fn with(mut self, feature: Feature, value: FeatureValue) -> Self {
        self.entries.push((feature, value));
        self
    }

    /// Resolves a feature by name and raw value, then appends it.
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedFeature` or `UnrecognizedFeatureValue` if the
    /// feature table rejects the pair.
    pub fn parse(mut self, name: &str, raw: &str) -> Result<Self> {
        self.entries.push(resolve_feature(name, raw)?);
        Ok(self)
    }

    /// Appends an already resolved feature in place.
    pub fn push(&mut self, feature: Feature, value: FeatureValue) {
        self.entries.push((feature, value));
    }

    /// The assignments, in input order.
    #[must_use]
    pub fn entries(&self) -> &[(Feature, FeatureValue)] {
        &self.entries
    }

    /// Number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FeatureSpec {
    type Item = (Feature, FeatureValue);
    type IntoIter = std::vec::IntoIter<(Feature, FeatureValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Composite nodes
// =============================================================================

macro_rules! phrase_slot {
    ($(#[$doc:meta])* $name:ident => $role:expr, $order:expr) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(mut self, value: impl Into<OneOrMany<PhraseSpec<E>>>) -> Self {
            insert_slot(
                &mut self.slots,
                &$order,
                Slot::Phrases {
                    role: $role,
                    value: value.into(),
                },
            );
            self
        }
    };
}

macro_rules! features_and_slots {
    ($order:expr) => {
        /// Sets the features of this node.
        #[must_use]
        pub fn features(mut self, features: FeatureSpec) -> Self {
            insert_slot(&mut self.slots, &$order, Slot::Features(features));
            self
        }

        /// The slots of this node, in application order.
        #[must_use]
        pub fn slots(&self) -> &[Slot<E>] {
            &self.slots
        }
    };
}

/// A sentence: the body of the top-level `sentence` or of a `clause` node's `spec`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseSpec<E> {
    pub(crate) slots: Vec<Slot<E>>,
}

impl<E> Default for ClauseSpec<E> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<E> ClauseSpec<E> {
    /// Creates an empty clause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no role is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of composite nodes on the deepest path, counting this clause.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + slots_depth(&self.slots)
    }

    phrase_slot!(/// Sets the subject.
        subject => Role::Subject, Role::CLAUSE);
    phrase_slot!(/// Sets the direct object.
        object => Role::Object, Role::CLAUSE);
    phrase_slot!(/// Sets the indirect object.
        indirect_object => Role::IndirectObject, Role::CLAUSE);
    phrase_slot!(/// Sets the verb.
        verb => Role::Verb, Role::CLAUSE);
    phrase_slot!(/// Sets the complements.
        complements => Role::Complements, Role::CLAUSE);
    phrase_slot!(/// Sets the modifiers.
        modifiers => Role::Modifiers, Role::CLAUSE);
    features_and_slots!(Role::CLAUSE);
}

/// A noun phrase with a mandatory head.
#[derive(Clone, Debug, PartialEq)]
pub struct NounPhraseSpec<E> {
    /// The head noun.
    pub head: Box<PhraseSpec<E>>,
    pub(crate) slots: Vec<Slot<E>>,
}

impl<E> NounPhraseSpec<E> {
    /// Creates a noun phrase with the given head.
    #[must_use]
    pub fn new(head: impl Into<PhraseSpec<E>>) -> Self {
        Self {
            head: Box::new(head.into()),
            slots: Vec::new(),
        }
    }

    phrase_slot!(/// Sets the determiner.
        determiner => Role::Determiner, Role::NOUN_PHRASE);
    phrase_slot!(/// Sets the modifiers.
        modifiers => Role::Modifiers, Role::NOUN_PHRASE);
    phrase_slot!(/// Sets the pre-modifiers.
        pre_modifiers => Role::PreModifiers, Role::NOUN_PHRASE);
    phrase_slot!(/// Sets the post-modifiers.
        post_modifiers => Role::PostModifiers, Role::NOUN_PHRASE);
    phrase_slot!(/// Sets the complements.
        complements => Role::Complements, Role::NOUN_PHRASE);
    features_and_slots!(Role::NOUN_PHRASE);
}

/// A verb phrase with a mandatory head.
#[derive(Clone, Debug, PartialEq)]
pub struct VerbPhraseSpec<E> {
    /// The head verb.
    pub head: Box<PhraseSpec<E>>,
    pub(crate) slots: Vec<Slot<E>>,
}

impl<E> VerbPhraseSpec<E> {
    /// Creates a verb phrase with the given head.
    #[must_use]
    pub fn new(head: impl Into<PhraseSpec<E>>) -> Self {
        Self {
            head: Box::new(head.into()),
            slots: Vec::new(),
        }
    }

    phrase_slot!(/// Sets the modifiers.
        modifiers => Role::Modifiers, Role::VERB_PHRASE);
    phrase_slot!(/// Sets the pre-modifiers.
        pre_modifiers => Role::PreModifiers, Role::VERB_PHRASE);
    phrase_slot!(/// Sets the post-modifiers.
        post_modifiers => Role::PostModifiers, Role::VERB_PHRASE);
    features_and_slots!(Role::VERB_PHRASE);
}

/// A preposition phrase: a preposition governing a noun.
#[derive(Clone, Debug, PartialEq)]
pub struct PrepositionPhraseSpec<E> {
    /// The governed noun, attached as a complement.
    pub noun: Box<PhraseSpec<E>>,
    /// The preposition, applied through the slot table.
    pub preposition: OneOrMany<PhraseSpec<E>>,
}

impl<E> PrepositionPhraseSpec<E> {
    /// Creates a preposition phrase.
    #[must_use]
    pub fn new(
        preposition: impl Into<OneOrMany<PhraseSpec<E>>>,
        noun: impl Into<PhraseSpec<E>>,
    ) -> Self {
        Self {
            noun: Box::new(noun.into()),
            preposition: preposition.into(),
        }
    }
}

/// A coordination of phrases.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatedPhraseSpec<E> {
    /// The coordinates, in order. Must not be empty.
    pub coordinates: Vec<PhraseSpec<E>>,
    /// The conjunction, set verbatim.
    pub conjunction: Option<String>,
}

impl<E> CoordinatedPhraseSpec<E> {
    /// Creates a coordination without an explicit conjunction.
    #[must_use]
    pub fn new(coordinates: Vec<PhraseSpec<E>>) -> Self {
        Self {
            coordinates,
            conjunction: None,
        }
    }

    /// Sets the conjunction.
    #[must_use]
    pub fn conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = Some(conjunction.into());
        self
    }
}
