//! A small reference realiser for English.
//!
//! Reads the invocations recorded on a [`PhraseTree`] and linearises them
//! into English word order, applying tense, aspect, voice, number agreement,
//! coordination, and sentence punctuation. It covers the common cases of the
//! phrase specification vocabulary; it is not a general grammar of English.

pub mod morphology;

use phrasal_foundation::{Capability, Feature, FeatureValue, NodeKind, Number, Tense};
use tracing::trace;

use crate::element::{PhraseFactory, RealisationEngine};
use crate::tree::{Argument, PhraseTree, TreeFactory};

/// Default conjunction of a coordinated phrase.
const DEFAULT_CONJUNCTION: &str = "and";

/// Default complementiser of a clause embedded in another clause.
const DEFAULT_COMPLEMENTISER: &str = "that";

/// Person and number of a clause subject, for verb agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Agreement {
    FirstSingular,
    ThirdSingular,
    Plural,
}

/// Where a clause appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Embedding {
    /// The root of the tree, or a clause standing alone.
    Root,
    /// An argument or complement of another clause.
    Complement,
}

/// The reference English realisation engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishRealiser;

impl EnglishRealiser {
    /// Creates a new realiser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn argument(self, argument: &Argument, embedding: Embedding) -> String {
        match argument {
            Argument::Word(word) => word.clone(),
            Argument::Phrase(tree) => self.phrase(tree, embedding),
            Argument::Feature { .. } => String::new(),
        }
    }

    fn phrase(self, tree: &PhraseTree, embedding: Embedding) -> String {
        trace!(kind = %tree.kind(), "realising element");
        match tree.kind() {
            NodeKind::Clause => self.clause(tree, embedding),
            NodeKind::NounPhrase => self.noun_phrase(tree),
            NodeKind::VerbPhrase => self.verb_phrase(tree),
            NodeKind::PrepositionPhrase => self.preposition_phrase(tree),
            NodeKind::CoordinatedPhrase => self.coordinated_phrase(tree, embedding),
        }
    }

    fn all(self, tree: &PhraseTree, capability: Capability, embedding: Embedding) -> Vec<String> {
        tree.arguments(capability)
            .map(|argument| self.argument(argument, embedding))
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn last(self, tree: &PhraseTree, capability: Capability, embedding: Embedding) -> Option<String> {
        tree.last(capability)
            .map(|argument| self.argument(argument, embedding))
            .filter(|text| !text.is_empty())
    }

    // -------------------------------------------------------------------------
    // Clauses
    // -------------------------------------------------------------------------

    fn clause(self, tree: &PhraseTree, embedding: Embedding) -> String {
        let passive = flag(tree, Feature::Passive);
        let (subject, object) = if passive {
            (tree.last(Capability::SetObject), None)
        } else {
            (tree.last(Capability::SetSubject), tree.last(Capability::SetObject))
        };
        let agent = if passive {
            tree.last(Capability::SetSubject)
        } else {
            None
        };

        let mut words = Vec::new();

        if embedding == Embedding::Complement {
            let complementiser = text(tree, Feature::Complementiser)
                .unwrap_or(DEFAULT_COMPLEMENTISER)
                .to_string();
            words.push(complementiser);
        }

        if let Some(cue) = text(tree, Feature::CuePhrase) {
            words.push(format!("{cue},"));
        }

        let agreement = match tree.feature(Feature::Number) {
            Some(FeatureValue::Number(Number::Plural)) => Agreement::Plural,
            _ => subject.map_or(Agreement::ThirdSingular, agreement_of),
        };
        if let Some(subject) = subject {
            words.push(self.argument(subject, Embedding::Complement));
        }

        words.extend(self.all(tree, Capability::AddPreModifier, Embedding::Complement));

        let mut trailing = Vec::new();
        if let Some(verb) = tree.last(Capability::SetVerb) {
            let group = self.verb_group(verb, tree, agreement);
            words.extend(group.before);
            words.push(group.verb);
            trailing = group.after;
        }

        words.extend(self.last(tree, Capability::SetIndirectObject, Embedding::Complement));
        if let Some(object) = object {
            words.push(self.argument(object, Embedding::Complement));
        }
        words.extend(self.all(tree, Capability::AddComplement, Embedding::Complement));
        if let Some(agent) = agent {
            words.push(format!("by {}", self.argument(agent, Embedding::Complement)));
        }
        words.extend(trailing);
        words.extend(self.all(tree, Capability::AddModifier, Embedding::Complement));
        words.extend(self.all(tree, Capability::AddPostModifier, Embedding::Complement));

        join(&words)
    }

    /// Realises the verb of a clause with the clause's tense, aspect, and voice.
    ///
    /// Features set on a verb phrase take precedence over those of the clause.
    fn verb_group(self, verb: &Argument, clause: &PhraseTree, agreement: Agreement) -> VerbGroup {
        let (head, phrase) = match verb {
            Argument::Phrase(vp) if vp.kind() == NodeKind::VerbPhrase => (
                vp.last(Capability::SetVerb)
                    .map(|head| self.argument(head, Embedding::Complement)),
                Some(vp),
            ),
            Argument::Word(word) => (Some(word.clone()), None),
            other => {
                return VerbGroup {
                    before: Vec::new(),
                    verb: self.argument(other, Embedding::Complement),
                    after: Vec::new(),
                };
            }
        };

        let feature = |f: Feature| {
            phrase
                .and_then(|vp| vp.feature(f))
                .or_else(|| clause.feature(f))
        };
        let tense = match feature(Feature::Tense) {
            Some(FeatureValue::Tense(tense)) => *tense,
            _ => Tense::Present,
        };
        let perfect = matches!(feature(Feature::Perfect), Some(FeatureValue::Flag(true)));
        let passive = matches!(feature(Feature::Passive), Some(FeatureValue::Flag(true)));

        let verb = head.map_or_else(String::new, |head| {
            conjugate(&head, tense, perfect, passive, agreement)
        });

        let (before, after) = phrase.map_or_else(Default::default, |vp| {
            let before = self.all(vp, Capability::AddPreModifier, Embedding::Complement);
            let mut after = self.all(vp, Capability::AddComplement, Embedding::Complement);
            after.extend(self.all(vp, Capability::AddModifier, Embedding::Complement));
            after.extend(self.all(vp, Capability::AddPostModifier, Embedding::Complement));
            (before, after)
        });

        VerbGroup { before, verb, after }
    }

    // -------------------------------------------------------------------------
    // Phrases
    // -------------------------------------------------------------------------

    fn noun_phrase(self, tree: &PhraseTree) -> String {
        let plural = matches!(
            tree.feature(Feature::Number),
            Some(FeatureValue::Number(Number::Plural))
        );

        let mut before = self.all(tree, Capability::AddPreModifier, Embedding::Complement);
        let mut after = Vec::new();
        // Single-word modifiers read as adjectives; phrasal ones follow the noun.
        for argument in tree.arguments(Capability::AddModifier) {
            let text = self.argument(argument, Embedding::Complement);
            match argument {
                Argument::Phrase(tree) if tree.kind() != NodeKind::NounPhrase => after.push(text),
                _ => before.push(text),
            }
        }

        let noun = self
            .last(tree, Capability::SetNoun, Embedding::Complement)
            .map(|noun| {
                if plural && tree.last(Capability::SetNoun).and_then(Argument::as_word).is_some() {
                    morphology::plural(&noun)
                } else {
                    noun
                }
            });
        before.extend(noun);

        after.extend(self.all(tree, Capability::AddPostModifier, Embedding::Complement));
        after.extend(self.all(tree, Capability::AddComplement, Embedding::Complement));

        let mut words = Vec::new();
        if let Some(determiner) = self.last(tree, Capability::SetDeterminer, Embedding::Complement) {
            let next = before.first().map_or("", String::as_str);
            if determiner.eq_ignore_ascii_case("a") || determiner.eq_ignore_ascii_case("an") {
                words.push(morphology::indefinite_article(next).to_string());
            } else {
                words.push(determiner);
            }
        }
        words.extend(before);
        words.extend(after);
        join(&words)
    }

    fn verb_phrase(self, tree: &PhraseTree) -> String {
        let head = self.last(tree, Capability::SetVerb, Embedding::Complement);
        let verb = match (head, tree.feature(Feature::Tense)) {
            (Some(head), Some(FeatureValue::Tense(tense))) => conjugate(
                &head,
                *tense,
                flag(tree, Feature::Perfect),
                flag(tree, Feature::Passive),
                Agreement::ThirdSingular,
            ),
            (Some(head), _) => head,
            (None, _) => String::new(),
        };

        let mut words = self.all(tree, Capability::AddPreModifier, Embedding::Complement);
        words.push(verb);
        words.extend(self.all(tree, Capability::AddComplement, Embedding::Complement));
        words.extend(self.all(tree, Capability::AddModifier, Embedding::Complement));
        words.extend(self.all(tree, Capability::AddPostModifier, Embedding::Complement));
        join(&words)
    }

    fn preposition_phrase(self, tree: &PhraseTree) -> String {
        let mut words: Vec<String> = self
            .last(tree, Capability::SetPreposition, Embedding::Complement)
            .into_iter()
            .collect();
        words.extend(self.all(tree, Capability::AddComplement, Embedding::Complement));
        join(&words)
    }

    fn coordinated_phrase(self, tree: &PhraseTree, embedding: Embedding) -> String {
        let items = self.all(tree, Capability::AddCoordinate, embedding);
        let conjunction = text(tree, Feature::Conjunction).unwrap_or(DEFAULT_CONJUNCTION);
        match items.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [init @ .., last] => {
                if conjunction.is_empty() {
                    format!("{}, {last}", init.join(", "))
                } else {
                    format!("{} {conjunction} {last}", init.join(", "))
                }
            }
        }
    }
}

impl PhraseFactory for EnglishRealiser {
    type Element = PhraseTree;

    fn create_clause(&self) -> PhraseTree {
        TreeFactory.create_clause()
    }

    fn create_noun_phrase(&self) -> PhraseTree {
        TreeFactory.create_noun_phrase()
    }

    fn create_verb_phrase(&self) -> PhraseTree {
        TreeFactory.create_verb_phrase()
    }

    fn create_preposition_phrase(&self) -> PhraseTree {
        TreeFactory.create_preposition_phrase()
    }

    fn create_coordinated_phrase(&self) -> PhraseTree {
        TreeFactory.create_coordinated_phrase()
    }
}

impl RealisationEngine for EnglishRealiser {
    fn realise(&self, root: &PhraseTree) -> String {
        self.phrase(root, Embedding::Root)
    }

    fn realise_sentence(&self, root: &PhraseTree) -> String {
        let text = self.realise(root);
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return text;
        };
        let mut sentence: String = first.to_uppercase().chain(chars).collect();
        if !sentence.ends_with(['.', '!', '?']) {
            sentence.push('.');
        }
        sentence
    }
}

/// The parts of a realised verb group, in clause order.
struct VerbGroup {
    /// Pre-modifiers of the verb phrase.
    before: Vec<String>,
    /// The inflected auxiliary chain and main verb.
    verb: String,
    /// Complements and modifiers of the verb phrase, placed after the objects.
    after: Vec<String>,
}

fn flag(tree: &PhraseTree, feature: Feature) -> bool {
    matches!(tree.feature(feature), Some(FeatureValue::Flag(true)))
}

fn text(tree: &PhraseTree, feature: Feature) -> Option<&str> {
    match tree.feature(feature) {
        Some(FeatureValue::Text(text)) => Some(text.as_str()),
        _ => None,
    }
}

fn join(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn agreement_of(subject: &Argument) -> Agreement {
    match subject {
        Argument::Word(word) => agreement_of_word(word),
        Argument::Phrase(tree) => match tree.kind() {
            NodeKind::NounPhrase => {
                if matches!(
                    tree.feature(Feature::Number),
                    Some(FeatureValue::Number(Number::Plural))
                ) {
                    Agreement::Plural
                } else {
                    tree.last(Capability::SetNoun)
                        .map_or(Agreement::ThirdSingular, agreement_of)
                }
            }
            NodeKind::CoordinatedPhrase => {
                let conjunction = text(tree, Feature::Conjunction).unwrap_or(DEFAULT_CONJUNCTION);
                if conjunction == "and" && tree.count(Capability::AddCoordinate) > 1 {
                    Agreement::Plural
                } else {
                    tree.last(Capability::AddCoordinate)
                        .map_or(Agreement::ThirdSingular, agreement_of)
                }
            }
            _ => Agreement::ThirdSingular,
        },
        Argument::Feature { .. } => Agreement::ThirdSingular,
    }
}

fn agreement_of_word(word: &str) -> Agreement {
    match word.to_ascii_lowercase().as_str() {
        "i" => Agreement::FirstSingular,
        "you" | "we" | "they" => Agreement::Plural,
        w if w.contains(" and ") => Agreement::Plural,
        _ => Agreement::ThirdSingular,
    }
}

/// Builds the auxiliary chain and main verb: `[will] [have] [be] verb`.
fn conjugate(head: &str, tense: Tense, perfect: bool, passive: bool, agreement: Agreement) -> String {
    let mut chain: Vec<String> = Vec::new();
    if perfect {
        chain.push("have".to_string());
    }
    if passive {
        chain.push("be".to_string());
    }
    chain.push(head.to_string());

    // Every verb after an auxiliary is a participle.
    for verb in chain.iter_mut().skip(1) {
        *verb = morphology::past_participle(verb);
    }

    let finite = &chain[0];
    chain[0] = match tense {
        Tense::Future => format!("will {finite}"),
        Tense::Present => present(finite, agreement),
        Tense::Past => past(finite, agreement),
    };
    chain.join(" ")
}

fn present(verb: &str, agreement: Agreement) -> String {
    match (verb, agreement) {
        ("be", Agreement::FirstSingular) => "am".to_string(),
        ("be", Agreement::Plural) => "are".to_string(),
        (_, Agreement::ThirdSingular) => morphology::third_singular(verb),
        _ => verb.to_string(),
    }
}

fn past(verb: &str, agreement: Agreement) -> String {
    match (verb, agreement) {
        ("be", Agreement::Plural) => "were".to_string(),
        _ => morphology::past(verb),
    }
}
