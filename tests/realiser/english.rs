//! Integration tests for the English realiser
//!
//! Builds phrase trees by hand and checks the realised text.

use phrasal_foundation::{Feature, FeatureValue, Number, Tense};
use phrasal_realiser::{
    Constituent, EnglishRealiser, PhraseElement, PhraseFactory, PhraseTree, RealisationEngine,
    TreeFactory,
};

fn noun(head: &str, determiner: Option<&str>) -> PhraseTree {
    let mut np = TreeFactory.create_noun_phrase();
    np.set_noun(head.into());
    if let Some(determiner) = determiner {
        np.set_determiner(determiner.into());
    }
    np
}

fn plural(mut np: PhraseTree) -> PhraseTree {
    np.set_feature(Feature::Number, FeatureValue::Number(Number::Plural));
    np
}

fn clause(subject: Constituent<PhraseTree>, verb: &str) -> PhraseTree {
    let mut clause = TreeFactory.create_clause();
    clause.set_subject(subject);
    clause.set_verb(verb.into());
    clause
}

fn realise(tree: &PhraseTree) -> String {
    EnglishRealiser.realise(tree)
}

// =============================================================================
// Tense, Aspect, and Voice
// =============================================================================

#[test]
fn present_perfect_with_plural_subject() {
    let mut c = clause(
        Constituent::Phrase(plural(noun("child", Some("the")))),
        "eat",
    );
    c.set_object("the cake".into());
    c.set_feature(Feature::Perfect, FeatureValue::Flag(true));
    assert_eq!(
        EnglishRealiser.realise_sentence(&c),
        "The children have eaten the cake."
    );
}

#[test]
fn past_of_be_agrees() {
    let mut c = clause("they".into(), "be");
    c.add_complement("happy".into());
    c.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Past));
    assert_eq!(realise(&c), "they were happy");

    let mut c = clause("I".into(), "be");
    c.add_complement("happy".into());
    c.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Past));
    assert_eq!(realise(&c), "I was happy");
}

#[test]
fn future_passive_moves_the_agent() {
    let mut c = clause("the committee".into(), "approve");
    c.set_object("the plan".into());
    c.set_feature(Feature::Passive, FeatureValue::Flag(true));
    c.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Future));
    assert_eq!(realise(&c), "the plan will be approved by the committee");
}

#[test]
fn verb_phrase_features_override_the_clause() {
    let mut vp = TreeFactory.create_verb_phrase();
    vp.set_verb("walk".into());
    vp.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Past));
    vp.add_modifier("quickly".into());

    let mut c = TreeFactory.create_clause();
    c.set_subject("she".into());
    c.set_verb(Constituent::Phrase(vp));
    c.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Future));
    assert_eq!(realise(&c), "she walked quickly");
}

#[test]
fn phrasal_verbs_inflect_their_first_word() {
    let mut c = clause("he".into(), "pick up");
    c.set_object("the box".into());
    c.set_feature(Feature::Tense, FeatureValue::Tense(Tense::Past));
    assert_eq!(realise(&c), "he picked up the box");
}

#[test]
fn third_person_sibilant() {
    let c = clause(Constituent::Phrase(noun("fox", Some("the"))), "watch");
    assert_eq!(realise(&c), "the fox watches");
}

// =============================================================================
// Word Order
// =============================================================================

#[test]
fn indirect_object_precedes_object() {
    let mut c = clause("I".into(), "give");
    c.set_indirect_object("him".into());
    c.set_object(Constituent::Phrase(noun("book", Some("a"))));
    assert_eq!(realise(&c), "I give him a book");
}

#[test]
fn custom_complementiser() {
    let mut inner = clause("it".into(), "rain");
    inner.set_feature(Feature::Complementiser, FeatureValue::Text("whether".into()));
    let mut outer = clause("I".into(), "wonder");
    outer.set_object(Constituent::Phrase(inner));
    assert_eq!(
        EnglishRealiser.realise_sentence(&outer),
        "I wonder whether it rains."
    );
}

#[test]
fn existing_punctuation_is_kept() {
    let mut c = clause("it".into(), "be");
    c.add_complement("really?".into());
    assert_eq!(EnglishRealiser.realise_sentence(&c), "It is really?");
}

// =============================================================================
// Noun Phrases and Coordination
// =============================================================================

#[test]
fn irregular_plural_without_determiner() {
    assert_eq!(realise(&plural(noun("mouse", None))), "mice");
}

#[test]
fn article_follows_the_first_modifier() {
    let mut np = noun("house", Some("a"));
    np.add_modifier("old".into());
    assert_eq!(realise(&np), "an old house");
}

#[test]
fn coordinated_subject_agreement() {
    let mut coord = TreeFactory.create_coordinated_phrase();
    coord.add_coordinate("the cat".into());
    coord.add_coordinate("the dog".into());
    let c = clause(Constituent::Phrase(coord.clone()), "sleep");
    assert_eq!(realise(&c), "the cat and the dog sleep");

    coord.set_feature(Feature::Conjunction, FeatureValue::Text("or".into()));
    let c = clause(Constituent::Phrase(coord), "sleep");
    assert_eq!(realise(&c), "the cat or the dog sleeps");
}

#[test]
fn single_coordinate_has_no_conjunction() {
    let mut coord = TreeFactory.create_coordinated_phrase();
    coord.add_coordinate("tea".into());
    assert_eq!(realise(&coord), "tea");
}
