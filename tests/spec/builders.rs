//! Integration tests for typed phrase specifications
//!
//! Builds specifications in code rather than JSON, including reuse of
//! previously built elements as leaves.

use phrasal_foundation::{Capability, ErrorKind, Feature, FeatureValue, NodeKind, Tense};
use phrasal_realiser::{
    Argument, Constituent, EnglishRealiser, PhraseTree, RealisationEngine, TreeFactory,
};
use phrasal_spec::{
    ClauseSpec, CoordinatedPhraseSpec, ExpansionConfig, FeatureSpec, NounPhraseSpec, PhraseSpec,
    PrepositionPhraseSpec, VerbPhraseSpec, build_clause, expand,
};

type Spec = PhraseSpec<PhraseTree>;

fn sentence(spec: ClauseSpec<PhraseTree>) -> String {
    let clause = build_clause(&EnglishRealiser, spec, &ExpansionConfig::default()).unwrap();
    EnglishRealiser.realise_sentence(&clause)
}

#[test]
fn typed_clause_realises() {
    let spec = ClauseSpec::new()
        .subject(NounPhraseSpec::new("dog").determiner("the"))
        .verb("chase")
        .object(NounPhraseSpec::new("cat").determiner("a"))
        .features(FeatureSpec::new().with(Feature::Tense, FeatureValue::Tense(Tense::Past)));
    assert_eq!(sentence(spec), "The dog chased a cat.");
}

#[test]
fn preposition_phrase_as_modifier() {
    let garden = NounPhraseSpec::new("garden").determiner("the");
    let spec = ClauseSpec::new()
        .subject("we")
        .verb(VerbPhraseSpec::new("play").modifiers(PrepositionPhraseSpec::new("in", garden)));
    assert_eq!(sentence(spec), "We play in the garden.");
}

#[test]
fn preposition_phrase_governs_a_preposition_phrase() {
    let inner = PrepositionPhraseSpec::new("of", NounPhraseSpec::new("night").determiner("the"));
    let outer: Spec = PrepositionPhraseSpec::new("in", inner).into();
    assert_eq!(outer.depth(), 3);

    let Constituent::Phrase(tree) = expand(&TreeFactory, outer, &ExpansionConfig::default()).unwrap()
    else {
        panic!("expected a phrase");
    };
    assert_eq!(tree.kind(), NodeKind::PrepositionPhrase);
    assert_eq!(tree.words(Capability::SetPreposition), vec!["in"]);

    let inner = tree
        .last(Capability::AddComplement)
        .and_then(Argument::as_phrase)
        .unwrap();
    assert_eq!(inner.kind(), NodeKind::PrepositionPhrase);
    assert_eq!(inner.words(Capability::SetPreposition), vec!["of"]);
}

#[test]
fn coordination_with_custom_conjunction() {
    let coordinates: Vec<Spec> = vec!["tea".into(), "coffee".into()];
    let spec = ClauseSpec::new()
        .subject("I")
        .verb("want")
        .object(CoordinatedPhraseSpec::new(coordinates).conjunction("or"));
    assert_eq!(sentence(spec), "I want tea or coffee.");
}

#[test]
fn feature_spec_parses_raw_values() {
    let features = FeatureSpec::new()
        .parse("number", "plural")
        .and_then(|f| f.parse("cue_phrase", "meanwhile"))
        .unwrap();
    assert_eq!(features.len(), 2);
    assert!(FeatureSpec::new().parse("number", "dual").is_err());
}

#[test]
fn handles_are_reused_verbatim() {
    let config = ExpansionConfig::default();
    let np: Spec = NounPhraseSpec::new("dog").determiner("the").into();
    let Constituent::Phrase(built) = expand(&TreeFactory, np, &config).unwrap() else {
        panic!("expected a phrase");
    };

    let spec = ClauseSpec::new()
        .subject(PhraseSpec::Handle(built.clone()))
        .verb("bark");
    let clause = build_clause(&TreeFactory, spec, &config).unwrap();
    assert_eq!(
        clause
            .last(Capability::SetSubject)
            .and_then(|argument| argument.as_phrase()),
        Some(&built)
    );
}

#[test]
fn expanding_an_expansion_is_identity() {
    let config = ExpansionConfig::default();
    let first = expand(&TreeFactory, Spec::word("dog"), &config).unwrap();
    let again = expand(&TreeFactory, PhraseSpec::from(first.clone()), &config).unwrap();
    assert_eq!(first, again);

    let np: Spec = NounPhraseSpec::new("cat").into();
    let first = expand(&TreeFactory, np, &config).unwrap();
    let again = expand(&TreeFactory, PhraseSpec::from(first.clone()), &config).unwrap();
    assert_eq!(first, again);
}

#[test]
fn empty_coordination_is_rejected() {
    let spec: Spec = CoordinatedPhraseSpec::new(Vec::new()).into();
    let err = expand(&TreeFactory, spec, &ExpansionConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyRequiredField { .. }));
}

#[test]
fn depth_counts_composite_nodes() {
    let inner = ClauseSpec::<PhraseTree>::new().subject(NounPhraseSpec::new("it"));
    let outer = ClauseSpec::new().object(inner);
    assert_eq!(outer.depth(), 3);

    let config = ExpansionConfig::new().with_max_depth(2);
    let err = build_clause(&TreeFactory, outer, &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NestingTooDeep { limit: 2 }));
}
