//! Integration tests for the grammar vocabulary
//!
//! Tests node kind tags, role keys, and capability names.

use phrasal_foundation::{Capability, NodeKind, Role};

#[test]
fn node_kind_tags_round_trip() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(NodeKind::from_tag("banana"), None);
    assert_eq!(NodeKind::from_tag("Clause"), None);
}

#[test]
fn role_keys_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::from_key(role.key()), Some(role));
    }
    assert_eq!(Role::from_key("pre_modifiers"), None);
    assert_eq!(Role::PreModifiers.key(), "pre-modifiers");
}

#[test]
fn clause_roles_in_application_order() {
    let keys: Vec<&str> = Role::CLAUSE.iter().map(|role| role.key()).collect();
    assert_eq!(
        keys,
        vec![
            "subject",
            "object",
            "indirect_object",
            "verb",
            "complements",
            "modifiers",
            "features"
        ]
    );
}

#[test]
fn noun_phrase_keys_include_head() {
    assert!(NodeKind::NounPhrase.keys().contains(&"head"));
    assert!(NodeKind::PrepositionPhrase.keys().contains(&"noun"));
    assert!(NodeKind::CoordinatedPhrase.keys().contains(&"conjunction"));
}

#[test]
fn capability_names() {
    assert_eq!(Capability::SetSubject.name(), "setSubject");
    assert_eq!(Capability::AddPostModifier.name(), "addPostModifier");
    assert_eq!(format!("{}", Capability::SetFeature), "setFeature");
}

#[test]
fn additive_capabilities() {
    assert!(Capability::AddCoordinate.is_additive());
    assert!(Capability::AddModifier.is_additive());
    assert!(!Capability::SetVerb.is_additive());
    assert!(!Capability::SetFeature.is_additive());
}
