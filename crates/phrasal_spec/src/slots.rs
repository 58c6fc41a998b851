//! The slot dispatch table.
//!
//! Maps each role to the capability that attaches it to a phrase element.
//! Cardinality is handled here: a scalar value invokes the capability once,
//! a sequence invokes it once per item in input order. The `features` role is
//! special-cased and applies each resolved assignment through `setFeature`.

use phrasal_foundation::{Capability, Error, ErrorKind, Result, Role};
use phrasal_realiser::{Constituent, PhraseElement};
use tracing::trace;

use crate::node::{PhraseSpec, Slot};

/// How a role is applied to its target element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Expand each item and invoke this capability with it.
    Capability(Capability),
    /// Apply each feature assignment through `setFeature`.
    Features,
}

/// One row of the slot dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotEntry {
    /// The role.
    pub role: Role,
    /// How the role is applied.
    pub dispatch: Dispatch,
}

/// The process-wide slot dispatch table, one row per role.
pub static SLOT_TABLE: [SlotEntry; 12] = [
    SlotEntry {
        role: Role::Subject,
        dispatch: Dispatch::Capability(Capability::SetSubject),
    },
    SlotEntry {
        role: Role::Object,
        dispatch: Dispatch::Capability(Capability::SetObject),
    },
    SlotEntry {
        role: Role::IndirectObject,
        dispatch: Dispatch::Capability(Capability::SetIndirectObject),
    },
    SlotEntry {
        role: Role::Verb,
        dispatch: Dispatch::Capability(Capability::SetVerb),
    },
    SlotEntry {
        role: Role::Preposition,
        dispatch: Dispatch::Capability(Capability::SetPreposition),
    },
    SlotEntry {
        role: Role::Determiner,
        dispatch: Dispatch::Capability(Capability::SetDeterminer),
    },
    SlotEntry {
        role: Role::Complements,
        dispatch: Dispatch::Capability(Capability::AddComplement),
    },
    SlotEntry {
        role: Role::Modifiers,
        dispatch: Dispatch::Capability(Capability::AddModifier),
    },
    SlotEntry {
        role: Role::PreModifiers,
        dispatch: Dispatch::Capability(Capability::AddPreModifier),
    },
    SlotEntry {
        role: Role::PostModifiers,
        dispatch: Dispatch::Capability(Capability::AddPostModifier),
    },
    SlotEntry {
        role: Role::Coordinates,
        dispatch: Dispatch::Capability(Capability::AddCoordinate),
    },
    SlotEntry {
        role: Role::Features,
        dispatch: Dispatch::Features,
    },
];

/// The table row for a role.
#[must_use]
pub fn slot_entry(role: Role) -> &'static SlotEntry {
    // Rows are declared in `Role` declaration order.
    &SLOT_TABLE[role as usize]
}

/// Looks up how a role is applied.
#[must_use]
pub fn dispatch(role: Role) -> Dispatch {
    slot_entry(role).dispatch
}

/// Applies one slot to a target element.
///
/// Each phrase item is passed through `expand` before its capability is
/// invoked, so nested specifications are fully built when they are attached.
///
/// # Errors
///
/// Propagates any error from `expand`, and returns an internal error if a
/// phrase-valued slot names the `features` role.
pub fn apply_slot<E, X>(target: &mut E, slot: Slot<E>, mut expand: X) -> Result<()>
where
    E: PhraseElement,
    X: FnMut(PhraseSpec<E>) -> Result<Constituent<E>>,
{
    match slot {
        Slot::Features(features) => {
            for (feature, value) in features {
                trace!(%feature, %value, "setFeature");
                target.set_feature(feature, value);
            }
            Ok(())
        }
        Slot::Phrases { role, value } => {
            let Dispatch::Capability(capability) = dispatch(role) else {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "role `{role}` takes a feature mapping"
                ))));
            };
            for item in value {
                let constituent = expand(item)?;
                trace!(%role, %capability, "applying slot");
                target.invoke(capability, constituent)?;
            }
            Ok(())
        }
    }
}
