//! Effect slot definitions

use serde::{Deserialize, Serialize};

/// One decoded effect slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Slot position as given by the dump
    pub num: i32,

    /// Spell-attribute code
    pub spa: i32,

    pub base1: i32,
    pub base2: i32,

    /// Scaling formula id
    pub calc: i32,

    /// Capped magnitude
    pub max: i32,
}

/// A slot in a spell's slot list
///
/// Placeholders serialize as `{}` so slot positions survive in the JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotEntry {
    Effect(Effect),
    Empty {},
}

impl SlotEntry {
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            SlotEntry::Effect(effect) => Some(effect),
            SlotEntry::Empty {} => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SlotEntry::Empty {})
    }
}

impl From<Effect> for SlotEntry {
    fn from(effect: Effect) -> Self {
        SlotEntry::Effect(effect)
    }
}
