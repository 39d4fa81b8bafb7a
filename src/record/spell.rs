//! Spell record definition

use serde::{Deserialize, Serialize};

use crate::classes::ClassUsage;
use crate::effect::SlotEntry;
use crate::error::Result;

use super::fields::{field, RawLine, MIN_FIELDS};

/// An accepted, classified spell
///
/// Timing and cost attributes are passed through in the units of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    pub id: u32,
    pub name: String,

    /// Level of the highest-indexed usable class column, 0 when none
    pub level: i32,

    /// Usable classes, aligned to the `CLASSES` bucket keys
    pub class_mask: u32,

    pub cast_time: i32,
    pub lockout_time: i32,
    pub recast_time: i32,
    pub duration1: i32,
    pub duration2: i32,
    pub mana_cost: i32,
    pub beneficial: i32,
    pub resist: i32,
    pub target: i32,
    pub skill: i32,
    pub max_hits_type: i32,
    pub max_hits: i32,

    /// This spell may itself be modified by focus effects
    pub focusable: bool,

    pub group: i32,
    pub fixed_crit_chance: i32,

    /// Effect slots in source order, placeholders included
    pub slot_list: Vec<SlotEntry>,
}

impl SpellRecord {
    /// Decode the remaining fixed-position attributes of `raw`
    ///
    /// `id`, `name` and the class usage have already been decoded by the
    /// classifier; this is where the full field count is enforced.
    pub fn decode(
        raw: &RawLine<'_>,
        id: u32,
        name: &str,
        usage: ClassUsage,
        slot_list: Vec<SlotEntry>,
    ) -> Result<Self> {
        raw.require(MIN_FIELDS)?;

        Ok(Self {
            id,
            name: name.to_string(),
            level: usage.level,
            class_mask: usage.mask,
            cast_time: raw.number(field::CAST_TIME)?,
            lockout_time: raw.number(field::LOCKOUT_TIME)?,
            recast_time: raw.number(field::RECAST_TIME)?,
            duration1: raw.number(field::DURATION1)?,
            duration2: raw.number(field::DURATION2)?,
            mana_cost: raw.number(field::MANA_COST)?,
            beneficial: raw.number(field::BENEFICIAL)?,
            resist: raw.number(field::RESIST)?,
            target: raw.number(field::TARGET)?,
            skill: raw.number(field::SKILL)?,
            max_hits_type: raw.number(field::MAX_HITS_TYPE)?,
            max_hits: raw.number(field::MAX_HITS)?,
            focusable: raw.number::<i32>(field::NOT_FOCUSABLE)? != 1,
            group: raw.number(field::GROUP)?,
            fixed_crit_chance: raw.number(field::FIXED_CRIT_CHANCE)?,
            slot_list,
        })
    }

    /// Effects in slot order, skipping placeholders
    pub fn effects(&self) -> impl Iterator<Item = &crate::effect::Effect> {
        self.slot_list.iter().filter_map(SlotEntry::effect)
    }
}
