//! Filter and inclusion policy
//!
//! Decides, from derived flags, whether and where a record is kept.

use std::fmt;

use crate::classes::ClassUsage;
use crate::config::FilterPolicy;
use crate::effect::SlotEntry;

/// Why a line was skipped
///
/// Rejections are a normal outcome, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// Name of three characters or fewer
    ShortName,

    /// Name contains a denylisted fragment
    Ignored,

    /// Concrete level below the configured minimum
    LevelBelowMinimum,

    /// Neither deals damage nor focuses other spells
    NotDamageOrFocus,

    /// Concrete level but no index bucket covered by the class mask
    NoUsableClass,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::ShortName => "short_name",
            Rejection::Ignored => "ignored",
            Rejection::LevelBelowMinimum => "level_below_minimum",
            Rejection::NotDamageOrFocus => "not_damage_or_focus",
            Rejection::NoUsableClass => "no_usable_class",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic flags derived from a slot list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectFlags {
    /// Some slot has a damage spa with a negative base1
    pub does_damage: bool,

    /// Some slot has a focus spa
    pub spell_focus: bool,
}

impl EffectFlags {
    pub fn of(slots: &[SlotEntry], policy: &FilterPolicy) -> Self {
        let mut flags = Self::default();
        for effect in slots.iter().filter_map(SlotEntry::effect) {
            if policy.is_damage_spa(effect.spa) && effect.base1 < 0 {
                flags.does_damage = true;
            }
            if policy.is_focus_spa(effect.spa) {
                flags.spell_focus = true;
            }
        }
        flags
    }

    pub fn qualifies(&self) -> bool {
        self.does_damage || self.spell_focus
    }
}

/// Where an accepted record goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inclusion {
    /// Stored and listed under each of these index buckets
    Indexed(Vec<u32>),

    /// Stored without any index bucket
    Global,

    Rejected(Rejection),
}

/// Length and denylist checks on a spell name
pub fn check_name(name: &str, policy: &FilterPolicy) -> Option<Rejection> {
    if name.chars().count() <= 3 {
        return Some(Rejection::ShortName);
    }
    if policy.is_ignored(name) {
        return Some(Rejection::Ignored);
    }
    None
}

/// Reject concrete levels below `min_level` (any non-global level)
pub fn check_level(usage: &ClassUsage, policy: &FilterPolicy) -> Option<Rejection> {
    if !usage.is_global() && usage.level < policy.min_level {
        return Some(Rejection::LevelBelowMinimum);
    }
    None
}

/// Final placement of a fully decoded record
pub fn inclusion(flags: EffectFlags, usage: &ClassUsage, policy: &FilterPolicy) -> Inclusion {
    if !flags.qualifies() {
        return Inclusion::Rejected(Rejection::NotDamageOrFocus);
    }

    if usage.is_global() {
        return Inclusion::Global;
    }

    let buckets: Vec<u32> = policy
        .classes
        .iter()
        .copied()
        .filter(|&class_value| usage.covers(class_value))
        .collect();

    if buckets.is_empty() {
        Inclusion::Rejected(Rejection::NoUsableClass)
    } else {
        Inclusion::Indexed(buckets)
    }
}
