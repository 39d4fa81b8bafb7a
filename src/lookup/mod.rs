//! Lookup Module
//!
//! Read-side view over a produced spell document.
//!
//! ## Responsibilities
//! - Spells by id and by class bucket
//! - Spell groups and the best (highest id) spell of each group
//! - Attribute lookups that follow spa 470 group redirects
//! - Display strings from the string table
//! - Buff durations by caster level

mod duration;

pub use duration::{duration_ticks, formula_ticks};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::classifier::ParsedDatabase;
use crate::error::Result;
use crate::output::read_database;
use crate::record::SpellRecord;
use crate::strings::{SpellStrings, StringTable};

/// Spa whose base2 names a spell group to continue the search in
pub const SPA_GROUP_REDIRECT: i32 = 470;

/// Redirect chains longer than this are treated as not found
const MAX_REDIRECTS: usize = 8;

/// Queryable spell database
pub struct SpellDatabase {
    database: ParsedDatabase,
    strings: StringTable,
    groups: BTreeMap<i32, BTreeSet<u32>>,
    best_in_group: BTreeMap<i32, u32>,
}

impl SpellDatabase {
    pub fn new(database: ParsedDatabase, strings: StringTable) -> Self {
        let mut groups: BTreeMap<i32, BTreeSet<u32>> = BTreeMap::new();
        let mut best_in_group: BTreeMap<i32, u32> = BTreeMap::new();

        for spell in database.spells.values().filter(|s| s.group > 0) {
            groups.entry(spell.group).or_default().insert(spell.id);
            let best = best_in_group.entry(spell.group).or_insert(spell.id);
            *best = (*best).max(spell.id);
        }

        Self {
            database,
            strings,
            groups,
            best_in_group,
        }
    }

    /// Open a document and, when given, a string table
    pub fn open(path: &Path, strings_path: Option<&Path>) -> Result<Self> {
        let database = read_database(path)?;
        let strings = match strings_path {
            Some(strings_path) => StringTable::load(strings_path)?,
            None => StringTable::default(),
        };
        tracing::debug!(
            "Opened {} with {} spells and {} strings",
            path.display(),
            database.spells.len(),
            strings.len()
        );
        Ok(Self::new(database, strings))
    }

    pub fn database(&self) -> &ParsedDatabase {
        &self.database
    }

    pub fn spell(&self, id: u32) -> Option<&SpellRecord> {
        self.database.spell(id)
    }

    /// Spells listed under a class bucket, in index order
    pub fn spells_for_class(&self, class_key: u32) -> impl Iterator<Item = &SpellRecord> {
        self.database
            .class_ids(class_key)
            .iter()
            .filter_map(|id| self.database.spell(*id))
    }

    // =========================================================================
    // Groups
    // =========================================================================

    pub fn group(&self, group: i32) -> Option<&BTreeSet<u32>> {
        self.groups.get(&group)
    }

    /// Highest spell id in `group`
    pub fn best_in_group(&self, group: i32) -> Option<&SpellRecord> {
        self.best_in_group
            .get(&group)
            .and_then(|id| self.database.spell(*id))
    }

    pub fn is_spell_in_group(&self, spell: u32, group: i32) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|ids| ids.contains(&spell))
    }

    // =========================================================================
    // Attribute Lookups
    // =========================================================================

    /// base1 of the first slot of `spell` with `spa`
    ///
    /// Reaching a spa 470 slot first continues the search in the best
    /// spell of the group named by its base2.
    pub fn find_spa_value(&self, spell: &SpellRecord, spa: i32) -> Option<i32> {
        self.find_spa_value_within(spell, spa, 0)
    }

    fn find_spa_value_within(&self, spell: &SpellRecord, spa: i32, depth: usize) -> Option<i32> {
        for effect in spell.effects() {
            if effect.spa == spa {
                return Some(effect.base1);
            }
            if effect.spa == SPA_GROUP_REDIRECT {
                if depth >= MAX_REDIRECTS {
                    tracing::warn!("Spell {}: group redirect chain too long", spell.id);
                    return None;
                }
                return self
                    .best_in_group(effect.base2)
                    .and_then(|best| self.find_spa_value_within(best, spa, depth + 1));
            }
        }
        None
    }

    /// `spell` has `spa` with base1 ≥ `value`
    pub fn has_spa_at_least(&self, spell: &SpellRecord, spa: i32, value: i32) -> bool {
        self.find_spa_value(spell, spa).is_some_and(|found| found >= value)
    }

    /// `spell` has `spa` with base1 ≤ `value`
    pub fn has_spa_at_most(&self, spell: &SpellRecord, spa: i32, value: i32) -> bool {
        self.find_spa_value(spell, spa).is_some_and(|found| found <= value)
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// "Lands on you" / "lands on other" strings of a spell
    pub fn landed_text(&self, id: u32) -> Option<&SpellStrings> {
        self.strings.get(&id.to_string())
    }

    /// Duration in ticks of spell `id` cast at `player_level`
    pub fn duration_ticks(&self, id: u32, player_level: i32) -> Option<i32> {
        self.spell(id).map(|spell| duration_ticks(spell, player_level))
    }
}
