//! The accumulated output of a classification run

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::SpellRecord;

use super::{Decision, Rejection};

/// Accepted spells plus the per-class index
///
/// Both maps are ordered so the same input always serializes to the
/// same bytes. Index buckets keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDatabase {
    /// Class bucket key → spell ids usable by that class
    pub index: BTreeMap<u32, Vec<u32>>,

    /// Spell id → accepted record
    pub spells: BTreeMap<u32, SpellRecord>,
}

impl ParsedDatabase {
    /// Create a database with an empty bucket for every class key
    pub fn new(classes: &[u32]) -> Self {
        Self {
            index: classes.iter().map(|&class| (class, Vec::new())).collect(),
            spells: BTreeMap::new(),
        }
    }

    /// Merge one classification decision
    pub fn apply(&mut self, decision: Decision) {
        match decision {
            Decision::Indexed { record, buckets } => {
                for bucket in buckets {
                    self.index.entry(bucket).or_default().push(record.id);
                }
                self.spells.insert(record.id, record);
            }
            Decision::Global(record) => {
                self.spells.insert(record.id, record);
            }
            Decision::Rejected(_) => {}
        }
    }

    pub fn spell(&self, id: u32) -> Option<&SpellRecord> {
        self.spells.get(&id)
    }

    /// Ids listed under a class bucket, empty for unknown keys
    pub fn class_ids(&self, class: u32) -> &[u32] {
        self.index.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `id` appears in any index bucket
    pub fn is_indexed(&self, id: u32) -> bool {
        self.index.values().any(|ids| ids.contains(&id))
    }
}

/// Counters for one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Non-blank lines read
    pub lines: usize,

    /// Records stored with at least one index bucket
    pub indexed: usize,

    /// Records stored without an index bucket
    pub global: usize,

    pub rejected: BTreeMap<Rejection, usize>,
}

impl ExtractSummary {
    pub fn record(&mut self, decision: &Decision) {
        match decision {
            Decision::Indexed { .. } => self.indexed += 1,
            Decision::Global(_) => self.global += 1,
            Decision::Rejected(reason) => *self.rejected.entry(*reason).or_default() += 1,
        }
    }

    pub fn accepted(&self) -> usize {
        self.indexed + self.global
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn rejected_for(&self, reason: Rejection) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }
}
