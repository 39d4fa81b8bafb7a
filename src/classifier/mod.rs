//! Classifier Module
//!
//! Turns spell dump lines into classified records and accumulates the
//! output database.
//!
//! ## Per-Line Pipeline
//! ```text
//!   line ──► id, name ──► name filter ──► ignore filter
//!                                              │
//!        ┌─────────────────────────────────────┘
//!        ▼
//!   class levels ──► level filter ──► full decode + slot list
//!                                              │
//!        ┌─────────────────────────────────────┘
//!        ▼
//!   damage / focus flags ──► Indexed | Global | Rejected
//! ```
//!
//! Decode errors abort the whole run; rejections only skip the line.

mod database;
mod filter;

pub use database::{ExtractSummary, ParsedDatabase};
pub use filter::{check_level, check_name, inclusion, EffectFlags, Inclusion, Rejection};

use std::fs;
use std::path::Path;

use crate::classes::ClassLevels;
use crate::config::FilterPolicy;
use crate::effect::parse_slot_list;
use crate::error::{ExtractError, Result};
use crate::record::{field, RawLine, SpellRecord, MIN_FIELDS};

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Stored and listed under each bucket
    Indexed {
        record: SpellRecord,
        buckets: Vec<u32>,
    },

    /// Stored without a bucket (class-agnostic level)
    Global(SpellRecord),

    Rejected(Rejection),
}

/// Classifies spell dump lines under a fixed policy
pub struct Classifier {
    policy: FilterPolicy,
}

impl Classifier {
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Classify one line (`line` is 1-based, for error reporting)
    pub fn classify_line(&self, line: usize, text: &str) -> Result<Decision> {
        let raw = RawLine::split(line, text);

        let id: u32 = raw.number(field::ID)?;
        let name = raw.text(field::NAME)?;

        if let Some(reason) = check_name(name, &self.policy) {
            return Ok(Decision::Rejected(reason));
        }

        let usage = ClassLevels::decode(&raw)?.usage();
        if let Some(reason) = check_level(&usage, &self.policy) {
            return Ok(Decision::Rejected(reason));
        }

        raw.require(MIN_FIELDS)?;
        let slot_list = parse_slot_list(line, raw.last())?;
        let flags = EffectFlags::of(&slot_list, &self.policy);
        let record = SpellRecord::decode(&raw, id, name, usage, slot_list)?;

        Ok(match inclusion(flags, &usage, &self.policy) {
            Inclusion::Indexed(buckets) => Decision::Indexed { record, buckets },
            Inclusion::Global => Decision::Global(record),
            Inclusion::Rejected(reason) => Decision::Rejected(reason),
        })
    }

    /// Classify a whole dump held in memory
    ///
    /// Blank lines are skipped. The first decode error aborts the scan.
    pub fn classify_text(&self, text: &str) -> Result<(ParsedDatabase, ExtractSummary)> {
        let mut database = ParsedDatabase::new(&self.policy.classes);
        let mut summary = ExtractSummary::default();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            summary.lines += 1;

            let decision = self.classify_line(index + 1, line)?;
            match &decision {
                Decision::Rejected(reason) => {
                    tracing::trace!("Line {} rejected: {}", index + 1, reason);
                }
                Decision::Indexed { record, buckets } => {
                    tracing::trace!(
                        "Spell {} ({}) indexed under {} classes",
                        record.id,
                        record.name,
                        buckets.len()
                    );
                }
                Decision::Global(record) => {
                    tracing::trace!("Spell {} ({}) stored as global", record.id, record.name);
                }
            }

            summary.record(&decision);
            database.apply(decision);
        }

        for (reason, count) in &summary.rejected {
            tracing::debug!("Rejected {} lines: {}", count, reason);
        }
        tracing::info!(
            "Classified {} lines: {} indexed, {} global, {} rejected",
            summary.lines,
            summary.indexed,
            summary.global,
            summary.rejected_total()
        );

        Ok((database, summary))
    }

    /// Classify the dump at `path`
    pub fn classify_file(&self, path: &Path) -> Result<(ParsedDatabase, ExtractSummary)> {
        if !path.is_file() {
            return Err(ExtractError::MissingInput(path.to_path_buf()));
        }

        tracing::info!("Loading spells from {}", path.display());
        let bytes = fs::read(path)?;
        self.classify_text(&String::from_utf8_lossy(&bytes))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(FilterPolicy::default())
    }
}
