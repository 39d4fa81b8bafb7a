//! String Table Module
//!
//! Loads the auxiliary spell string table: spell id → display strings.
//!
//! ## Line Layout
//! ```text
//! ┌────┬─────┬─────┬──────────────┬────────────────┬─────┐
//! │ id │  …  │  …  │ lands on you │ lands on other │  …  │
//! └────┴─────┴─────┴──────────────┴────────────────┴─────┘
//!   0                     3               4
//! ```
//!
//! Loading is lenient: a missing file or a directory gives an empty table
//! and short lines are skipped with a warning.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::FIELD_DELIMITER;

const ID_FIELD: usize = 0;
const LANDS_ON_YOU_FIELD: usize = 3;
const LANDS_ON_OTHER_FIELD: usize = 4;

/// Display strings for one spell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellStrings {
    pub lands_on_you: String,
    pub lands_on_other: String,
}

/// Spell id (as written in the file) → display strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: BTreeMap<String, SpellStrings>,
}

impl StringTable {
    /// Load the table at `path`; anything but a regular file yields an
    /// empty table
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::info!("No spell strings at {}, continuing without", path.display());
            return Ok(Self::default());
        }

        let bytes = fs::read(path)?;

        tracing::info!("Loading spell strings from {}", path.display());
        let table = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::info!("Loaded {} spell strings", table.len());
        Ok(table)
    }

    /// Build a table from file contents
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
            if fields.len() <= LANDS_ON_OTHER_FIELD {
                tracing::warn!(
                    "Spell strings line {}: {} fields, need {}",
                    index + 1,
                    fields.len(),
                    LANDS_ON_OTHER_FIELD + 1
                );
                continue;
            }

            entries.insert(
                fields[ID_FIELD].to_string(),
                SpellStrings {
                    lands_on_you: fields[LANDS_ON_YOU_FIELD].to_string(),
                    lands_on_other: fields[LANDS_ON_OTHER_FIELD].to_string(),
                },
            );
        }

        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&SpellStrings> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SpellStrings)> {
        self.entries.iter()
    }
}
