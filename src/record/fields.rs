//! Field access for a split input line

use std::str::FromStr;

use crate::error::{ExtractError, Result};

/// Delimiter between fields of the spell dump and the string table
pub const FIELD_DELIMITER: char = '^';

/// Fixed field positions (0-based) in the spell dump
pub mod field {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const CAST_TIME: usize = 8;
    pub const LOCKOUT_TIME: usize = 9;
    pub const RECAST_TIME: usize = 10;
    pub const DURATION1: usize = 11;
    pub const DURATION2: usize = 12;
    pub const MANA_COST: usize = 14;
    pub const BENEFICIAL: usize = 30;
    pub const RESIST: usize = 31;
    pub const TARGET: usize = 32;
    pub const SKILL: usize = 34;
    /// First of the 16 per-class level columns
    pub const CLASS_LEVELS: usize = 38;
    pub const MAX_HITS_TYPE: usize = 104;
    pub const MAX_HITS: usize = 105;
    pub const NOT_FOCUSABLE: usize = 125;
    pub const GROUP: usize = 135;
    pub const FIXED_CRIT_CHANCE: usize = 145;
}

/// Every fixed position plus the trailing slot list must be present
pub const MIN_FIELDS: usize = field::FIXED_CRIT_CHANCE + 2;

/// One input line split on [`FIELD_DELIMITER`]
///
/// Carries its 1-based line number so decode errors can point at it.
#[derive(Debug, Clone)]
pub struct RawLine<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> RawLine<'a> {
    /// Split `text` into fields
    pub fn split(line: usize, text: &'a str) -> Self {
        Self {
            line,
            fields: text.split(FIELD_DELIMITER).collect(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fail unless at least `count` fields are present
    pub fn require(&self, count: usize) -> Result<()> {
        if self.fields.len() < count {
            return Err(ExtractError::FieldCount {
                line: self.line,
                expected: count,
                found: self.fields.len(),
            });
        }
        Ok(())
    }

    /// Raw text of field `index`
    pub fn text(&self, index: usize) -> Result<&'a str> {
        self.fields
            .get(index)
            .copied()
            .ok_or(ExtractError::FieldCount {
                line: self.line,
                expected: index + 1,
                found: self.fields.len(),
            })
    }

    /// Field `index` parsed as a number (surrounding whitespace ignored)
    pub fn number<T: FromStr>(&self, index: usize) -> Result<T> {
        let text = self.text(index)?;
        text.trim().parse().map_err(|_| ExtractError::InvalidNumber {
            line: self.line,
            field: index,
            value: text.to_string(),
        })
    }

    /// The trailing variable-shape field
    pub fn last(&self) -> &'a str {
        self.fields.last().copied().unwrap_or("")
    }
}
