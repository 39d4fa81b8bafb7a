//! Slot list codec
//!
//! Parsing and encoding of the `$`/`|` slot list format.

use crate::error::{ExtractError, Result};

use super::{Effect, SlotEntry};

/// Separates slots in the slot list field
pub const SLOT_DELIMITER: char = '$';

/// Separates sub-fields within one slot
pub const SUBFIELD_DELIMITER: char = '|';

/// Sub-fields in a well-formed slot
const SLOT_ARITY: usize = 6;

// =============================================================================
// Decoding
// =============================================================================

/// Parse a whole slot list field
///
/// Every `$`-separated slot yields exactly one entry, so the result is
/// as long as the number of slots in `text`.
pub fn parse_slot_list(line: usize, text: &str) -> Result<Vec<SlotEntry>> {
    text.trim()
        .split(SLOT_DELIMITER)
        .enumerate()
        .map(|(slot, item)| parse_slot(line, slot, item))
        .collect()
}

/// Parse one slot
///
/// Empty sub-fields are dropped before counting. A slot that does not
/// have exactly six is a placeholder; a non-numeric sub-field in a
/// six-field slot is a decode error.
pub fn parse_slot(line: usize, slot: usize, text: &str) -> Result<SlotEntry> {
    let parts: Vec<&str> = text
        .split(SUBFIELD_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != SLOT_ARITY {
        return Ok(SlotEntry::Empty {});
    }

    let mut values = [0i32; SLOT_ARITY];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part.parse().map_err(|_| ExtractError::InvalidSlot {
            line,
            slot,
            value: part.to_string(),
        })?;
    }

    let [num, spa, base1, base2, calc, max] = values;
    Ok(SlotEntry::Effect(Effect {
        num,
        spa,
        base1,
        base2,
        calc,
        max,
    }))
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a slot list back into dump format
///
/// Placeholders encode as an empty slot.
pub fn encode_slot_list(slots: &[SlotEntry]) -> String {
    let mut text = String::new();
    for (index, slot) in slots.iter().enumerate() {
        if index > 0 {
            text.push(SLOT_DELIMITER);
        }
        if let SlotEntry::Effect(e) = slot {
            let values = [e.num, e.spa, e.base1, e.base2, e.calc, e.max];
            for (position, value) in values.iter().enumerate() {
                if position > 0 {
                    text.push(SUBFIELD_DELIMITER);
                }
                text.push_str(&value.to_string());
            }
        }
    }
    text
}
