//! Buff duration formulas
//!
//! `duration1` selects a formula of the caster level; `duration2` is the
//! base duration and, when positive, the cap.

use crate::record::SpellRecord;

/// Duration in ticks of `record` cast at `player_level`
pub fn duration_ticks(record: &SpellRecord, player_level: i32) -> i32 {
    formula_ticks(record.duration1, record.duration2, player_level)
}

/// Duration for a formula id, base duration and caster level
///
/// Level-scaled formulas saturate at the `i32` bounds.
pub fn formula_ticks(formula: i32, base: i32, level: i32) -> i32 {
    let value = match formula {
        0 => 0,
        1 | 12 => (level / 2).max(1),
        2 => (level / 2).saturating_add(5).max(6),
        3 => level.saturating_mul(30),
        4 => 50,
        5 => 2,
        6 => level / 2,
        7 => level,
        8 => level.saturating_add(10),
        9 => level.saturating_mul(2).saturating_add(10),
        10 => level.saturating_mul(30).saturating_add(10),
        11 => level.saturating_add(3).saturating_mul(30),
        13 => level.saturating_mul(4).saturating_add(10),
        14 => level.saturating_mul(5).saturating_add(10),
        15 => level.saturating_mul(5).saturating_add(50).saturating_mul(2),
        50 => 72000,
        3600 => 3600,
        _ => base,
    };

    if base > 0 && value > base {
        base
    } else {
        value
    }
}
