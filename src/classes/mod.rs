//! Classes Module
//!
//! Per-class applicability derived from the 16 class level columns.
//!
//! ## Class Level Table
//! ```text
//!  column:  38   39   40   ...  53
//!  slot:     0    1    2   ...  15
//!  value:  255   90  255   ...  95     (≤ 254 = usable, 255 = not usable)
//!            │    │              │
//!  mask:     0    1    0   ...   1     then << 1 to match CLASSES
//! ```

mod player_class;

pub use player_class::PlayerClass;

use crate::error::Result;
use crate::record::{field, RawLine};

/// Number of class level columns
pub const CLASS_COUNT: usize = 16;

/// Highest column value that still means "usable by this class"
pub const MAX_USABLE_LEVEL: i32 = 254;

/// Level of a record with no usable class column (class-agnostic)
pub const GLOBAL_LEVEL: i32 = 0;

/// Result of folding the class level table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassUsage {
    /// Usable classes, already shifted to the CLASSES alignment
    pub mask: u32,

    /// Value of the last usable column, or [`GLOBAL_LEVEL`]
    pub level: i32,
}

impl ClassUsage {
    /// True when no column contributed a level
    pub fn is_global(&self) -> bool {
        self.level == GLOBAL_LEVEL
    }

    /// True when every bit of `class_value` is usable
    pub fn covers(&self, class_value: u32) -> bool {
        covers(self.mask, class_value)
    }
}

/// `mask & class_value == class_value`
pub fn covers(mask: u32, class_value: u32) -> bool {
    mask & class_value == class_value
}

/// The 16 per-class level columns of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassLevels(pub [i32; CLASS_COUNT]);

impl ClassLevels {
    /// Decode the class level columns of `raw`
    pub fn decode(raw: &RawLine<'_>) -> Result<Self> {
        let mut levels = [0i32; CLASS_COUNT];
        for (slot, level) in levels.iter_mut().enumerate() {
            *level = raw.number(field::CLASS_LEVELS + slot)?;
        }
        Ok(Self(levels))
    }

    /// Fold the table into `(mask, level)`
    ///
    /// The level is that of the highest-indexed usable column, not the
    /// lowest level across usable classes. A column whose value is 0 is
    /// usable but leaves the level at [`GLOBAL_LEVEL`]; a negative value is
    /// usable and becomes the level as-is.
    pub fn usage(&self) -> ClassUsage {
        let mut mask = 0u32;
        let mut level = GLOBAL_LEVEL;

        for (slot, &value) in self.0.iter().enumerate() {
            if value <= MAX_USABLE_LEVEL {
                mask |= 1 << slot;
                level = value;
            }
        }

        ClassUsage {
            mask: mask << 1,
            level,
        }
    }
}
