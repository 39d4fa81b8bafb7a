//! Effect Module
//!
//! The effect slot list carried in the last field of every spell line.
//!
//! ## Slot List Format
//! ```text
//! ┌──────────────────────────────┬───┬──────────────────────────────┐
//! │ num|spa|base1|base2|calc|max │ $ │ num|spa|base1|base2|calc|max │ ...
//! └──────────────────────────────┴───┴──────────────────────────────┘
//! ```
//!
//! A slot with other than six sub-fields is kept as an empty placeholder
//! so later slots never shift position.

mod codec;
mod slot;

pub use codec::{encode_slot_list, parse_slot, parse_slot_list, SLOT_DELIMITER, SUBFIELD_DELIMITER};
pub use slot::{Effect, SlotEntry};
