//! Record Module
//!
//! Decodes one `^`-delimited line of the spell dump into a typed record.
//!
//! ## Responsibilities
//! - Split a line into fields (`RawLine`)
//! - Typed access to contract-fixed field positions
//! - Build the immutable `SpellRecord` once the line passed the early filters
//!
//! ## Line Layout
//! ```text
//! ┌────┬──────┬─────┬───────────────────────┬─────────────────┬─────┬───────────┐
//! │ id │ name │ ... │ class levels (38..=53)│ ... (up to 145) │ ... │ slot list │
//! └────┴──────┴─────┴───────────────────────┴─────────────────┴─────┴───────────┘
//!   0     1                                                          last field
//! ```
//!
//! The last field is the effect slot list; see [`crate::effect`].

mod fields;
mod spell;

pub use fields::{field, RawLine, FIELD_DELIMITER, MIN_FIELDS};
pub use spell::SpellRecord;
