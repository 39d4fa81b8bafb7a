//! # spellindex
//!
//! Extracts the damage and focus spells from a `^`-delimited spell
//! database dump into a compact JSON lookup document:
//! - Typed decoding of fixed-position fields
//! - Per-class applicability from the packed class level table
//! - Effect slot parsing and damage / focus classification
//! - A per-class index of spell ids plus a global id → record map
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────────────┐
//! │   String Table   │      │              Classifier              │
//! │ (lands-on text)  │      │  record ─► classes ─► effect ─► filter│
//! └────────┬─────────┘      └──────────────────┬───────────────────┘
//!          │                                   │
//!          │                                   ▼
//!          │                          ┌─────────────────┐
//!          │                          │ ParsedDatabase  │
//!          │                          │ (index, spells) │
//!          │                          └────────┬────────┘
//!          │                                   │
//!          │                                   ▼
//!          │                          ┌─────────────────┐
//!          │                          │  Output (JSON)  │
//!          │                          └────────┬────────┘
//!          │                                   │
//!          ▼                                   ▼
//!   ┌─────────────────────────────────────────────────────┐
//!   │              Lookup (SpellDatabase)                 │
//!   └─────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod classes;
pub mod effect;
pub mod classifier;
pub mod strings;
pub mod output;
pub mod lookup;
pub mod extract;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ExtractError, Result};
pub use config::{Config, FilterPolicy, CLASSES};
pub use classifier::{Classifier, Decision, ExtractSummary, ParsedDatabase, Rejection};
pub use extract::{ExtractReport, Extractor};
pub use lookup::SpellDatabase;
pub use record::SpellRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of spellindex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
