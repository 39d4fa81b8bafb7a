//! Configuration for spellindex
//!
//! Centralized configuration with sensible defaults.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Name fragments marking placeholder, test and reserved spells
pub const DEFAULT_IGNORE_LIST: &[&str] = &[
    "Illusion: ",
    "MRC - ",
    "Reserved",
    "RESERVED",
    "SKU",
    "N/A",
    "NA ",
    "TEST",
    "PH",
    "Placeholder",
];

/// Spell-attribute codes that modify other spells
pub const DEFAULT_FOCUS_SPAS: &[i32] = &[
    170, 212, 273, 294, 375, 124, 127, 286, 296, 297, 302, 303, 374, 399, 413, 461, 462, 470, 483,
    484, 507,
];

/// Spell-attribute codes that deal damage when base1 is negative
pub const DEFAULT_DAMAGE_SPAS: &[i32] = &[0, 79];

/// Index bucket keys, one per class column (shifted by one bit)
pub const CLASSES: [u32; 16] = [
    2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65535,
];

/// Lowest concrete level a record may have
pub const DEFAULT_MIN_LEVEL: i32 = 85;

/// Main configuration for an extraction run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Primary `^`-delimited spell dump
    pub spells_path: PathBuf,

    /// Optional string table ("lands on you" / "lands on other")
    pub strings_path: PathBuf,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Destination of the JSON document
    pub output_path: PathBuf,

    /// Indent the JSON document
    pub pretty: bool,

    // -------------------------------------------------------------------------
    // Classifier Configuration
    // -------------------------------------------------------------------------
    pub policy: FilterPolicy,
}

/// Immutable filter and classification policy handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Reject names containing any of these (case-sensitive)
    pub ignore_list: Vec<String>,

    /// Slots with one of these spas make a spell focus-relevant
    pub focus_spas: BTreeSet<i32>,

    /// Slots with one of these spas and a negative base1 deal damage
    pub damage_spas: BTreeSet<i32>,

    /// Index bucket keys, pre-populated in the output
    pub classes: Vec<u32>,

    /// Concrete levels below this are rejected, negative ones included
    pub min_level: i32,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            ignore_list: DEFAULT_IGNORE_LIST.iter().map(|s| s.to_string()).collect(),
            focus_spas: DEFAULT_FOCUS_SPAS.iter().copied().collect(),
            damage_spas: DEFAULT_DAMAGE_SPAS.iter().copied().collect(),
            classes: CLASSES.to_vec(),
            min_level: DEFAULT_MIN_LEVEL,
        }
    }
}

impl FilterPolicy {
    /// True when `name` contains a denylisted fragment
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_list.iter().any(|ignore| name.contains(ignore.as_str()))
    }

    pub fn is_focus_spa(&self, spa: i32) -> bool {
        self.focus_spas.contains(&spa)
    }

    pub fn is_damage_spa(&self, spa: i32) -> bool {
        self.damage_spas.contains(&spa)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spells_path: PathBuf::from("eqfiles/spells_us.txt"),
            strings_path: PathBuf::from("eqfiles/spells_us_str.txt"),
            output_path: PathBuf::from("spells.json"),
            pretty: false,
            policy: FilterPolicy::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the primary spell dump path
    pub fn spells_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.spells_path = path.into();
        self
    }

    /// Set the string table path
    pub fn strings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.strings_path = path.into();
        self
    }

    /// Set the JSON output path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Indent the JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Replace the whole filter policy
    pub fn policy(mut self, policy: FilterPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the lowest accepted concrete level
    pub fn min_level(mut self, level: i32) -> Self {
        self.config.policy.min_level = level;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
