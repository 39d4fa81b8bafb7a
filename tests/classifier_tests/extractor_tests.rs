//! Tests for full extraction runs
//!
//! These tests verify:
//! - A run writes the document and reports its counters
//! - A missing string table is not fatal
//! - A missing dump or a decode error writes nothing

use std::path::Path;

use spellindex::output::read_database;
use spellindex::{Config, ExtractError, Extractor};
use tempfile::TempDir;

use crate::common::{dump, SpellLine, FOCUS, NUKE};

// =============================================================================
// Helper Functions
// =============================================================================

fn config_in(dir: &Path) -> Config {
    Config::builder()
        .spells_path(dir.join("spells_us.txt"))
        .strings_path(dir.join("spells_us_str.txt"))
        .output_path(dir.join("spells.json"))
        .build()
}

fn write_spells(dir: &Path, lines: &[SpellLine]) {
    std::fs::write(dir.join("spells_us.txt"), dump(lines)).unwrap();
}

// =============================================================================
// Run Tests
// =============================================================================

#[test]
fn test_run_writes_document() {
    let temp = TempDir::new().unwrap();
    write_spells(
        temp.path(),
        &[
            SpellLine::new(1, "Fire Bolt").class_level(0, 100).slots(NUKE),
            SpellLine::new(2, "Focus of Fire").slots(FOCUS),
        ],
    );
    std::fs::write(
        temp.path().join("spells_us_str.txt"),
        "1^x^y^You burn.^Someone burns.^\n2^x^y^^^\n",
    )
    .unwrap();

    let report = Extractor::new(config_in(temp.path())).run().unwrap();

    assert_eq!(report.summary.indexed, 1);
    assert_eq!(report.summary.global, 1);
    assert_eq!(report.strings_loaded, 2);

    let db = read_database(&temp.path().join("spells.json")).unwrap();
    assert_eq!(db.class_ids(2), &[1]);
    assert!(db.spell(2).is_some());
}

#[test]
fn test_missing_strings_not_fatal() {
    let temp = TempDir::new().unwrap();
    write_spells(
        temp.path(),
        &[SpellLine::new(1, "Fire Bolt").class_level(0, 100).slots(NUKE)],
    );

    let report = Extractor::new(config_in(temp.path())).run().unwrap();

    assert_eq!(report.strings_loaded, 0);
    assert!(temp.path().join("spells.json").exists());
}

#[test]
fn test_missing_spells_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let err = Extractor::new(config_in(temp.path())).run().unwrap_err();

    assert!(matches!(err, ExtractError::MissingInput(_)));
    assert!(!temp.path().join("spells.json").exists());
}

#[test]
fn test_decode_error_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_spells(
        temp.path(),
        &[
            SpellLine::new(1, "Fire Bolt").class_level(0, 100).slots(NUKE),
            SpellLine::new(2, "Ice Bolt").class_level(0, 100).truncate(60),
        ],
    );

    let err = Extractor::new(config_in(temp.path())).run().unwrap_err();

    assert!(err.is_decode());
    assert!(!temp.path().join("spells.json").exists());
}

#[test]
fn test_default_config_paths() {
    let config = Config::default();
    assert_eq!(config.spells_path, Path::new("eqfiles/spells_us.txt"));
    assert_eq!(config.strings_path, Path::new("eqfiles/spells_us_str.txt"));
    assert_eq!(config.output_path, Path::new("spells.json"));
    assert_eq!(config.policy.min_level, 85);
    assert!(!config.pretty);
}
