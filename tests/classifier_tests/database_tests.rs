//! Tests for the output document
//!
//! These tests verify:
//! - JSON shape (string keys, prepopulated index, slot objects)
//! - Identical input produces identical bytes
//! - Documents read back unchanged

use spellindex::classifier::Classifier;
use spellindex::output::{read_database, to_json, write_database};
use spellindex::ExtractError;
use tempfile::TempDir;

use crate::common::{dump, SpellLine, FOCUS, NUKE};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_dump() -> String {
    dump(&[
        SpellLine::new(300, "Fire Bolt").class_level(11, 100).slots(NUKE),
        SpellLine::new(100, "Ice Bolt")
            .class_level(11, 95)
            .class_level(12, 95)
            .slots("1|0|-300|0|100|0$bad$3|15|1|0|0|0"),
        SpellLine::new(200, "Focus of Fire").slots(FOCUS),
    ])
}

// =============================================================================
// Shape Tests
// =============================================================================

#[test]
fn test_json_shape() {
    let (db, _) = Classifier::default().classify_text(&sample_dump()).unwrap();
    let bytes = to_json(&db, false).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let index = value["index"].as_object().unwrap();
    assert_eq!(index.len(), 16);
    assert_eq!(index["4096"], serde_json::json!([300, 100]));
    assert_eq!(index["8192"], serde_json::json!([100]));
    assert_eq!(index["65535"], serde_json::json!([]));

    let spells = value["spells"].as_object().unwrap();
    assert_eq!(spells.len(), 3);

    let ice = &spells["100"];
    assert_eq!(ice["name"], "Ice Bolt");
    assert_eq!(ice["classMask"], 4096 | 8192);
    assert_eq!(ice["level"], 95);
    assert_eq!(ice["focusable"], true);
    assert_eq!(ice["slotList"][0]["base1"], -300);
    assert_eq!(ice["slotList"][1], serde_json::json!({}));
    assert_eq!(ice["slotList"][2]["spa"], 15);
    assert!(ice.get("maxHitsType").is_some());
    assert!(ice.get("fixedCritChance").is_some());
}

#[test]
fn test_document_starts_with_index() {
    let (db, _) = Classifier::default().classify_text(&sample_dump()).unwrap();
    let text = String::from_utf8(to_json(&db, false).unwrap()).unwrap();
    assert!(text.starts_with(r#"{"index":{"2":[]"#));
}

// =============================================================================
// Write / Read Tests
// =============================================================================

#[test]
fn test_identical_input_gives_identical_bytes() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first.json");
    let second = temp.path().join("second.json");

    let (db, _) = Classifier::default().classify_text(&sample_dump()).unwrap();
    let stats_a = write_database(&db, &first, false).unwrap();
    let (db, _) = Classifier::default().classify_text(&sample_dump()).unwrap();
    let stats_b = write_database(&db, &second, false).unwrap();

    assert_eq!(stats_a, stats_b);
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_write_then_read() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out").join("spells.json");

    let (db, _) = Classifier::default().classify_text(&sample_dump()).unwrap();
    let stats = write_database(&db, &path, true).unwrap();

    assert_eq!(stats.bytes as u64, std::fs::metadata(&path).unwrap().len());
    assert!(!temp.path().join("out").join("spells.json.tmp").exists());
    assert_eq!(read_database(&path).unwrap(), db);
}

#[test]
fn test_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("spells.json");
    std::fs::write(&path, b"stale").unwrap();

    let (db, _) = Classifier::default().classify_text("").unwrap();
    write_database(&db, &path, false).unwrap();

    assert_eq!(read_database(&path).unwrap(), db);
}

#[test]
fn test_read_missing_document() {
    let temp = TempDir::new().unwrap();
    let err = read_database(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ExtractError::MissingInput(_)));
}
