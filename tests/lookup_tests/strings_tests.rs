//! Tests for the spell string table
//!
//! These tests verify:
//! - Fields 0, 3 and 4 are taken as id and display strings
//! - Short lines are skipped, not fatal
//! - A missing file or a directory yields an empty table

use spellindex::strings::StringTable;
use tempfile::TempDir;

#[test]
fn test_parse_fields() {
    let table = StringTable::parse("1000^x^y^You are burned.^Someone is burned.^z\n");

    let entry = table.get("1000").unwrap();
    assert_eq!(entry.lands_on_you, "You are burned.");
    assert_eq!(entry.lands_on_other, "Someone is burned.");
}

#[test]
fn test_ids_kept_as_written() {
    let table = StringTable::parse("007^x^y^a^b\n");
    assert!(table.get("007").is_some());
    assert!(table.get("7").is_none());
}

#[test]
fn test_short_lines_skipped() {
    let table = StringTable::parse("1^a^b^c\n\n2^a^b^c^d\n");
    assert_eq!(table.len(), 1);
    assert!(table.get("1").is_none());
    assert!(table.get("2").is_some());
}

#[test]
fn test_later_line_wins() {
    let table = StringTable::parse("1^a^b^old^old\n1^a^b^new^new\n");
    assert_eq!(table.get("1").unwrap().lands_on_you, "new");
}

#[test]
fn test_load_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let table = StringTable::load(&temp.path().join("missing.txt")).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_directory_is_empty() {
    let temp = TempDir::new().unwrap();
    let table = StringTable::load(temp.path()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("spells_us_str.txt");
    std::fs::write(&path, "5^x^y^You glow.^Someone glows.\r\n").unwrap();

    let table = StringTable::load(&path).unwrap();
    assert_eq!(table.get("5").unwrap().lands_on_other, "Someone glows.");
}
