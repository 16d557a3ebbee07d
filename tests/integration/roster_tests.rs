use std::collections::BTreeMap;

use roster_core::config::{load_or_default, read_config, write_config};
use roster_core::json::{format_value, parse_record, read_records};
use roster_core::sample::sample_contacts;
use roster_core::{
    format_optional, format_record, FieldValue, Record, RecordFormatter, RosterConfig, RosterError,
};
use serde_json::json;

// === Formatting contract ===

#[test]
fn test_contact_record_formats_to_display_row() {
    let record = Record::new()
        .with("name", "John Wargo")
        .with("phone", "704.444.5566")
        .with("city", "Charlotte")
        .with("state", "North Carolina")
        .with("zip", "28222");
    assert_eq!(
        format_record(&record),
        "John Wargo, 704.444.5566, Charlotte, North Carolina, 28222"
    );
}

#[test]
fn test_empty_record_formats_to_empty_string() {
    assert_eq!(format_record(&Record::new()), "");
    assert_eq!(format_record(&serde_json::Map::new()), "");
    assert_eq!(format_record(&BTreeMap::<String, String>::new()), "");
}

#[test]
fn test_absent_record_is_invalid_input() {
    match format_optional::<Record>(None) {
        Err(RosterError::InvalidInput(msg)) => assert_eq!(msg, "record is absent"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    let err = format_value(&RecordFormatter::default(), &serde_json::Value::Null).unwrap_err();
    assert!(matches!(err, RosterError::InvalidInput(_)));
}

#[test]
fn test_reordered_fields_reorder_output() {
    let a = parse_record(r#"{"city":"Akron","state":"Ohio","zip":"44313"}"#).unwrap();
    let b = parse_record(r#"{"zip":"44313","city":"Akron","state":"Ohio"}"#).unwrap();
    assert_eq!(format_record(&a), "Akron, Ohio, 44313");
    assert_eq!(format_record(&b), "44313, Akron, Ohio");
}

#[test]
fn test_json_map_and_record_agree() {
    let value = json!({"name": "Ada", "age": 36, "langs": ["en", "fr"], "home": {"city": "London"}, "x": null});
    let map = value.as_object().unwrap();
    let record = parse_record(&value.to_string()).unwrap();
    assert_eq!(format_record(map), "Ada, 36, en,fr, {London}, ");
    assert_eq!(format_record(map), format_record(&record));
    assert_eq!(record.get("x"), Some(&FieldValue::Null));
}

// === Sample roster ===

#[test]
fn test_sample_roster_rows() {
    let formatter = RecordFormatter::default();
    let rows: Vec<String> = sample_contacts().iter().map(|r| formatter.format(r)).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], "William Calhoun, 704.444.6655, Akron, Ohio, 44313");
}

// === Files ===

#[test]
fn test_read_records_from_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("contacts.json");
    std::fs::write(
        &path,
        r#"[{"name":"Grace Hopper","city":"Arlington"},{"name":"Alan Turing","zip":"SW1"}]"#,
    )
    .unwrap();

    let records = read_records(&path).unwrap();
    let rows = RecordFormatter::new().with_separator(" | ").format_all(&records);
    assert_eq!(rows, vec!["Grace Hopper | Arlington", "Alan Turing | SW1"]);
}

#[test]
fn test_missing_records_file_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = read_records(&tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RosterError::Io(_)));
}

#[test]
fn test_config_roundtrip_and_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("roster.toml");

    assert_eq!(load_or_default(&path).unwrap(), RosterConfig::default());

    let config = RosterConfig {
        separator: "; ".into(),
        numbered: true,
    };
    write_config(&path, &config).unwrap();
    let loaded = read_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.formatter().format(&sample_contacts()[0]),
        "John Wargo; 704.444.5566; Charlotte; North Carolina; 28222"
    );
}

#[test]
fn test_malformed_config_is_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("roster.toml");
    std::fs::write(&path, "separator = [").unwrap();
    assert!(matches!(load_or_default(&path), Err(RosterError::Config(_))));
}

#[test]
fn test_large_unsigned_from_file_matches_direct_format() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("ids.json");
    let text = r#"[{"id":18446744073709551615,"name":"Ada"}]"#;
    std::fs::write(&path, text).unwrap();

    let records = read_records(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(text).unwrap();
    let direct = format_value(&RecordFormatter::default(), &value[0]).unwrap();
    assert_eq!(format_record(&records[0]), "18446744073709551615, Ada");
    assert_eq!(format_record(&records[0]), direct);
}
