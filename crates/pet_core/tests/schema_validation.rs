use std::path::Path;

use pet_core::CoreErrorCode;
use pet_core::schema::{REQUIRED_FIELDS, has_path, load_save, missing_fields, parse_save};
use serde_json::{Value, json};

fn complete_save() -> Value {
    json!({
        "schemaVersion": 2,
        "stats": {
            "hunger": 80.0,
            "happiness": 90.5,
            "cleanliness": 75.0,
            "health": 100.0
        },
        "stage": "Baby",
        "exp": 42,
        "lastSeenTimestamp": "2024-11-02T09:30:00.000Z"
    })
}

#[test]
fn complete_save_has_no_missing_fields() {
    assert!(missing_fields(&complete_save()).is_empty());
}

#[test]
fn version_only_save_misses_the_other_seven_paths() {
    let doc = json!({ "schemaVersion": 1 });
    let missing = missing_fields(&doc);

    assert_eq!(missing, &REQUIRED_FIELDS[1..]);
}

#[test]
fn empty_object_misses_everything_in_declaration_order() {
    let missing = missing_fields(&json!({}));

    assert_eq!(missing, REQUIRED_FIELDS);
}

#[test]
fn stats_that_are_not_an_object_hide_the_nested_paths() {
    let mut doc = complete_save();
    doc["stats"] = json!("corrupted");
    let missing = missing_fields(&doc);

    assert_eq!(
        missing,
        vec![
            "stats.hunger",
            "stats.happiness",
            "stats.cleanliness",
            "stats.health",
        ]
    );
}

#[test]
fn null_values_still_count_as_present() {
    let mut doc = complete_save();
    doc["exp"] = Value::Null;
    doc["stats"]["hunger"] = Value::Null;

    assert!(missing_fields(&doc).is_empty());
}

#[test]
fn has_path_walks_only_through_objects() {
    let doc = complete_save();

    assert!(has_path(&doc, "stats.health"));
    assert!(!has_path(&doc, "stats.health.bogus"));
    assert!(!has_path(&doc, "stats.mood"));
    assert!(!has_path(&doc, "inventory"));
}

#[test]
fn non_object_top_level_misses_everything() {
    let missing = missing_fields(&json!([1, 2, 3]));

    assert_eq!(missing, REQUIRED_FIELDS);
}

#[test]
fn malformed_text_reports_a_parse_error() {
    let err = parse_save("{ not json").expect_err("parse should fail");

    assert_eq!(err.code, CoreErrorCode::Parse);
    assert!(err.message.contains("invalid save JSON"));
}

#[test]
fn missing_file_reports_an_io_error() {
    let err = load_save(Path::new("/nonexistent/pet-save.json")).expect_err("load should fail");

    assert_eq!(err.code, CoreErrorCode::Io);
    assert!(err.message.contains("cannot read save file"));
}
