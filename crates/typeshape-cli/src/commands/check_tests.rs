use typeshape_core::Schema;

use super::check::summary;
use super::schema_loader::load_schema;
use super::test_schema::{SHOP_SCHEMA, write_schema};

#[test]
fn summary_of_valid_schema() {
    let (_dir, path) = write_schema(SHOP_SCHEMA);

    let schema = load_schema(&path).unwrap();
    assert_eq!(summary(&schema), "7 types (3 declared), roots: shop.Order");
}

#[test]
fn summary_without_roots() {
    let schema = Schema::from_json(r#"{ "types": [{ "kind": "bool", "name": "bool" }] }"#).unwrap();
    assert_eq!(summary(&schema), "1 type (0 declared), no roots");
}

#[test]
fn invalid_schema_is_reported() {
    let (_dir, path) = write_schema(r#"{ "types": [{ "kind": "pointer" }] }"#);

    let err = load_schema(&path).unwrap_err();
    assert!(err.starts_with("invalid schema '"), "{err}");
    assert!(err.ends_with("type #0 of kind Pointer is missing its element type"), "{err}");
}

#[test]
fn malformed_json_is_reported() {
    let (_dir, path) = write_schema("{ not json");

    let err = load_schema(&path).unwrap_err();
    assert!(err.contains("invalid schema json"), "{err}");
}
