use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use tempfile::TempDir;

pub const SHOP_SCHEMA: &str = indoc! {r#"
    {
      "types": [
        { "kind": "string", "name": "string" },
        { "kind": "pointer", "elem": 0 },
        {
          "kind": "struct",
          "name": "Customer",
          "pkg": "example.com/shop",
          "fields": [
            { "name": "Name", "type": 0 },
            { "name": "Nick", "type": 1 },
            { "name": "token", "type": 0 }
          ]
        },
        {
          "kind": "struct",
          "name": "Order",
          "pkg": "example.com/shop",
          "fields": [
            { "name": "Buyer", "type": 2 },
            { "name": "Notes", "type": 4 },
            { "name": "At", "type": 5 }
          ]
        },
        { "kind": "slice", "elem": 0 },
        {
          "kind": "struct",
          "name": "Instant",
          "pkg": "example.org/clock",
          "fields": [{ "name": "Nanos", "type": 6 }]
        },
        { "kind": "int64", "name": "int64" }
      ],
      "roots": [3]
    }
"#};

/// Write `json` to `schema.json` inside a fresh temp dir.
pub fn write_schema(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}
