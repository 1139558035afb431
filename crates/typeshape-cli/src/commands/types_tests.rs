use std::fs;
use std::path::PathBuf;

use super::test_schema::{SHOP_SCHEMA, write_schema};
use super::types::{TypesArgs, generate, run};

fn args(schema_path: PathBuf) -> TypesArgs {
    TypesArgs {
        schema_path,
        roots: Vec::new(),
        namespace: None,
        pkg: "example.com/shop".to_string(),
        output: None,
    }
}

#[test]
fn generate_schema_roots() {
    let (_dir, path) = write_schema(SHOP_SCHEMA);

    let output = generate(&args(path)).unwrap();
    insta::assert_snapshot!(output, @r"
    type Order = {
      Buyer: Customer
      Notes: string[]
      At: unknown
    }

    type Customer = {
      Name: string
      Nick: null | string
    }
    ");
}

#[test]
fn generate_without_prefix_expands_everything() {
    let (_dir, path) = write_schema(SHOP_SCHEMA);

    let output = generate(&TypesArgs {
        pkg: String::new(),
        ..args(path)
    })
    .unwrap();
    insta::assert_snapshot!(output, @r"
    type Order = {
      Buyer: Customer
      Notes: string[]
      At: Instant
    }

    type Customer = {
      Name: string
      Nick: null | string
    }

    type Instant = {
      Nanos: number
    }
    ");
}

#[test]
fn generate_selected_roots_in_namespace() {
    let (_dir, path) = write_schema(SHOP_SCHEMA);

    let output = generate(&TypesArgs {
        roots: vec!["Customer".to_string()],
        namespace: Some("Shop".to_string()),
        ..args(path)
    })
    .unwrap();
    insta::assert_snapshot!(output, @r"
    declare namespace Shop {
      type Customer = {
        Name: string
        Nick: null | string
      }

    }
    ");
}

#[test]
fn unknown_root_name() {
    let (_dir, path) = write_schema(SHOP_SCHEMA);

    let err = generate(&TypesArgs {
        roots: vec!["Missing".to_string()],
        ..args(path)
    })
    .unwrap_err();
    assert_eq!(err, "no type named `Missing` in the schema");
}

#[test]
fn schema_without_roots() {
    let (_dir, path) = write_schema(r#"{ "types": [{ "kind": "string", "name": "string" }] }"#);

    let err = generate(&args(path)).unwrap_err();
    assert_eq!(err, "no root types: the schema lists none and no --root was given");
}

#[test]
fn missing_schema_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = generate(&args(path)).unwrap_err();
    assert!(err.starts_with("failed to read '"), "{err}");
}

#[test]
fn run_writes_output_file() {
    let (dir, path) = write_schema(SHOP_SCHEMA);
    let out = dir.path().join("shop.d.ts");

    run(TypesArgs {
        output: Some(out.clone()),
        ..args(path.clone())
    });

    let written = fs::read_to_string(out).unwrap();
    assert_eq!(written, generate(&args(path)).unwrap());
}
