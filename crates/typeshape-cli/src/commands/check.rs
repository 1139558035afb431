use std::path::PathBuf;

use typeshape_core::Schema;

use super::schema_loader::load_schema;

pub struct CheckArgs {
    pub schema_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    match load_schema(&args.schema_path) {
        Ok(schema) => println!("{}", summary(&schema)),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// One-line description of a valid schema.
pub fn summary(schema: &Schema) -> String {
    let declared = schema
        .types
        .iter()
        .filter(|(_, def)| def.is_named() && !def.pkg_path.is_empty())
        .count();
    let roots = if schema.roots.is_empty() {
        "no roots".to_string()
    } else {
        let names: Vec<_> = schema
            .roots
            .iter()
            .map(|&id| schema.types.display(id))
            .collect();
        format!("roots: {}", names.join(", "))
    };
    let types = match schema.types.len() {
        1 => "1 type".to_string(),
        n => format!("{n} types"),
    };
    format!("{types} ({declared} declared), {roots}")
}
