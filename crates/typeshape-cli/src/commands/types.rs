use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use typeshape_typegen::{Config, generate_typescript};

use super::schema_loader::load_schema;

pub struct TypesArgs {
    pub schema_path: PathBuf,
    pub roots: Vec<String>,
    pub namespace: Option<String>,
    pub pkg: String,
    pub output: Option<PathBuf>,
}

pub fn run(args: TypesArgs) {
    let output = generate(&args).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    if let Some(ref path) = args.output {
        fs::write(path, &output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}

/// Load the schema and render declarations for the selected roots.
pub fn generate(args: &TypesArgs) -> Result<String, String> {
    let schema = load_schema(&args.schema_path)?;
    let roots = schema.select_roots(&args.roots).map_err(|e| e.to_string())?;
    if roots.is_empty() {
        return Err("no root types: the schema lists none and no --root was given".to_string());
    }

    let mut config = Config::new().package_prefix(args.pkg.clone());
    if let Some(ref name) = args.namespace {
        config = config.namespace(name.clone());
    }

    generate_typescript(&schema.types, &roots, &config).map_err(|e| e.to_string())
}
