use std::fs;
use std::io::{self, Read};
use std::path::Path;

use typeshape_core::Schema;

/// Read and validate a schema from a file, or stdin for "-".
pub fn load_schema(path: &Path) -> Result<Schema, String> {
    let json = if path.as_os_str() == "-" {
        load_stdin()?
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?
    };

    let schema = Schema::from_json(&json)
        .map_err(|e| format!("invalid schema '{}': {}", path.display(), e))?;
    tracing::debug!(
        path = %path.display(),
        types = schema.types.len(),
        roots = schema.roots.len(),
        "schema loaded"
    );
    Ok(schema)
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
