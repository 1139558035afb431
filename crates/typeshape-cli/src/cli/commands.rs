//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeshape")
        .about("TypeScript declarations from type graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(types_command())
        .subcommand(check_command())
}

/// Generate declarations from a schema.
pub fn types_command() -> Command {
    Command::new("types")
        .about("Generate TypeScript declarations from a schema")
        .override_usage(
            "\
  typeshape types <SCHEMA>
  typeshape types <SCHEMA> --root <NAME>... [--pkg <PREFIX>] [--namespace <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  typeshape types schema.json                          # schema roots
  typeshape types schema.json -r app.User -r Order     # explicit roots
  typeshape types schema.json -p example.com/app       # expand only this package
  typeshape types schema.json -n Api -o api.d.ts       # namespaced, to file
  cat schema.json | typeshape types -                  # from stdin"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(namespace_arg())
        .arg(pkg_arg())
        .arg(output_file_arg())
        .arg(verbose_arg())
}

/// Validate a schema.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a schema")
        .after_help(
            r#"EXAMPLES:
  typeshape check schema.json
  typeshape check -                   # from stdin"#,
        )
        .arg(schema_path_arg())
        .arg(verbose_arg())
}
