//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file (positional, "-" for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Type graph schema (JSON), or - for stdin")
}

/// Root type override (--root, repeatable).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Root type by printable or declared name (default: schema roots)")
}

/// Enclosing namespace (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .short('n')
        .long("namespace")
        .value_name("NAME")
        .help("Wrap declarations in `declare namespace NAME { ... }`")
}

/// Package prefix for the origin filter (--pkg).
pub fn pkg_arg() -> Arg {
    Arg::new("pkg")
        .short('p')
        .long("pkg")
        .value_name("PREFIX")
        .default_value("")
        .help("Only expand referenced types whose package path starts with PREFIX")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
