//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub schema_path: PathBuf,
    pub roots: Vec<String>,
    pub namespace: Option<String>,
    pub pkg: String,
    pub output: Option<PathBuf>,
    pub verbose: u8,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            roots: m
                .get_many::<String>("root")
                .map(|roots| roots.cloned().collect())
                .unwrap_or_default(),
            namespace: m.get_one::<String>("namespace").cloned(),
            pkg: m.get_one::<String>("pkg").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            schema_path: p.schema_path,
            roots: p.roots,
            namespace: p.namespace,
            pkg: p.pkg,
            output: p.output,
        }
    }
}

pub struct CheckParams {
    pub schema_path: PathBuf,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
