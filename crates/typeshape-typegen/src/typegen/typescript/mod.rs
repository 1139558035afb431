//! TypeScript declarations from a type graph.
//!
//! Root types are written first, in the order given; every type they
//! reference is then written breadth-first, once, provided it comes from a
//! package under the configured prefix. References to anything else render
//! as `unknown`.

mod config;
mod emitter;
mod identity;
mod members;
mod methods;
mod naming;
mod output;
mod render;

#[cfg(test)]
mod identity_tests;
#[cfg(test)]
mod methods_tests;

use std::io::Write;

use typeshape_core::{TypeGraph, TypeId};

pub use config::Config;
pub use emitter::Emitter;
pub use identity::{TypeInfo, resolve};

use crate::Result;

/// Generate declarations for `roots` into a string.
pub fn emit(graph: &TypeGraph, roots: &[TypeId], config: &Config) -> Result<String> {
    let bytes = write(Vec::new(), graph, roots, config)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write declarations for `roots` to `out`, returning the writer.
pub fn write<W: Write>(out: W, graph: &TypeGraph, roots: &[TypeId], config: &Config) -> Result<W> {
    Emitter::new(graph, config, out).emit(roots)
}
