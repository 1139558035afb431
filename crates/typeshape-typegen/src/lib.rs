//! TypeScript declarations from typeshape type graphs.
//!
//! - `typegen` - declaration generation, one module per target language
//!
//! The entry points most callers want are re-exported here:
//! [`generate_typescript`] and [`write_typescript`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;

use typeshape_core::{GraphError, TypeId};

pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use typegen::typescript::{Config, emit as generate_typescript, write as write_typescript};

/// Errors that can occur while generating declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output sink failed.
    #[error("failed to write declarations: {0}")]
    Io(#[from] io::Error),

    /// A method reached result rendering with more than one result type.
    #[error("method `{method}` has {count} result types, at most one can be rendered")]
    ResultShape { method: String, count: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("root {0} is not defined in the type graph")]
    UnknownRoot(TypeId),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
