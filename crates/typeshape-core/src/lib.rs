#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type descriptors for typeshape.
//!
//! A [`TypeGraph`] is the reflection data the generator walks: an immutable
//! arena of [`TypeDef`]s that reference each other by [`TypeId`].
//!
//! Three ways to obtain one:
//! - **Builder** ([`TypeGraphBuilder`]): declare and describe types by hand
//! - **Reflection** ([`Reflect`]): describe Rust types, cached per type
//! - **Schema** ([`Schema`]): load a JSON document produced elsewhere

mod builder;
mod error;
mod graph;
mod invariants;
mod kind;
mod reflect;
mod schema;
pub mod utils;


pub use builder::TypeGraphBuilder;
pub use error::{GraphError, SchemaError};
pub use graph::{Field, Form, Method, Receiver, Signature, TypeDef, TypeGraph, TypeId};
pub use kind::TypeKind;
pub use reflect::Reflect;
pub use schema::Schema;
