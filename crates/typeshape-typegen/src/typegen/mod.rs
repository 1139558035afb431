//! Type declaration generation from type graphs.
//!
//! Walks a [`TypeGraph`](typeshape_core::TypeGraph) from a set of root types
//! and writes declarations for a target language. Currently supports
//! TypeScript.
//!
//! # Example
//!
//! ```
//! use typeshape_core::{Field, TypeGraphBuilder, TypeKind};
//! use typeshape_typegen::typegen::typescript::{self, Config};
//!
//! let mut b = TypeGraphBuilder::new();
//! let string = b.primitive(TypeKind::String);
//! let user = b.declare(TypeKind::Struct, "example.com/app", "User");
//! b.define_fields(user, vec![Field::new("Name", string)]);
//! let graph = b.finish();
//!
//! let config = Config::new().package_prefix("example.com/app");
//! let output = typescript::emit(&graph, &[user], &config).unwrap();
//! assert_eq!(output, "type User = {\n  Name: string\n}\n\n");
//! ```

pub mod typescript;
