//! Errors raised while checking or loading a type graph.

use crate::{TypeId, TypeKind};

/// A structural defect in a [`TypeGraph`](crate::TypeGraph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A descriptor references an id outside the graph.
    #[error("{from} references unknown type {to}")]
    DanglingReference { from: TypeId, to: TypeId },

    /// A descriptor lacks a component its kind requires (e.g. a pointer without `elem`).
    #[error("{id} of kind {kind:?} is missing its {component} type")]
    MissingComponent {
        id: TypeId,
        kind: TypeKind,
        component: &'static str,
    },

    /// A descriptor carries a component its kind cannot have.
    #[error("{id} of kind {kind:?} cannot have {component}")]
    UnexpectedComponent {
        id: TypeId,
        kind: TypeKind,
        component: &'static str,
    },

    /// A primitive descriptor has no name.
    #[error("{id} of primitive kind {kind:?} has no name")]
    UnnamedPrimitive { id: TypeId, kind: TypeKind },

    /// A reference cycle that never passes through a named struct or interface.
    #[error("{id} is part of a reference cycle with no named struct or interface in it")]
    StructuralCycle { id: TypeId },
}

/// Errors that can occur while loading a [`Schema`](crate::Schema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A root does not point into the graph.
    #[error("root {0} is not defined in the schema")]
    UnknownRoot(TypeId),

    /// A root requested by name matched no descriptor.
    #[error("no type named `{0}` in the schema")]
    UnknownRootName(String),
}
