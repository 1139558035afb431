//! Type references in TypeScript syntax.

use std::io::Write;

use typeshape_core::{TypeId, TypeKind};

use super::Emitter;
use super::identity::resolve;

/// Name of the single template parameter of a generic declaration.
pub(super) const TEMPLATE_PARAM: &str = "T";

/// Written in place of types the output cannot describe.
pub(super) const OPAQUE: &str = "unknown";

impl<W: Write> Emitter<'_, W> {
    /// TypeScript text for a reference to `id`.
    pub(super) fn name_of(&self, id: TypeId) -> String {
        let graph = self.graph;
        let def = graph.def(id);
        let info = resolve(graph, id);
        if info.is_alias {
            return def.name.clone();
        }

        match def.kind {
            TypeKind::String => "string".to_string(),
            TypeKind::Bool => "boolean".to_string(),
            TypeKind::Int
            | TypeKind::Int8
            | TypeKind::Int16
            | TypeKind::Int32
            | TypeKind::Int64
            | TypeKind::Uint
            | TypeKind::Uint8
            | TypeKind::Uint16
            | TypeKind::Uint32
            | TypeKind::Uint64
            | TypeKind::Float32
            | TypeKind::Float64 => "number".to_string(),
            TypeKind::Uintptr
            | TypeKind::Complex64
            | TypeKind::Complex128
            | TypeKind::UnsafePointer => "object".to_string(),
            TypeKind::Pointer => format!("null | {}", self.name_of(graph.elem(id))),
            TypeKind::Slice => {
                let elem = graph.elem(id);
                let text = self.name_of(elem);
                if graph.kind(elem) == TypeKind::Pointer {
                    format!("({text})[]")
                } else {
                    format!("{text}[]")
                }
            }
            TypeKind::Map => format!(
                "Record<{}, {}>",
                self.name_of(graph.key(id)),
                self.name_of(graph.elem(id))
            ),
            TypeKind::Interface if !def.is_named() && def.methods.is_empty() => "any".to_string(),
            TypeKind::Interface if info.is_generic => format!("null | {}", info.generic_reference()),
            TypeKind::Interface => format!("null | {}", declared_or_opaque(&def.name)),
            TypeKind::Struct if info.is_generic => info.generic_reference(),
            TypeKind::Struct if !self.admits(id, &info) => OPAQUE.to_string(),
            TypeKind::Struct | TypeKind::Array | TypeKind::Chan | TypeKind::Func => {
                declared_or_opaque(&def.name).to_string()
            }
        }
    }

    /// Text after `} &` for an embedded type.
    pub(super) fn embed_name(&self, id: TypeId) -> String {
        let info = resolve(self.graph, id);
        if info.is_generic {
            info.generic_reference()
        } else if self.admits(id, &info) {
            info.base_name
        } else {
            OPAQUE.to_string()
        }
    }
}

fn declared_or_opaque(name: &str) -> &str {
    if name.is_empty() { OPAQUE } else { name }
}

/// Field text for a field typed by the template parameter.
pub(super) fn template_slot(kind: TypeKind) -> String {
    match kind {
        TypeKind::Pointer => format!("null | {TEMPLATE_PARAM}"),
        TypeKind::Slice => format!("{TEMPLATE_PARAM}[]"),
        _ => TEMPLATE_PARAM.to_string(),
    }
}
