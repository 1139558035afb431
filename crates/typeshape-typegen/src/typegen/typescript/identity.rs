//! Identity of a descriptor as the emitter sees it.
//!
//! Every instantiation of a generic type shares one identity (its qualified
//! base name), so `Page[User]` and `Page[Order]` produce a single `Page<T>`.

use std::sync::LazyLock;

use regex::Regex;
use typeshape_core::{TypeGraph, TypeId, TypeKind};

/// `pkg.Base[args]`: qualified base, base name, and the last dotted segment
/// of the arguments. Package segments may hold any character but `[`
/// (`my-app`, `yaml.v3`).
static GENERIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([^\[]*\.)?([A-Za-z0-9_]+))(?:\[((.*\.)?(.*))\])?$")
        .expect("generic name pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    /// Instantiation of a generic type.
    pub is_generic: bool,
    /// Predeclared primitive (`int`, `string`, ...).
    pub is_basic: bool,
    /// Named type declared over a primitive, like `type Status string`.
    pub is_alias: bool,
    pub is_interface: bool,
    pub kind: TypeKind,
    /// Unqualified name without type arguments.
    pub base_name: String,
    /// Deduplication key: `pkg.Base` for generics, the printable signature otherwise.
    pub qualified_name: String,
    /// Type argument text, empty unless generic.
    pub generic_params: String,
}

impl TypeInfo {
    /// `Base<Params>`, the reference form of a generic instantiation.
    pub fn generic_reference(&self) -> String {
        format!("{}<{}>", self.base_name, self.generic_params)
    }
}

/// Compute the identity of `id`.
pub fn resolve(graph: &TypeGraph, id: TypeId) -> TypeInfo {
    let def = graph.def(id);
    let printable = graph.display(id);
    let kind = def.kind;

    if def.is_named()
        && let Some(caps) = GENERIC_NAME.captures(&printable)
        && caps.get(4).is_some()
    {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        return TypeInfo {
            is_generic: true,
            is_basic: false,
            is_alias: false,
            is_interface: false,
            kind,
            base_name: group(3),
            qualified_name: group(1),
            generic_params: group(6),
        };
    }

    let is_alias = kind.is_primitive() && !def.pkg_path.is_empty();
    TypeInfo {
        is_generic: false,
        is_basic: kind.is_primitive() && !is_alias,
        is_alias,
        is_interface: kind == TypeKind::Interface,
        kind,
        base_name: def.name.clone(),
        qualified_name: printable,
        generic_params: String::new(),
    }
}
