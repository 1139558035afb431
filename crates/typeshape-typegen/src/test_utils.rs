//! Shared fixtures for generator tests.

use typeshape_core::{Field, Method, Signature, TypeGraph, TypeGraphBuilder, TypeId, TypeKind};

use crate::Config;

/// Package every fixture type is declared in.
pub const SHOP: &str = "example.com/shop";

/// Package outside the shop prefix.
pub const CLOCK: &str = "example.org/clock";

pub fn shop_config() -> Config {
    Config::new().package_prefix(SHOP)
}

/// Generate with the shop prefix and no namespace.
pub fn emit(graph: &TypeGraph, roots: &[TypeId]) -> String {
    crate::generate_typescript(graph, roots, &shop_config()).expect("generation succeeds")
}

/// `Customer { Name string; Email string }`
pub fn customer(b: &mut TypeGraphBuilder) -> TypeId {
    let string = b.primitive(TypeKind::String);
    let id = b.declare(TypeKind::Struct, SHOP, "Customer");
    b.define_fields(
        id,
        vec![Field::new("Name", string), Field::new("Email", string)],
    );
    id
}

/// `Page[arg] { Items []T; Total int; HasMore bool; Cursor T }`
pub fn page(b: &mut TypeGraphBuilder, arg: TypeId) -> TypeId {
    let id = b.instantiate(TypeKind::Struct, SHOP, "Page", &[arg]);
    let items = b.slice(arg);
    let int = b.primitive(TypeKind::Int);
    let boolean = b.primitive(TypeKind::Bool);
    b.define_fields(
        id,
        vec![
            Field::new("Items", items).generic_param(),
            Field::new("Total", int),
            Field::new("HasMore", boolean),
            Field::new("Cursor", arg).generic_param(),
        ],
    );
    id
}

/// `type Status string`, with `IsOpen` on the value and `IsFinal` on the pointer.
pub fn status(b: &mut TypeGraphBuilder) -> TypeId {
    let boolean = b.primitive(TypeKind::Bool);
    let id = b.declare(TypeKind::String, SHOP, "Status");
    b.add_method(
        id,
        Method::new("IsOpen", Signature::new(vec![], vec![boolean])),
    );
    b.add_method(
        id,
        Method::new("IsFinal", Signature::new(vec![], vec![boolean])).on_pointer(),
    );
    id
}

/// `clock.Instant`, a struct from a package outside the prefix.
pub fn instant(b: &mut TypeGraphBuilder) -> TypeId {
    let int = b.primitive(TypeKind::Int64);
    let id = b.declare(TypeKind::Struct, CLOCK, "Instant");
    b.define_fields(id, vec![Field::new("Nanos", int)]);
    id
}
