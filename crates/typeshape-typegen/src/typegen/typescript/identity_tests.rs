use typeshape_core::{Field, TypeGraphBuilder, TypeKind};

use super::identity::resolve;
use crate::test_utils::{SHOP, customer, page, status};

#[test]
fn struct_keyed_by_printable_name() {
    let mut b = TypeGraphBuilder::new();
    let buyer = customer(&mut b);
    let graph = b.finish();

    let info = resolve(&graph, buyer);
    assert!(!info.is_generic);
    assert!(!info.is_basic);
    assert!(!info.is_alias);
    assert_eq!(info.kind, TypeKind::Struct);
    assert_eq!(info.base_name, "Customer");
    assert_eq!(info.qualified_name, "shop.Customer");
    assert_eq!(info.generic_params, "");
}

#[test]
fn instantiations_share_one_key() {
    let mut b = TypeGraphBuilder::new();
    let int = b.primitive(TypeKind::Int);
    let buyer = customer(&mut b);
    let by_int = page(&mut b, int);
    let by_customer = page(&mut b, buyer);
    let graph = b.finish();

    let first = resolve(&graph, by_int);
    let second = resolve(&graph, by_customer);

    assert!(first.is_generic && second.is_generic);
    assert_eq!(first.qualified_name, "shop.Page");
    assert_eq!(second.qualified_name, "shop.Page");
    assert_eq!(first.base_name, "Page");
    assert_eq!(first.generic_params, "int");
    assert_eq!(second.generic_params, "Customer");
    assert_eq!(second.generic_reference(), "Page<Customer>");
}

#[test]
fn generic_argument_keeps_last_segment() {
    let mut b = TypeGraphBuilder::new();
    let buyer = customer(&mut b);
    let list = b.slice(buyer);
    let listed = page(&mut b, list);
    let graph = b.finish();

    let info = resolve(&graph, listed);
    assert_eq!(graph.def(listed).name, "Page[[]example.com/shop.Customer]");
    assert_eq!(info.generic_params, "Customer");
}

#[test]
fn predeclared_primitive_is_basic() {
    let mut b = TypeGraphBuilder::new();
    let int = b.primitive(TypeKind::Int);
    let graph = b.finish();

    let info = resolve(&graph, int);
    assert!(info.is_basic);
    assert!(!info.is_alias);
    assert_eq!(info.qualified_name, "int");
}

#[test]
fn declared_primitive_is_alias() {
    let mut b = TypeGraphBuilder::new();
    let state = status(&mut b);
    let graph = b.finish();

    let info = resolve(&graph, state);
    assert!(info.is_alias);
    assert!(!info.is_basic);
    assert_eq!(info.kind, TypeKind::String);
    assert_eq!(info.qualified_name, "shop.Status");
}

#[test]
fn interface_flagged() {
    let mut b = TypeGraphBuilder::new();
    let any = b.any();
    let named = b.declare(TypeKind::Interface, SHOP, "Notifier");
    let graph = b.finish();

    let any = resolve(&graph, any);
    assert!(any.is_interface);
    assert_eq!(any.qualified_name, "interface {}");

    let named = resolve(&graph, named);
    assert!(named.is_interface);
    assert_eq!(named.base_name, "Notifier");
}

#[test]
fn unnamed_types_are_never_generic() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let buyer = customer(&mut b);
    let wrapped = page(&mut b, buyer);
    let map = b.map(string, wrapped);
    let inline = b.inline_struct(vec![Field::new("Page", wrapped)]);
    let graph = b.finish();

    let map = resolve(&graph, map);
    assert!(!map.is_generic);
    assert_eq!(map.qualified_name, "map[string]shop.Page[example.com/shop.Customer]");

    let inline = resolve(&graph, inline);
    assert!(!inline.is_generic);
    assert_eq!(inline.base_name, "");
}

#[test]
fn generic_key_allows_any_package_segment() {
    let mut b = TypeGraphBuilder::new();
    let int = b.primitive(TypeKind::Int);
    let hyphen = b.instantiate(TypeKind::Struct, "example.com/shop/my-app", "Page", &[int]);
    let dotted = b.instantiate(TypeKind::Struct, "gopkg.in/yaml.v3", "Node", &[int]);
    let graph = b.finish();

    let hyphen = resolve(&graph, hyphen);
    assert!(hyphen.is_generic);
    assert_eq!(hyphen.qualified_name, "my-app.Page");
    assert_eq!(hyphen.generic_reference(), "Page<int>");

    let dotted = resolve(&graph, dotted);
    assert!(dotted.is_generic);
    assert_eq!(dotted.qualified_name, "yaml.v3.Node");
    assert_eq!(dotted.base_name, "Node");
}
