use typeshape_core::{Field, Form, Method, Signature, TypeGraph, TypeGraphBuilder, TypeId, TypeKind};

use super::Emitter;
use crate::Error;
use crate::test_utils::{SHOP, customer, shop_config};

/// Method lines written for `id`, and the types they referenced.
fn methods_of(graph: &TypeGraph, id: TypeId, form: Form) -> (String, Vec<TypeId>) {
    let config = shop_config();
    let mut emitter = Emitter::new(graph, &config, Vec::new());
    let referenced = emitter.write_methods(id, form).unwrap();
    let bytes = emitter.out.finish().unwrap();
    (String::from_utf8(bytes).unwrap(), referenced)
}

#[test]
fn parameters_numbered_from_one() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let int = b.primitive(TypeKind::Int);
    let flags = b.slice(string);
    let svc = b.declare(TypeKind::Struct, SHOP, "Svc");
    b.add_method(svc, Method::new("Run", Signature::new(vec![string, int, flags], vec![])));
    let graph = b.finish();

    let (text, referenced) = methods_of(&graph, svc, Form::Pointer);
    assert_eq!(text, "Run(p1: string, p2: number, p3: string[]): void\n");
    assert_eq!(referenced, vec![string, int, flags]);
}

#[test]
fn result_scheduling_by_kind() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let buyer = customer(&mut b);
    let buyer_ptr = b.pointer(buyer);
    let buyers = b.slice(buyer);
    let index = b.map(string, buyer);
    let svc = b.declare(TypeKind::Struct, SHOP, "Svc");
    for (name, result) in [("A", buyer_ptr), ("B", buyers), ("C", index), ("D", buyer)] {
        b.add_method(svc, Method::new(name, Signature::new(vec![], vec![result])));
    }
    let graph = b.finish();

    let (text, referenced) = methods_of(&graph, svc, Form::Pointer);
    insta::assert_snapshot!(text, @r"
    A(): null | Customer
    B(): Customer[]
    C(): Record<string, Customer>
    D(): Customer
    ");
    assert_eq!(referenced, vec![buyer, buyer, buyer]);
}

#[test]
fn multiple_results_leave_a_marker() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let svc = b.declare(TypeKind::Struct, SHOP, "Svc");
    b.add_method(svc, Method::new("Pair", Signature::new(vec![string], vec![string, string])));
    let graph = b.finish();

    let (text, referenced) = methods_of(&graph, svc, Form::Pointer);
    assert_eq!(text, "// multiple results Pair\n");
    assert!(referenced.is_empty());
}

#[test]
fn unexported_methods_skipped() {
    let mut b = TypeGraphBuilder::new();
    let svc = b.declare(TypeKind::Struct, SHOP, "Svc");
    b.add_method(svc, Method::new("reset", Signature::default()));
    b.add_method(svc, Method::new("Close", Signature::default()));
    let graph = b.finish();

    let (text, _) = methods_of(&graph, svc, Form::Pointer);
    assert_eq!(text, "Close(): void\n");
}

#[test]
fn value_form_excludes_pointer_receivers() {
    let mut b = TypeGraphBuilder::new();
    let svc = b.declare(TypeKind::Struct, SHOP, "Svc");
    b.add_method(svc, Method::new("Get", Signature::default()));
    b.add_method(svc, Method::new("Set", Signature::default()).on_pointer());
    let graph = b.finish();

    let (value, _) = methods_of(&graph, svc, Form::Value);
    let (pointer, _) = methods_of(&graph, svc, Form::Pointer);
    assert_eq!(value, "Get(): void\n");
    assert_eq!(pointer, "Get(): void\nSet(): void\n");
}

#[test]
fn promoted_methods_are_shadowed_by_shallower_ones() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let int = b.primitive(TypeKind::Int);
    let inner = b.declare(TypeKind::Struct, SHOP, "Inner");
    b.add_method(inner, Method::new("Id", Signature::new(vec![], vec![string])));
    b.add_method(inner, Method::new("Len", Signature::new(vec![], vec![int])));
    let outer = b.declare(TypeKind::Struct, SHOP, "Outer");
    let embedded = b.embed(inner);
    b.define_fields(outer, vec![embedded, Field::new("Extra", string)]);
    b.add_method(outer, Method::new("Id", Signature::new(vec![], vec![int])));
    let graph = b.finish();

    let (text, _) = methods_of(&graph, outer, Form::Pointer);
    assert_eq!(text, "Id(): number\nLen(): number\n");
}

#[test]
fn result_text_rejects_several_results() {
    let mut b = TypeGraphBuilder::new();
    let string = b.primitive(TypeKind::String);
    let graph = b.finish();
    let config = shop_config();
    let emitter = Emitter::new(&graph, &config, Vec::new());

    let method = Method::new("Both", Signature::new(vec![], vec![string, string]));
    let err = emitter.result_text(&method, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, Error::ResultShape { ref method, count: 2 } if method == "Both"));
    insta::assert_snapshot!(err, @"method `Both` has 2 result types, at most one can be rendered");
}
