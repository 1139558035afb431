//! Incremental construction of a [`TypeGraph`].
//!
//! Predeclared primitives and unnamed structural types (pointers, slices,
//! maps, ...) are interned, so asking for `[]string` twice yields one id.
//! Named types are declared first and described afterwards, which is what
//! lets a struct refer to itself.

use std::collections::HashMap;

use crate::{Field, Method, Reflect, Signature, TypeDef, TypeGraph, TypeId, TypeKind};

#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    graph: TypeGraph,
    /// Structural descriptor -> id, for unnamed and predeclared types.
    interned: HashMap<TypeDef, TypeId>,
    /// (package path, name) -> id, for declared types.
    declared: HashMap<(String, String), TypeId>,
    /// Rust type -> id, for [`Reflect`] implementations.
    reflected: HashMap<std::any::TypeId, TypeId>,
}

impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph built so far.
    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    pub fn finish(self) -> TypeGraph {
        self.graph
    }

    fn intern(&mut self, def: TypeDef) -> TypeId {
        if let Some(&id) = self.interned.get(&def) {
            return id;
        }
        let id = self.graph.push(def.clone());
        self.interned.insert(def, id);
        id
    }

    /// Predeclared type of a primitive kind (`int`, `string`, ...).
    ///
    /// # Panics
    /// If `kind` is not primitive.
    pub fn primitive(&mut self, kind: TypeKind) -> TypeId {
        let name = kind
            .predeclared_name()
            .unwrap_or_else(|| panic!("TypeGraphBuilder: {kind:?} is not a primitive kind"));
        self.intern(TypeDef::named(kind, "", name))
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeDef {
            elem: Some(elem),
            ..TypeDef::new(TypeKind::Pointer)
        })
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeDef {
            elem: Some(elem),
            ..TypeDef::new(TypeKind::Slice)
        })
    }

    pub fn array(&mut self, elem: TypeId, len: u64) -> TypeId {
        self.intern(TypeDef {
            elem: Some(elem),
            len: Some(len),
            ..TypeDef::new(TypeKind::Array)
        })
    }

    pub fn chan(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeDef {
            elem: Some(elem),
            ..TypeDef::new(TypeKind::Chan)
        })
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeDef {
            key: Some(key),
            elem: Some(value),
            ..TypeDef::new(TypeKind::Map)
        })
    }

    pub fn func(&mut self, signature: Signature) -> TypeId {
        self.intern(TypeDef {
            signature: Some(signature),
            ..TypeDef::new(TypeKind::Func)
        })
    }

    /// The universal interface, `interface {}`.
    pub fn any(&mut self) -> TypeId {
        self.intern(TypeDef::new(TypeKind::Interface))
    }

    /// Unnamed struct type, `struct { ... }`.
    pub fn inline_struct(&mut self, fields: Vec<Field>) -> TypeId {
        self.intern(TypeDef {
            fields,
            ..TypeDef::new(TypeKind::Struct)
        })
    }

    /// Declare a named type. Declaring the same package path and name again
    /// returns the existing id.
    pub fn declare(
        &mut self,
        kind: TypeKind,
        pkg_path: impl Into<String>,
        name: impl Into<String>,
    ) -> TypeId {
        let key = (pkg_path.into(), name.into());
        if let Some(&id) = self.declared.get(&key) {
            return id;
        }
        let id = self
            .graph
            .push(TypeDef::named(kind, key.0.clone(), key.1.clone()));
        self.declared.insert(key, id);
        id
    }

    /// Declare one instantiation of a generic type. The instantiation's name
    /// spells out its arguments: `Page[example.com/app.User]`.
    pub fn instantiate(
        &mut self,
        kind: TypeKind,
        pkg_path: impl Into<String>,
        base: &str,
        args: &[TypeId],
    ) -> TypeId {
        let args = args
            .iter()
            .map(|&arg| self.graph.qualified_display(arg))
            .collect::<Vec<_>>()
            .join(",");
        self.declare(kind, pkg_path, format!("{base}[{args}]"))
    }

    /// Replace the fields of a declared struct.
    pub fn define_fields(&mut self, id: TypeId, fields: Vec<Field>) {
        self.graph.def_mut(id).fields = fields;
    }

    pub fn add_method(&mut self, id: TypeId, method: Method) {
        self.graph.def_mut(id).methods.push(method);
    }

    /// Set the element (and for maps, key) of a declared composite type.
    pub fn define_elem(&mut self, id: TypeId, key: Option<TypeId>, elem: TypeId) {
        let def = self.graph.def_mut(id);
        def.key = key;
        def.elem = Some(elem);
    }

    /// Anonymous field embedding `ty`, named after the embedded type.
    pub fn embed(&self, ty: TypeId) -> Field {
        let target = self.graph.def(self.graph.deref(ty));
        let name = target.name.split('[').next().unwrap_or_default();
        Field::new(name, ty).anonymous()
    }

    /// Descriptor for a Rust type, built once and cached.
    pub fn reflect<T: Reflect + ?Sized + 'static>(&mut self) -> TypeId {
        let key = std::any::TypeId::of::<T>();
        if let Some(&id) = self.reflected.get(&key) {
            return id;
        }
        let id = T::reflect(self);
        self.reflected.insert(key, id);
        id
    }

    /// Declare the named type backing Rust type `T` and describe it.
    ///
    /// The id is registered for `T` before `describe` runs, so `describe`
    /// may reflect types that refer back to `T`.
    pub fn named<T: ?Sized + 'static>(
        &mut self,
        kind: TypeKind,
        pkg_path: impl Into<String>,
        name: impl Into<String>,
        describe: impl FnOnce(&mut Self, TypeId),
    ) -> TypeId {
        let id = self.declare(kind, pkg_path, name);
        self.reflected.insert(std::any::TypeId::of::<T>(), id);
        describe(self, id);
        id
    }
}
