//! Immutable arena of type descriptors.
//!
//! Descriptors reference each other by [`TypeId`], so a graph can describe
//! self-referential types (a struct holding a pointer to itself) without
//! shared ownership. A graph is built once, by [`TypeGraphBuilder`] or by
//! deserializing a [`Schema`], and is read-only afterwards.
//!
//! [`TypeGraphBuilder`]: crate::TypeGraphBuilder
//! [`Schema`]: crate::Schema

use std::collections::HashSet;
use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::utils::{is_exported, last_segment};
use crate::{GraphError, TypeKind};

/// Index of a descriptor inside its [`TypeGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type #{}", self.0)
    }
}

/// Receiver a concrete method is declared on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Receiver {
    #[default]
    Value,
    Pointer,
}

/// Which method set to compute for a descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    /// Declared methods of an interface.
    Interface,
    /// Methods callable on a value: value receivers only.
    Value,
    /// Methods callable through a pointer: value and pointer receivers.
    Pointer,
}

/// Parameter and result types of a function or method.
///
/// Method signatures never include the receiver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<TypeId>,
}

impl Signature {
    pub fn new(params: Vec<TypeId>, results: Vec<TypeId>) -> Self {
        Self { params, results }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(flatten)]
    pub signature: Signature,
    #[serde(default)]
    pub receiver: Receiver,
}

impl Method {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            signature,
            receiver: Receiver::Value,
        }
    }

    #[must_use]
    pub fn on_pointer(mut self) -> Self {
        self.receiver = Receiver::Pointer;
        self
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// A struct field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub struct Field {
    pub name: String,
    pub ty: TypeId,
    pub exported: bool,
    /// Embedded field: contributes its members to the enclosing type.
    pub anonymous: bool,
    /// Field typed by the enclosing generic type's parameter.
    pub generic_param: bool,
}

impl Field {
    /// Named field; exported when the name starts with an uppercase letter.
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        let name = name.into();
        Self {
            exported: is_exported(&name),
            name,
            ty,
            anonymous: false,
            generic_param: false,
        }
    }

    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    #[must_use]
    pub fn generic_param(mut self) -> Self {
        self.generic_param = true;
        self
    }

    #[must_use]
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }
}

/// Wire form of [`Field`]: `exported` is only written when it disagrees with the name.
#[derive(Serialize, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: TypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exported: Option<bool>,
    #[serde(default, skip_serializing_if = "is_false")]
    anonymous: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    generic_param: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        Self {
            exported: raw.exported.unwrap_or_else(|| is_exported(&raw.name)),
            name: raw.name,
            ty: raw.ty,
            anonymous: raw.anonymous,
            generic_param: raw.generic_param,
        }
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        let implied = is_exported(&field.name);
        Self {
            exported: (field.exported != implied).then_some(field.exported),
            name: field.name,
            ty: field.ty,
            anonymous: field.anonymous,
            generic_param: field.generic_param,
        }
    }
}

/// One type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDef {
    pub kind: TypeKind,
    /// Declared name, empty for unnamed types. Generic instantiations keep
    /// their arguments here: `Page[example.com/app.User]`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Defining package path, empty for predeclared and unnamed types.
    #[serde(default, rename = "pkg", skip_serializing_if = "String::is_empty")]
    pub pkg_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<TypeId>,
    /// Array length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<u64>,
    /// Signature of a func type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
}

impl TypeDef {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            name: String::new(),
            pkg_path: String::new(),
            key: None,
            elem: None,
            len: None,
            signature: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn named(kind: TypeKind, pkg_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pkg_path: pkg_path.into(),
            ..Self::new(kind)
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Every id this descriptor points at.
    pub fn references(&self) -> impl Iterator<Item = TypeId> + '_ {
        let signature = self
            .signature
            .iter()
            .flat_map(|s| s.params.iter().chain(&s.results));
        let methods = self
            .methods
            .iter()
            .flat_map(|m| m.signature.params.iter().chain(&m.signature.results));
        self.key
            .into_iter()
            .chain(self.elem)
            .chain(signature.copied())
            .chain(self.fields.iter().map(|f| f.ty))
            .chain(methods.copied())
    }
}

/// Immutable collection of type descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeGraph {
    defs: Vec<TypeDef>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap descriptors without checking them; call [`validate`](Self::validate) before use.
    pub fn from_defs(defs: Vec<TypeDef>) -> Self {
        Self { defs }
    }

    pub(crate) fn push(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.defs.len() as u32);
        self.defs.push(def);
        id
    }

    pub(crate) fn defs_mut(&mut self) -> &mut Vec<TypeDef> {
        &mut self.defs
    }

    pub(crate) fn def_mut(&mut self, id: TypeId) -> &mut TypeDef {
        self.ensure_def_mut(id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.defs.get(id.index())
    }

    /// Descriptor for an id known to be in the graph.
    pub fn def(&self, id: TypeId) -> &TypeDef {
        self.ensure_def(id)
    }

    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.def(id).kind
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.defs.len() as u32).map(TypeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeId(i as u32), def))
    }

    /// Element type of a pointer, slice, array, chan or map.
    pub fn elem(&self, id: TypeId) -> TypeId {
        self.ensure_elem(id)
    }

    /// Key type of a map.
    pub fn key(&self, id: TypeId) -> TypeId {
        self.ensure_key(id)
    }

    /// Strip one level of pointer indirection.
    pub fn deref(&self, id: TypeId) -> TypeId {
        match self.kind(id) {
            TypeKind::Pointer => self.elem(id),
            _ => id,
        }
    }

    /// Look a descriptor up by printable signature or declared name.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.ids()
            .find(|&id| self.display(id) == name)
            .or_else(|| self.ids().find(|&id| self.def(id).name == name))
    }

    /// Printable signature: `pkg.Name` for named types, structural text otherwise.
    pub fn display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_display(id, Qualify::Package, &mut out);
        out
    }

    /// Like [`display`](Self::display), but named types carry their full
    /// package path. This is the spelling used for generic type arguments.
    pub fn qualified_display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_display(id, Qualify::FullPath, &mut out);
        out
    }

    fn write_display(&self, id: TypeId, q: Qualify, out: &mut String) {
        let def = self.def(id);
        if def.is_named() {
            if !def.pkg_path.is_empty() {
                match q {
                    Qualify::Package => out.push_str(last_segment(&def.pkg_path)),
                    Qualify::FullPath => out.push_str(&def.pkg_path),
                }
                out.push('.');
            }
            out.push_str(&def.name);
            return;
        }

        match def.kind {
            TypeKind::Bool
            | TypeKind::Int
            | TypeKind::Int8
            | TypeKind::Int16
            | TypeKind::Int32
            | TypeKind::Int64
            | TypeKind::Uint
            | TypeKind::Uint8
            | TypeKind::Uint16
            | TypeKind::Uint32
            | TypeKind::Uint64
            | TypeKind::Uintptr
            | TypeKind::Float32
            | TypeKind::Float64
            | TypeKind::Complex64
            | TypeKind::Complex128
            | TypeKind::String
            | TypeKind::UnsafePointer => {
                out.push_str(def.kind.predeclared_name().unwrap_or_default());
            }
            TypeKind::Pointer => {
                out.push('*');
                self.write_display(self.elem(id), q, out);
            }
            TypeKind::Slice => {
                out.push_str("[]");
                self.write_display(self.elem(id), q, out);
            }
            TypeKind::Array => {
                let _ = write!(out, "[{}]", def.len.unwrap_or(0));
                self.write_display(self.elem(id), q, out);
            }
            TypeKind::Chan => {
                out.push_str("chan ");
                self.write_display(self.elem(id), q, out);
            }
            TypeKind::Map => {
                out.push_str("map[");
                self.write_display(self.key(id), q, out);
                out.push(']');
                self.write_display(self.elem(id), q, out);
            }
            TypeKind::Func => {
                out.push_str("func");
                let empty = Signature::default();
                self.write_signature(def.signature.as_ref().unwrap_or(&empty), q, out);
            }
            TypeKind::Interface if def.methods.is_empty() => out.push_str("interface {}"),
            TypeKind::Interface => {
                out.push_str("interface {");
                for (i, method) in def.methods.iter().enumerate() {
                    out.push_str(if i == 0 { " " } else { "; " });
                    out.push_str(&method.name);
                    self.write_signature(&method.signature, q, out);
                }
                out.push_str(" }");
            }
            TypeKind::Struct if def.fields.is_empty() => out.push_str("struct {}"),
            TypeKind::Struct => {
                out.push_str("struct {");
                for (i, field) in def.fields.iter().enumerate() {
                    out.push_str(if i == 0 { " " } else { "; " });
                    if !field.anonymous {
                        out.push_str(&field.name);
                        out.push(' ');
                    }
                    self.write_display(field.ty, q, out);
                }
                out.push_str(" }");
            }
        }
    }

    fn write_signature(&self, signature: &Signature, q: Qualify, out: &mut String) {
        out.push('(');
        for (i, &param) in signature.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_display(param, q, out);
        }
        out.push(')');

        match signature.results.as_slice() {
            [] => {}
            [single] => {
                out.push(' ');
                self.write_display(*single, q, out);
            }
            many => {
                out.push_str(" (");
                for (i, &result) in many.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_display(result, q, out);
                }
                out.push(')');
            }
        }
    }

    /// Exported methods reachable through `form`, sorted by name.
    ///
    /// Methods of embedded fields are promoted level by level; a name found at
    /// a shallower embedding depth shadows deeper ones.
    pub fn method_set(&self, id: TypeId, form: Form) -> Vec<&Method> {
        let mut methods: Vec<&Method> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut visited: HashSet<TypeId> = HashSet::new();
        let mut level = vec![(id, form)];

        while !level.is_empty() {
            let mut next = Vec::new();
            let mut found = Vec::new();

            for (id, form) in level {
                if !visited.insert(id) {
                    continue;
                }
                let def = self.def(id);
                found.extend(
                    def.methods
                        .iter()
                        .filter(|m| m.is_exported() && in_method_set(def.kind, form, m)),
                );

                if def.kind != TypeKind::Struct {
                    continue;
                }
                for field in def.fields.iter().filter(|f| f.anonymous) {
                    let embedded_form = match self.kind(field.ty) {
                        TypeKind::Pointer => Form::Pointer,
                        _ => form,
                    };
                    next.push((self.deref(field.ty), embedded_form));
                }
            }

            for method in found {
                if seen.insert(method.name.as_str()) {
                    methods.push(method);
                }
            }
            level = next;
        }

        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }

    /// Check references, per-kind shape, and structural cycles.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (id, def) in self.iter() {
            check_shape(id, def)?;
            if let Some(to) = def.references().find(|to| self.get(*to).is_none()) {
                return Err(GraphError::DanglingReference { from: id, to });
            }
        }
        self.check_cycles()
    }

    /// Reject cycles that every traversal would follow forever.
    ///
    /// Named structs, interfaces and primitives terminate rendering (they are
    /// referenced by name). Method signatures are never rendered inline, so
    /// only component types are followed.
    fn check_cycles(&self) -> Result<(), GraphError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.defs.len()];
        for start in self.ids() {
            if marks[start.index()] != Mark::New {
                continue;
            }
            marks[start.index()] = Mark::Active;
            let mut stack = vec![(start, self.structural_edges(start))];

            while let Some((id, pending)) = stack.last_mut() {
                let id = *id;
                match pending.pop() {
                    Some(next) => match marks[next.index()] {
                        Mark::Active => return Err(GraphError::StructuralCycle { id: next }),
                        Mark::Done => {}
                        Mark::New => {
                            marks[next.index()] = Mark::Active;
                            stack.push((next, self.structural_edges(next)));
                        }
                    },
                    None => {
                        marks[id.index()] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }
        Ok(())
    }

    fn structural_edges(&self, id: TypeId) -> Vec<TypeId> {
        let def = self.def(id);
        let terminal = def.kind.is_primitive()
            || matches!(def.kind, TypeKind::Struct | TypeKind::Interface);
        if terminal && def.is_named() {
            return Vec::new();
        }
        let signature = def
            .signature
            .iter()
            .flat_map(|s| s.params.iter().chain(&s.results))
            .copied();
        def.key
            .into_iter()
            .chain(def.elem)
            .chain(signature)
            .chain(def.fields.iter().map(|f| f.ty))
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Qualify {
    Package,
    FullPath,
}

fn in_method_set(kind: TypeKind, form: Form, method: &Method) -> bool {
    match (kind, form) {
        (TypeKind::Interface, _) | (_, Form::Interface) | (_, Form::Pointer) => true,
        (_, Form::Value) => method.receiver == Receiver::Value,
    }
}

fn check_shape(id: TypeId, def: &TypeDef) -> Result<(), GraphError> {
    let kind = def.kind;
    let missing = |component| GraphError::MissingComponent {
        id,
        kind,
        component,
    };
    let unexpected = |component| GraphError::UnexpectedComponent {
        id,
        kind,
        component,
    };

    match (kind.has_elem(), def.elem) {
        (true, None) => return Err(missing("element")),
        (false, Some(_)) => return Err(unexpected("an element type")),
        _ => {}
    }
    match (kind.has_key(), def.key) {
        (true, None) => return Err(missing("key")),
        (false, Some(_)) => return Err(unexpected("a key type")),
        _ => {}
    }
    if kind != TypeKind::Struct && !def.fields.is_empty() {
        return Err(unexpected("fields"));
    }
    if kind != TypeKind::Func && def.signature.is_some() {
        return Err(unexpected("a signature"));
    }
    if kind != TypeKind::Array && def.len.is_some() {
        return Err(unexpected("a length"));
    }
    if kind.is_primitive() && !def.is_named() {
        return Err(GraphError::UnnamedPrimitive { id, kind });
    }
    Ok(())
}
