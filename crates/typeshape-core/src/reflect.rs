//! Descriptors for Rust types.
//!
//! Scalars map onto their primitive kinds, sequences onto slices, `Option`
//! onto a nilable pointer, and smart pointers are transparent. User types
//! implement [`Reflect`] through [`TypeGraphBuilder::named`]:
//!
//! ```
//! use typeshape_core::{Field, Reflect, TypeGraphBuilder, TypeId, TypeKind};
//!
//! struct Node {
//!     label: String,
//!     next: Option<Box<Node>>,
//! }
//!
//! impl Reflect for Node {
//!     fn reflect(b: &mut TypeGraphBuilder) -> TypeId {
//!         b.named::<Self>(TypeKind::Struct, "example.com/list", "Node", |b, id| {
//!             let label = b.reflect::<String>();
//!             let next = b.reflect::<Option<Box<Node>>>();
//!             b.define_fields(id, vec![Field::new("Label", label), Field::new("Next", next)]);
//!         })
//!     }
//! }
//!
//! let mut b = TypeGraphBuilder::new();
//! let node = b.reflect::<Node>();
//! let graph = b.finish();
//! assert_eq!(graph.display(node), "list.Node");
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{TypeGraphBuilder, TypeId, TypeKind};

/// A Rust type that can describe itself as a type descriptor.
pub trait Reflect {
    /// Add the descriptor (and everything it references) to `builder`.
    ///
    /// Call [`TypeGraphBuilder::reflect`] rather than this directly; it caches
    /// results per Rust type.
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId;
}

macro_rules! reflect_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
                    builder.primitive(TypeKind::$kind)
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Uint,
    f32 => Float32,
    f64 => Float64,
    char => Int32,
    String => String,
    str => String,
}

impl<T: Reflect + 'static> Reflect for Vec<T> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let elem = builder.reflect::<T>();
        builder.slice(elem)
    }
}

impl<T: Reflect + 'static> Reflect for VecDeque<T> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let elem = builder.reflect::<T>();
        builder.slice(elem)
    }
}

impl<T: Reflect + 'static> Reflect for [T] {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let elem = builder.reflect::<T>();
        builder.slice(elem)
    }
}

impl<T: Reflect + 'static, const N: usize> Reflect for [T; N] {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let elem = builder.reflect::<T>();
        builder.array(elem, N as u64)
    }
}

impl<T: Reflect + 'static> Reflect for Option<T> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let elem = builder.reflect::<T>();
        builder.pointer(elem)
    }
}

macro_rules! reflect_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Reflect + ?Sized + 'static> Reflect for $wrapper<T> {
                fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
                    builder.reflect::<T>()
                }
            }
        )*
    };
}

reflect_transparent!(Box, Rc, Arc);

impl<K: Reflect + 'static, V: Reflect + 'static, S: 'static> Reflect for HashMap<K, V, S> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let key = builder.reflect::<K>();
        let value = builder.reflect::<V>();
        builder.map(key, value)
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static, S: 'static> Reflect for IndexMap<K, V, S> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let key = builder.reflect::<K>();
        let value = builder.reflect::<V>();
        builder.map(key, value)
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static> Reflect for BTreeMap<K, V> {
    fn reflect(builder: &mut TypeGraphBuilder) -> TypeId {
        let key = builder.reflect::<K>();
        let value = builder.reflect::<V>();
        builder.map(key, value)
    }
}
