//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{TypeDef, TypeGraph, TypeId};

impl TypeGraph {
    pub(crate) fn ensure_def(&self, id: TypeId) -> &TypeDef {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeGraph: {id} not found \
                 (graphs must be validated before traversal)"
            )
        })
    }

    pub(crate) fn ensure_def_mut(&mut self, id: TypeId) -> &mut TypeDef {
        let len = self.len();
        self.defs_mut().get_mut(id.index()).unwrap_or_else(|| {
            panic!("TypeGraph: {id} not found (graph holds {len} types)")
        })
    }

    pub(crate) fn ensure_elem(&self, id: TypeId) -> TypeId {
        let def = self.ensure_def(id);
        def.elem.unwrap_or_else(|| {
            panic!(
                "TypeGraph: {id} of kind {:?} has no element type \
                 (graphs must be validated before traversal)",
                def.kind
            )
        })
    }

    pub(crate) fn ensure_key(&self, id: TypeId) -> TypeId {
        let def = self.ensure_def(id);
        def.key.unwrap_or_else(|| {
            panic!(
                "TypeGraph: {id} of kind {:?} has no key type \
                 (graphs must be validated before traversal)",
                def.kind
            )
        })
    }
}
