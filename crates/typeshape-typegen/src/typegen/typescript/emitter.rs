//! Core emitter struct and traversal.

use std::collections::VecDeque;
use std::io::Write;

use indexmap::IndexMap;
use typeshape_core::{TypeGraph, TypeId};

use super::Config;
use super::identity::{TypeInfo, resolve};
use super::output::Output;
use crate::{Error, Result};

/// TypeScript emitter over a type graph.
pub struct Emitter<'a, W> {
    pub(super) graph: &'a TypeGraph,
    pub(super) config: &'a Config,
    pub(super) out: Output<W>,

    /// Identity key -> identity, in the order types were first seen
    pub(super) processed: IndexMap<String, TypeInfo>,
    /// Types referenced by written declarations, not yet looked at
    pub(super) pending: VecDeque<TypeId>,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(graph: &'a TypeGraph, config: &'a Config, out: W) -> Self {
        Self {
            graph,
            config,
            out: Output::new(out),
            processed: IndexMap::new(),
            pending: VecDeque::new(),
        }
    }

    /// Write declarations for `roots` and everything they pull in.
    pub fn emit(mut self, roots: &[TypeId]) -> Result<W> {
        self.graph.validate()?;
        if let Some(&missing) = roots.iter().find(|&&id| self.graph.get(id).is_none()) {
            return Err(Error::UnknownRoot(missing));
        }

        tracing::debug!(
            roots = roots.len(),
            namespace = ?self.config.namespace,
            prefix = %self.config.package_prefix,
            "generating TypeScript declarations"
        );

        let namespace = self.config.namespace.clone();
        if let Some(name) = &namespace {
            self.out.line(&format!("declare namespace {name} {{"))?;
            self.out.indent();
        }

        for &root in roots {
            self.emit_root(root)?;
        }
        self.drain()?;

        if namespace.is_some() {
            self.out.dedent();
            self.out.line("}")?;
        }

        tracing::debug!(written = self.processed.len(), "declarations complete");
        Ok(self.out.finish()?)
    }

    /// Roots skip the origin filter.
    fn emit_root(&mut self, root: TypeId) -> Result<()> {
        let id = self.graph.deref(root);
        let info = resolve(self.graph, id);
        if !self.mark(&info) {
            tracing::trace!(ty = %info.qualified_name, "root already processed");
            return Ok(());
        }
        self.emit_declaration(id, &info)
    }

    fn drain(&mut self) -> Result<()> {
        while let Some(next) = self.pending.pop_front() {
            let id = self.graph.deref(next);
            let info = resolve(self.graph, id);
            if !self.mark(&info) {
                tracing::trace!(ty = %info.qualified_name, "already processed");
                continue;
            }

            if !self.admits(id, &info) {
                tracing::trace!(ty = %info.qualified_name, "outside package prefix");
                continue;
            }
            self.emit_declaration(id, &info)?;
        }
        Ok(())
    }

    fn emit_declaration(&mut self, id: TypeId, info: &TypeInfo) -> Result<()> {
        tracing::debug!(ty = %info.qualified_name, generic = info.is_generic, "writing declaration");
        let referenced = self.write_type(id, info)?;
        self.out.blank()?;
        self.pending.extend(referenced);
        Ok(())
    }

    /// Record `info` as processed. False if its key was already present.
    fn mark(&mut self, info: &TypeInfo) -> bool {
        if self.processed.contains_key(&info.qualified_name) {
            return false;
        }
        self.processed
            .insert(info.qualified_name.clone(), info.clone());
        true
    }

    /// Origin filter: named, not predeclared, and from a package under the prefix.
    pub(super) fn admits(&self, id: TypeId, info: &TypeInfo) -> bool {
        let def = self.graph.def(id);
        !info.is_basic
            && def.is_named()
            && def.pkg_path.starts_with(&self.config.package_prefix)
    }
}
