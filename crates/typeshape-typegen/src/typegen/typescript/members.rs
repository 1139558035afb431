//! Member lines of a declaration body.

use std::io::Write;

use typeshape_core::{Field, Form, TypeId, TypeKind};

use super::Emitter;
use super::identity::{TypeInfo, resolve};
use super::naming::template_slot;
use crate::Result;

/// What a body contributed besides its lines.
#[derive(Debug, Default)]
pub(super) struct Members {
    /// Embedded types, pointers stripped, in field order.
    pub embeds: Vec<TypeId>,
    /// Types that need their own declarations.
    pub referenced: Vec<TypeId>,
}

impl<W: Write> Emitter<'_, W> {
    /// Write field lines, then method lines, for the type `id`.
    pub(super) fn write_members(&mut self, id: TypeId, info: &TypeInfo) -> Result<Members> {
        let graph = self.graph;
        let def = graph.def(id);
        let mut members = Members::default();

        if def.kind == TypeKind::Struct {
            for field in def.fields.iter().filter(|f| f.exported) {
                self.write_field(field, info, &mut members)?;
            }
        }

        let form = match def.kind {
            TypeKind::Interface => Form::Interface,
            _ => Form::Pointer,
        };
        let methods = self.write_methods(id, form)?;
        members.referenced.extend(methods);
        Ok(members)
    }

    fn write_field(&mut self, field: &Field, owner: &TypeInfo, members: &mut Members) -> Result<()> {
        let graph = self.graph;
        let target = graph.deref(field.ty);

        if field.anonymous {
            members.embeds.push(target);
            members.referenced.push(target);
            return Ok(());
        }

        if owner.is_generic {
            let text = if field.generic_param {
                template_slot(graph.kind(field.ty))
            } else {
                self.name_of(field.ty)
            };
            self.out.line(&format!("{}: {text}", field.name))?;
            self.schedule_field(target, members);
            return Ok(());
        }

        let target_def = graph.def(target);
        if target_def.kind == TypeKind::Struct && !target_def.is_named() {
            return self.write_inline_struct(field, target, members);
        }

        let text = self.name_of(field.ty);
        self.out.line(&format!("{}: {text}", field.name))?;
        self.schedule_field(target, members);
        Ok(())
    }

    /// Unnamed struct field: its members are written in place.
    fn write_inline_struct(
        &mut self,
        field: &Field,
        target: TypeId,
        members: &mut Members,
    ) -> Result<()> {
        let opener = match self.graph.kind(field.ty) {
            TypeKind::Pointer => "null | {",
            _ => "{",
        };
        self.out.line(&format!("{}: {opener}", field.name))?;
        self.out.indent();
        let inline_info = resolve(self.graph, target);
        let inner = self.write_members(target, &inline_info)?;
        self.out.dedent();
        let closing = self.closing_line(&inner.embeds);
        self.out.line(&closing)?;
        members.referenced.extend(inner.referenced);
        Ok(())
    }

    /// Element types for collections, the type itself otherwise.
    fn schedule_field(&self, target: TypeId, members: &mut Members) {
        let graph = self.graph;
        match graph.kind(target) {
            TypeKind::Slice => members.referenced.push(graph.deref(graph.elem(target))),
            TypeKind::Map => {
                members.referenced.push(graph.deref(graph.key(target)));
                members.referenced.push(graph.deref(graph.elem(target)));
            }
            _ => members.referenced.push(target),
        }
    }
}
