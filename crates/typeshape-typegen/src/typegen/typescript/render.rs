//! Declaration rendering.

use std::io::Write;

use typeshape_core::TypeId;

use super::Emitter;
use super::identity::TypeInfo;
use super::naming::TEMPLATE_PARAM;
use crate::Result;

impl<W: Write> Emitter<'_, W> {
    /// Write the full declaration of `id`.
    ///
    /// Returns the types its members reference, in the order met.
    pub(super) fn write_type(&mut self, id: TypeId, info: &TypeInfo) -> Result<Vec<TypeId>> {
        let opener = if info.is_generic {
            format!("type {}<{TEMPLATE_PARAM}> = {{", info.base_name)
        } else if info.kind.is_primitive() {
            // A primitive-backed type can still carry methods.
            format!("type {} = object & {{", info.base_name)
        } else {
            format!("type {} = {{", info.base_name)
        };

        self.out.line(&opener)?;
        self.out.indent();
        let members = self.write_members(id, info)?;
        self.out.dedent();
        let closing = self.closing_line(&members.embeds);
        self.out.line(&closing)?;

        Ok(members.referenced)
    }

    /// `}` followed by one `& Name` per embedded type.
    pub(super) fn closing_line(&self, embeds: &[TypeId]) -> String {
        let mut line = String::from("}");
        for &embed in embeds {
            line.push_str(" & ");
            line.push_str(&self.embed_name(embed));
        }
        line
    }
}
