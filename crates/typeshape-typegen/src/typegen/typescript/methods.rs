//! Method signature lines.

use std::io::Write;

use typeshape_core::{Form, Method, TypeId, TypeKind};

use super::Emitter;
use crate::{Error, Result};

impl<W: Write> Emitter<'_, W> {
    /// Write one line per exported method of `id`, sorted by name.
    ///
    /// Returns the parameter and result types that need declarations.
    pub(super) fn write_methods(&mut self, id: TypeId, form: Form) -> Result<Vec<TypeId>> {
        let graph = self.graph;
        let mut referenced = Vec::new();

        for method in graph.method_set(id, form) {
            if method.signature.results.len() > 1 {
                tracing::trace!(method = %method.name, "skipping multi-result method");
                self.out.line(&format!("// multiple results {}", method.name))?;
                continue;
            }

            let params = method
                .signature
                .params
                .iter()
                .enumerate()
                .map(|(i, &param)| format!("p{}: {}", i + 1, self.name_of(param)))
                .collect::<Vec<_>>()
                .join(", ");
            referenced.extend(method.signature.params.iter().copied());

            let result = self.result_text(method, &mut referenced)?;
            self.out
                .line(&format!("{}({params}): {result}", method.name))?;
        }
        Ok(referenced)
    }

    /// Result text of a method with at most one result.
    pub(super) fn result_text(
        &self,
        method: &Method,
        referenced: &mut Vec<TypeId>,
    ) -> Result<String> {
        let graph = self.graph;
        match method.signature.results.as_slice() {
            [] => Ok("void".to_string()),
            &[result] => {
                match graph.kind(result) {
                    TypeKind::Pointer | TypeKind::Slice => referenced.push(graph.elem(result)),
                    TypeKind::Map => {}
                    _ => referenced.push(result),
                }
                Ok(self.name_of(result))
            }
            many => Err(Error::ResultShape {
                method: method.name.clone(),
                count: many.len(),
            }),
        }
    }
}
