//! JSON document pairing a type graph with its root types.
//!
//! ```json
//! {
//!   "types": [
//!     { "kind": "string", "name": "string" },
//!     { "kind": "struct", "name": "User", "pkg": "example.com/app",
//!       "fields": [{ "name": "Name", "type": 0 }] }
//!   ],
//!   "roots": [1]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{SchemaError, TypeGraph, TypeId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub types: TypeGraph,
    #[serde(default)]
    pub roots: Vec<TypeId>,
}

impl Schema {
    pub fn new(types: TypeGraph, roots: Vec<TypeId>) -> Self {
        Self { types, roots }
    }

    /// Parse and validate a schema.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        self.types.validate()?;
        if let Some(&root) = self.roots.iter().find(|&&r| self.types.get(r).is_none()) {
            return Err(SchemaError::UnknownRoot(root));
        }
        Ok(())
    }

    /// Roots selected by name, or the schema's own roots when `names` is empty.
    ///
    /// Names match a printable signature (`app.User`) first, then a declared
    /// name (`User`).
    pub fn select_roots(&self, names: &[String]) -> Result<Vec<TypeId>, SchemaError> {
        if names.is_empty() {
            return Ok(self.roots.clone());
        }
        names
            .iter()
            .map(|name| {
                self.types
                    .find(name)
                    .ok_or_else(|| SchemaError::UnknownRootName(name.clone()))
            })
            .collect()
    }
}
