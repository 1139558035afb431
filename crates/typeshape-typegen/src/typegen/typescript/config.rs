//! Configuration types for TypeScript emission.

/// Configuration for TypeScript emission.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Wrap every declaration in `declare namespace <name> { ... }`
    pub(crate) namespace: Option<String>,
    /// Referenced types are expanded only when their package path starts with this
    pub(crate) package_prefix: String,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enclosing namespace. An empty name means no namespace.
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.namespace = (!name.is_empty()).then_some(name);
        self
    }

    /// Set the package path prefix used by the origin filter.
    pub fn package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = prefix.into();
        self
    }

    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> &str {
        &self.package_prefix
    }
}
