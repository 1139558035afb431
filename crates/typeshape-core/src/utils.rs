/// Whether a field or method name is visible outside its package.
///
/// # Examples
/// ```
/// use typeshape_core::utils::is_exported;
/// assert!(is_exported("Name"));
/// assert!(!is_exported("name"));
/// assert!(!is_exported(""));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Last `/`-separated segment of a package path.
///
/// # Examples
/// ```
/// use typeshape_core::utils::last_segment;
/// assert_eq!(last_segment("example.com/app/models"), "models");
/// assert_eq!(last_segment("models"), "models");
/// ```
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
