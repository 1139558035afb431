pub mod check;
pub mod schema_loader;
pub mod types;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod test_schema;
#[cfg(test)]
mod types_tests;
