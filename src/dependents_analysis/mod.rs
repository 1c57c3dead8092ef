/// Dependents analysis - pure domain logic
///
/// Builds the reverse dependency graph from module declarations and expands
/// it into a dependents tree. Nothing in here performs I/O.
pub mod domain;
pub mod services;
