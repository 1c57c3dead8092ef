use crate::dependents_analysis::domain::DependentsTree;

/// Dependents of a single queried module
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDependents {
    /// Module name as requested
    pub module: String,
    /// Expanded tree; `None` when the module is not part of the project
    pub tree: Option<DependentsTree>,
}

impl ModuleDependents {
    pub fn new(module: String, tree: Option<DependentsTree>) -> Self {
        Self { module, tree }
    }
}

/// DependentsResponse - Internal response DTO from the dependents use case
#[derive(Debug, Clone, PartialEq)]
pub struct DependentsResponse {
    /// One entry per requested module, in request order
    pub modules: Vec<ModuleDependents>,
    /// Number of modules in the project model
    pub module_count: usize,
    /// Number of reverse edges in the dependency graph
    pub edge_count: usize,
}

impl DependentsResponse {
    pub fn new(modules: Vec<ModuleDependents>, module_count: usize, edge_count: usize) -> Self {
        Self {
            modules,
            module_count,
            edge_count,
        }
    }

    /// Trees of the modules that were found in the project
    pub fn trees(&self) -> impl Iterator<Item = (&str, &DependentsTree)> {
        self.modules
            .iter()
            .filter_map(|m| m.tree.as_ref().map(|tree| (m.module.as_str(), tree)))
    }
}
