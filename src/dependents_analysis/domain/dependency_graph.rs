use super::{ConfigurationTag, ModuleId};
use std::collections::BTreeMap;

/// Graph node: a module and the modules that depend on it, per configuration
///
/// Dependents are stored by identity and resolved through the owning
/// [`DependencyGraph`], so every module has exactly one node and cycles need
/// no special representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDependents {
    name: ModuleId,
    dependents: BTreeMap<ConfigurationTag, Vec<ModuleId>>,
}

impl ProjectDependents {
    /// Creates a node. Each dependents list is expected to be sorted and free of duplicates.
    pub fn new(name: ModuleId, dependents: BTreeMap<ConfigurationTag, Vec<ModuleId>>) -> Self {
        Self { name, dependents }
    }

    pub fn name(&self) -> &ModuleId {
        &self.name
    }

    pub fn dependents(&self) -> &BTreeMap<ConfigurationTag, Vec<ModuleId>> {
        &self.dependents
    }

    pub fn dependents_for(&self, tag: &ConfigurationTag) -> &[ModuleId] {
        self.dependents.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// DependencyGraph aggregate: the reverse adjacency over all known modules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    nodes: BTreeMap<ModuleId, ProjectDependents>,
}

impl DependencyGraph {
    pub fn new(nodes: BTreeMap<ModuleId, ProjectDependents>) -> Self {
        Self { nodes }
    }

    pub fn get(&self, id: &str) -> Option<&ProjectDependents> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn module_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of (dependency, tag, dependent) edges
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .flat_map(|node| node.dependents.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ModuleId {
        ModuleId::new(name.to_string()).unwrap()
    }

    fn tag(name: &str) -> ConfigurationTag {
        ConfigurationTag::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_dependency_graph_new() {
        let mut core_dependents = BTreeMap::new();
        core_dependents.insert(tag("implementation"), vec![id("app"), id("web")]);
        core_dependents.insert(tag("api"), vec![id("service")]);

        let mut nodes = BTreeMap::new();
        nodes.insert(id("core"), ProjectDependents::new(id("core"), core_dependents));
        nodes.insert(id("app"), ProjectDependents::new(id("app"), BTreeMap::new()));

        let graph = DependencyGraph::new(nodes);

        assert_eq!(graph.module_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains("core"));
        assert!(!graph.contains("web"));

        let core = graph.get("core").unwrap();
        assert_eq!(core.name().as_str(), "core");
        assert_eq!(core.dependents_for(&tag("implementation")), &[id("app"), id("web")]);
        assert!(core.dependents_for(&tag("testImplementation")).is_empty());
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::default();

        assert_eq!(graph.module_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get("core").is_none());
    }

    #[test]
    fn test_nodes_iterate_in_identity_order() {
        let mut nodes = BTreeMap::new();
        for name in ["web", "app", "core"] {
            nodes.insert(id(name), ProjectDependents::new(id(name), BTreeMap::new()));
        }
        let graph = DependencyGraph::new(nodes);

        let names: Vec<&str> = graph.nodes.values().map(|n| n.name().as_str()).collect();
        assert_eq!(names, vec!["app", "core", "web"]);
    }
}
