use crate::dependents_analysis::domain::{
    ConfigurationTag, Connection, DependencyGraph, DependentsTree, ProjectDependents,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// ReachabilityExpander service projecting the dependency graph into a dependents tree
///
/// Cycles are broken per connection, not per module: a module may appear on
/// several branches (diamonds are shown in full), but a path never walks the
/// same tagged edge twice.
pub struct ReachabilityExpander<'g> {
    graph: &'g DependencyGraph,
    excluded: &'g BTreeSet<ConfigurationTag>,
    max_depth: Option<usize>,
}

impl<'g> ReachabilityExpander<'g> {
    fn new(
        graph: &'g DependencyGraph,
        excluded: &'g BTreeSet<ConfigurationTag>,
        max_depth: Option<usize>,
    ) -> Self {
        Self {
            graph,
            excluded,
            max_depth,
        }
    }

    /// Expands every reachable dependent of `root`
    ///
    /// # Arguments
    /// * `graph` - The dependency graph to traverse
    /// * `root` - Identity of the queried module
    /// * `excluded` - Configurations that are neither traversed nor shown
    /// * `max_depth` - Maximum number of edges from the root; `None` for unbounded
    ///
    /// # Returns
    /// The dependents tree, or None if `root` is not a module of the graph
    pub fn expand(
        graph: &DependencyGraph,
        root: &str,
        excluded: &BTreeSet<ConfigurationTag>,
        max_depth: Option<usize>,
    ) -> Option<DependentsTree> {
        let node = graph.get(root)?;
        let expander = ReachabilityExpander::new(graph, excluded, max_depth);
        Some(expander.expand_node(node, 0, &HashSet::new()))
    }

    fn expand_node(
        &self,
        node: &ProjectDependents,
        depth: usize,
        visited: &HashSet<Connection>,
    ) -> DependentsTree {
        if self.max_depth.is_some_and(|max| depth >= max) {
            return DependentsTree::leaf(node.name().as_str());
        }

        let mut dependents = BTreeMap::new();

        for (tag, tag_dependents) in node.dependents() {
            if self.excluded.contains(tag) {
                continue;
            }

            let mut subtrees = Vec::with_capacity(tag_dependents.len());
            for dependent_id in tag_dependents {
                let connection = Connection::new(tag.clone(), node.name().clone(), dependent_id.clone());
                if visited.contains(&connection) {
                    continue;
                }

                let Some(dependent) = self.graph.get(dependent_id.as_str()) else {
                    continue;
                };

                let mut path = visited.clone();
                path.insert(connection);
                subtrees.push(self.expand_node(dependent, depth + 1, &path));
            }

            if !subtrees.is_empty() {
                dependents.insert(tag.name().to_string(), subtrees);
            }
        }

        DependentsTree::new(node.name().as_str(), dependents)
    }
}
