use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Rooted, acyclic projection of the dependency graph for one query
///
/// Exclusion, depth and cycle policies have already been applied, so every
/// renderer can walk it naively. Maps and lists are kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentsTree {
    pub name: String,
    #[serde(default)]
    pub dependents: BTreeMap<String, Vec<DependentsTree>>,
}

/// Edge recovered from a tree: `dependent` uses `dependency` via `configuration`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeConnection {
    pub dependent: String,
    pub configuration: String,
    pub dependency: String,
}

impl DependentsTree {
    /// Creates a leaf node
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependents: BTreeMap::new(),
        }
    }

    pub fn new(name: impl Into<String>, dependents: BTreeMap<String, Vec<DependentsTree>>) -> Self {
        Self {
            name: name.into(),
            dependents,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        1 + self
            .dependents
            .values()
            .flatten()
            .map(DependentsTree::node_count)
            .sum::<usize>()
    }

    /// Longest root-to-node path, in edges
    pub fn depth(&self) -> usize {
        self.dependents
            .values()
            .flatten()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Distinct edges of the tree in first-seen pre-order
    pub fn connections(&self) -> Vec<TreeConnection> {
        let mut seen = HashSet::new();
        let mut connections = Vec::new();
        self.collect_connections(&mut seen, &mut connections);
        connections
    }

    fn collect_connections(
        &self,
        seen: &mut HashSet<TreeConnection>,
        connections: &mut Vec<TreeConnection>,
    ) {
        for (configuration, dependents) in &self.dependents {
            for dependent in dependents {
                let connection = TreeConnection {
                    dependent: dependent.name.clone(),
                    configuration: configuration.clone(),
                    dependency: self.name.clone(),
                };
                if seen.insert(connection.clone()) {
                    connections.push(connection);
                }
                dependent.collect_connections(seen, connections);
            }
        }
    }
}
