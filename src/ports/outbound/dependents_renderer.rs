use crate::dependents_analysis::domain::DependentsTree;
use crate::shared::Result;

/// DependentsRenderer port for turning a dependents tree into an output representation
///
/// Renderers receive a tree that is already filtered, depth-limited and
/// acyclic. They never look at the dependency graph.
pub trait DependentsRenderer {
    /// Renders the dependents tree
    ///
    /// # Arguments
    /// * `tree` - The dependents tree of the queried module
    ///
    /// # Returns
    /// Rendered content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, tree: &DependentsTree) -> Result<String>;
}
