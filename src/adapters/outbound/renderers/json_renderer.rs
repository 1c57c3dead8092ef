use crate::dependents_analysis::domain::DependentsTree;
use crate::ports::outbound::DependentsRenderer;
use crate::shared::Result;
use anyhow::Context;

/// JsonRenderer adapter writing the dependents tree as pretty-printed JSON
///
/// The `dependents` object is always present, empty for leaves.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsRenderer for JsonRenderer {
    fn render(&self, tree: &DependentsTree) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(tree).context("Failed to serialize dependents graph to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
