use crate::dependents_analysis::domain::DependentsTree;
use crate::ports::outbound::DependentsRenderer;
use crate::shared::Result;

/// Indentation guide repeated once per level
const LEVEL_GUIDE: &str = "|    ";

/// Branch glyph for the last sibling of a configuration group
const LAST_BRANCH: &str = "\\";

/// Branch glyph for every other line
const BRANCH: &str = "+";

/// TreeTextRenderer adapter for the console tree
///
/// Prints one line per node in pre-order:
///
/// ```text
/// +--- example:core
/// |    +--- example:app (implementation)
/// |    \--- example:web (implementation)
/// ```
pub struct TreeTextRenderer;

impl TreeTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_node(
        output: &mut String,
        node: &DependentsTree,
        level: usize,
        last: bool,
        configuration: Option<&str>,
    ) {
        output.push_str(&LEVEL_GUIDE.repeat(level));
        output.push_str(if last { LAST_BRANCH } else { BRANCH });
        output.push_str("--- ");
        output.push_str(&node.name);
        if let Some(configuration) = configuration {
            output.push_str(&format!(" ({})", configuration));
        }
        output.push('\n');

        for (configuration, dependents) in &node.dependents {
            for (index, dependent) in dependents.iter().enumerate() {
                Self::render_node(
                    output,
                    dependent,
                    level + 1,
                    index == dependents.len() - 1,
                    Some(configuration),
                );
            }
        }
    }
}

impl Default for TreeTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsRenderer for TreeTextRenderer {
    fn render(&self, tree: &DependentsTree) -> Result<String> {
        let mut output = String::new();
        Self::render_node(&mut output, tree, 0, false, None);
        Ok(output)
    }
}
