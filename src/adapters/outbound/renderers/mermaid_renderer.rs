use crate::dependents_analysis::domain::{DependentsTree, TreeConnection};
use crate::ports::outbound::DependentsRenderer;
use crate::shared::Result;

/// MermaidRenderer adapter writing the dependents tree as a Mermaid flowchart
///
/// The tree is flattened into unique edges pointing from dependent to
/// dependency, drawn bottom to top inside a fenced Markdown block.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Mermaid node ids may not contain `:`, `-` or `.`
    fn sanitize_id(name: &str) -> String {
        name.replace([':', '-', '.'], "_")
    }

    /// Escapes text for use inside `["..."]` node labels and `|...|` edge labels
    fn escape_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '"' => escaped.push_str("#quot;"),
                '|' | '\n' | '\r' => escaped.push_str(&format!("#{};", u32::from(c))),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn render_edge(connection: &TreeConnection) -> String {
        format!(
            "{}[\"{}\"] -->|{}| {}[\"{}\"]",
            Self::sanitize_id(&connection.dependent),
            Self::escape_text(&connection.dependent),
            Self::escape_text(&connection.configuration),
            Self::sanitize_id(&connection.dependency),
            Self::escape_text(&connection.dependency)
        )
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsRenderer for MermaidRenderer {
    fn render(&self, tree: &DependentsTree) -> Result<String> {
        let mut output = String::new();
        output.push_str("```mermaid\n");
        output.push_str("flowchart BT\n");
        for connection in tree.connections() {
            output.push_str(&format!("    {}\n", Self::render_edge(&connection)));
        }
        output.push_str("```\n");
        Ok(output)
    }
}
