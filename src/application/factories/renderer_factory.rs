use crate::adapters::outbound::renderers::{
    JsonRenderer, MermaidRenderer, TreeTextRenderer, YamlRenderer,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DependentsRenderer;

/// Factory for creating dependents renderers
///
/// This factory encapsulates the creation logic for the renderer implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use project_dependents::application::dto::OutputFormat;
    /// use project_dependents::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Mermaid);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DependentsRenderer> {
        match format {
            OutputFormat::Stdout => Box::new(TreeTextRenderer::new()),
            OutputFormat::Yaml => Box::new(YamlRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
            OutputFormat::Mermaid => Box::new(MermaidRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use project_dependents::application::dto::OutputFormat;
    /// use project_dependents::application::factories::RendererFactory;
    ///
    /// let message = RendererFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering JSON graph...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Stdout => "📝 Rendering dependents tree...",
            OutputFormat::Yaml => "📝 Rendering YAML graph...",
            OutputFormat::Json => "📝 Rendering JSON graph...",
            OutputFormat::Mermaid => "📝 Rendering Mermaid graph...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependents_analysis::domain::DependentsTree;

    #[test]
    fn test_create_renders_each_format() {
        let tree = DependentsTree::leaf("core");

        let stdout = RendererFactory::create(OutputFormat::Stdout).render(&tree).unwrap();
        assert_eq!(stdout, "+--- core\n");

        let yaml = RendererFactory::create(OutputFormat::Yaml).render(&tree).unwrap();
        assert_eq!(yaml, "name: \"core\"\n");

        let json = RendererFactory::create(OutputFormat::Json).render(&tree).unwrap();
        assert!(json.contains("\"name\": \"core\""));

        let mermaid = RendererFactory::create(OutputFormat::Mermaid).render(&tree).unwrap();
        assert!(mermaid.starts_with("```mermaid\n"));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            RendererFactory::progress_message(OutputFormat::Stdout),
            "📝 Rendering dependents tree..."
        );
        assert_eq!(
            RendererFactory::progress_message(OutputFormat::Mermaid),
            "📝 Rendering Mermaid graph..."
        );
    }
}
