/// Renderer adapters for the supported output formats
mod json_renderer;
mod mermaid_renderer;
mod tree_text_renderer;
mod yaml_renderer;

pub use json_renderer::JsonRenderer;
pub use mermaid_renderer::MermaidRenderer;
pub use tree_text_renderer::TreeTextRenderer;
pub use yaml_renderer::YamlRenderer;
