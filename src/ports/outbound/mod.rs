/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (host project model, file system, console).
pub mod dependents_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_model_reader;

pub use dependents_renderer::DependentsRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_model_reader::ProjectModelReader;
