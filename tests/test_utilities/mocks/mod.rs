/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_project_model_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_model_reader::MockProjectModelReader;
