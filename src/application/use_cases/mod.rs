/// Use cases module containing application business logic orchestration
mod export_dependents;
mod list_dependents;

pub use export_dependents::ExportDependentsUseCase;
pub use list_dependents::ListDependentsUseCase;
