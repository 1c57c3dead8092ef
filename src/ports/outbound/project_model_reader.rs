use crate::dependents_analysis::domain::ModuleDeclaration;
use crate::shared::Result;
use std::path::Path;

/// ProjectModelReader port for reading the host project's module declarations
///
/// The snapshot lists every known module and, per configuration, the targets
/// it directly declares.
pub trait ProjectModelReader {
    /// Reads all module declarations of the project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// One declaration per module, in file order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project model does not exist
    /// - The project model cannot be read or parsed
    /// - A module identity or configuration name is invalid
    fn read_project_model(&self, project_path: &Path) -> Result<Vec<ModuleDeclaration>>;
}
