use crate::dependents_analysis::domain::{
    ConfigurationDeclaration, ConfigurationTag, ModuleDeclaration, ModuleId,
};
use crate::ports::outbound::ProjectModelReader;
use crate::shared::error::DependentsError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File name of the project model inside the project directory
pub const PROJECT_MODEL_FILENAME: &str = "project-dependents.toml";

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// On-disk schema of the project model
#[derive(Debug, Deserialize)]
struct ProjectModelFile {
    #[serde(default, rename = "module")]
    modules: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
struct ModuleEntry {
    id: String,
    #[serde(default)]
    configurations: BTreeMap<String, Vec<String>>,
}

/// FileSystemReader adapter for reading the project model from the file system
///
/// The model is a TOML file with one `[[module]]` table per module:
///
/// ```toml
/// [[module]]
/// id = "example:app"
///
/// [module.configurations]
/// implementation = ["example:core", "com.google.guava:guava"]
/// ```
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            return Err(DependentsError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("{} is a symbolic link", file_type),
                hint: "For security reasons, symbolic links are not allowed. Point to the real file instead.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            DependentsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_project_model(content: &str) -> Result<Vec<ModuleDeclaration>> {
        let model: ProjectModelFile =
            toml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid TOML: {}", e))?;

        model
            .modules
            .into_iter()
            .map(|entry| {
                let id = ModuleId::new(entry.id)?;
                let configurations = entry
                    .configurations
                    .into_iter()
                    .map(|(name, dependencies)| {
                        Ok(ConfigurationDeclaration::new(
                            ConfigurationTag::new(name)?,
                            dependencies,
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ModuleDeclaration::new(id, configurations))
            })
            .collect()
    }
}

impl ProjectModelReader for FileSystemReader {
    fn read_project_model(&self, project_path: &Path) -> Result<Vec<ModuleDeclaration>> {
        let model_path = project_path.join(PROJECT_MODEL_FILENAME);

        if !model_path.exists() {
            return Err(DependentsError::ProjectModelNotFound {
                path: model_path,
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Export the module graph of your build first, or specify the correct path with the --path option.",
                    PROJECT_MODEL_FILENAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(&model_path, PROJECT_MODEL_FILENAME)?;

        Self::parse_project_model(&content).map_err(|e| {
            DependentsError::ProjectModelParseError {
                path: model_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
