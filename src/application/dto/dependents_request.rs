use crate::dependents_analysis::domain::ConfigurationTag;
use crate::shared::error::DependentsError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// DependentsRequest - Internal request DTO for the dependents use case
#[derive(Debug, Clone)]
pub struct DependentsRequest {
    /// Path to the project directory containing the project model
    pub project_path: PathBuf,
    /// Modules to query, in the order given by the user
    pub modules: Vec<String>,
    /// Configuration tags that are never traversed or displayed
    pub excluded_configurations: BTreeSet<ConfigurationTag>,
    /// Maximum traversal depth; `None` is unbounded
    pub max_depth: Option<usize>,
}

impl DependentsRequest {
    /// Creates a validated request.
    ///
    /// Fails when no module is given, a module name is blank,
    /// or the depth is zero.
    pub fn new(
        project_path: PathBuf,
        modules: Vec<String>,
        excluded_configurations: BTreeSet<ConfigurationTag>,
        max_depth: Option<usize>,
    ) -> Result<Self> {
        if modules.is_empty() {
            return Err(DependentsError::Validation {
                message: "At least one module must be specified".to_string(),
            }
            .into());
        }

        if modules.iter().any(|m| m.trim().is_empty()) {
            return Err(DependentsError::Validation {
                message: "Module name cannot be empty".to_string(),
            }
            .into());
        }

        if max_depth == Some(0) {
            return Err(DependentsError::Validation {
                message: "Depth must be a positive integer".to_string(),
            }
            .into());
        }

        Ok(Self {
            project_path,
            modules,
            excluded_configurations,
            max_depth,
        })
    }
}
