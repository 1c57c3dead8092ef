use project_dependents::prelude::*;
use std::path::Path;

/// Mock ProjectModelReader serving in-memory module declarations
pub struct MockProjectModelReader {
    pub declarations: Vec<ModuleDeclaration>,
    pub should_fail: bool,
}

impl MockProjectModelReader {
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            declarations: Vec::new(),
            should_fail: true,
        }
    }

    /// Adds a module declaring `(configuration, targets)` pairs
    pub fn with_module(mut self, id: &str, configurations: &[(&str, &[&str])]) -> Self {
        let configurations = configurations
            .iter()
            .map(|(tag, targets)| {
                ConfigurationDeclaration::new(
                    ConfigurationTag::new(tag.to_string()).unwrap(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        self.declarations.push(ModuleDeclaration::new(
            ModuleId::new(id.to_string()).unwrap(),
            configurations,
        ));
        self
    }
}

impl ProjectModelReader for MockProjectModelReader {
    fn read_project_model(&self, _project_path: &Path) -> Result<Vec<ModuleDeclaration>> {
        if self.should_fail {
            anyhow::bail!("Mock project model read failure");
        }
        Ok(self.declarations.clone())
    }
}
