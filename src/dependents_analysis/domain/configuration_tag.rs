use crate::shared::Result;

/// NewType wrapper for a configuration name (e.g. `implementation`, `api`)
///
/// Used both as an edge label in the dependency graph and as a set key when
/// excluding configurations. Ordering is lexicographic by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigurationTag(String);

impl ConfigurationTag {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Configuration name cannot be empty");
        }

        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfigurationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
