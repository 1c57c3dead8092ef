use crate::shared::Result;
use std::borrow::Borrow;

/// Maximum length for module identities (security limit)
const MAX_MODULE_ID_LENGTH: usize = 255;

/// NewType wrapper for a module identity
///
/// The identity is opaque: hierarchical names such as `example:app` are
/// allowed but carry no meaning for the analysis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: String) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Module identity cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_MODULE_ID_LENGTH {
            anyhow::bail!(
                "Module identity is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_MODULE_ID_LENGTH
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
