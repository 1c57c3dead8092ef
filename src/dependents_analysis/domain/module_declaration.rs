use super::{ConfigurationTag, ModuleId};

/// One configuration of a module and the targets it directly declares
///
/// Targets are kept as raw strings: they may name other modules of the
/// project or external coordinates, which graph construction drops.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDeclaration {
    pub tag: ConfigurationTag,
    pub dependencies: Vec<String>,
}

impl ConfigurationDeclaration {
    pub fn new(tag: ConfigurationTag, dependencies: Vec<String>) -> Self {
        Self { tag, dependencies }
    }
}

/// Forward dependency declarations of a single module, as read from the host project model
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDeclaration {
    pub id: ModuleId,
    pub configurations: Vec<ConfigurationDeclaration>,
}

impl ModuleDeclaration {
    pub fn new(id: ModuleId, configurations: Vec<ConfigurationDeclaration>) -> Self {
        Self { id, configurations }
    }
}
