use super::{ConfigurationTag, ModuleId};

/// A single directed, tagged edge walked during expansion
///
/// `dependent` depends on `dependency` through `tag`. Connections are the
/// unit of cycle detection: a path may revisit a module, but never the same
/// connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub tag: ConfigurationTag,
    pub dependency: ModuleId,
    pub dependent: ModuleId,
}

impl Connection {
    pub fn new(tag: ConfigurationTag, dependency: ModuleId, dependent: ModuleId) -> Self {
        Self {
            tag,
            dependency,
            dependent,
        }
    }
}
