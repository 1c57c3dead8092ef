pub mod configuration_tag;
pub mod connection;
pub mod dependency_graph;
pub mod dependents_tree;
pub mod module_declaration;
pub mod module_id;

pub use configuration_tag::ConfigurationTag;
pub use connection::Connection;
pub use dependency_graph::{DependencyGraph, ProjectDependents};
pub use dependents_tree::{DependentsTree, TreeConnection};
pub use module_declaration::{ConfigurationDeclaration, ModuleDeclaration};
pub use module_id::ModuleId;
