//! project-dependents - reverse dependency analysis for multi-module projects
//!
//! This library answers "which modules break if I change this one?" by
//! inverting the declared module dependencies of a project and expanding the
//! transitive dependents of a module into a tree, rendered as console text,
//! YAML, JSON or a Mermaid flowchart.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependents_analysis`): Graph model and traversal services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use project_dependents::prelude::*;
//! use std::collections::BTreeSet;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let use_case =
//!     ListDependentsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = DependentsRequest::new(
//!     PathBuf::from("."),
//!     vec![":core".to_string()],
//!     BTreeSet::new(),
//!     None,
//! )?;
//! let response = use_case.execute(&request)?;
//!
//! let export = ExportDependentsUseCase::new(StderrProgressReporter::new());
//! export.execute(
//!     &response,
//!     &[OutputFormat::Stdout, OutputFormat::Mermaid],
//!     Path::new("build/projectDependents"),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependents_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::renderers::{
        JsonRenderer, MermaidRenderer, TreeTextRenderer, YamlRenderer,
    };
    pub use crate::application::dto::{
        DependentsRequest, DependentsResponse, ModuleDependents, OutputFormat,
    };
    pub use crate::application::use_cases::{ExportDependentsUseCase, ListDependentsUseCase};
    pub use crate::dependents_analysis::domain::{
        ConfigurationDeclaration, ConfigurationTag, DependencyGraph, DependentsTree,
        ModuleDeclaration, ModuleId, TreeConnection,
    };
    pub use crate::dependents_analysis::services::{DependencyGraphBuilder, ReachabilityExpander};
    pub use crate::ports::outbound::{
        DependentsRenderer, OutputPresenter, ProgressReporter, ProjectModelReader,
    };
    pub use crate::shared::Result;
}
