use crate::application::dto::{DependentsRequest, DependentsResponse, ModuleDependents};
use crate::dependents_analysis::domain::DependencyGraph;
use crate::dependents_analysis::services::{DependencyGraphBuilder, ReachabilityExpander};
use crate::ports::outbound::{ProgressReporter, ProjectModelReader};
use crate::shared::Result;

/// ListDependentsUseCase - Core use case computing dependents trees
///
/// Reads the project model once, builds the reverse dependency graph and
/// expands one tree per requested module.
///
/// # Type Parameters
/// * `R` - ProjectModelReader implementation
/// * `P` - ProgressReporter implementation
pub struct ListDependentsUseCase<R, P> {
    project_model_reader: R,
    progress_reporter: P,
}

impl<R, P> ListDependentsUseCase<R, P>
where
    R: ProjectModelReader,
    P: ProgressReporter,
{
    /// Creates a new ListDependentsUseCase with injected dependencies
    pub fn new(project_model_reader: R, progress_reporter: P) -> Self {
        Self {
            project_model_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Unknown modules are reported as warnings and yield no tree; only
    /// failures to read the project model are errors.
    pub fn execute(&self, request: &DependentsRequest) -> Result<DependentsResponse> {
        let graph = self.load_graph(request)?;

        let total = request.modules.len();
        let mut modules = Vec::with_capacity(total);
        for (index, module) in request.modules.iter().enumerate() {
            if total > 1 {
                self.progress_reporter
                    .report_progress(index + 1, total, Some(module));
            }
            modules.push(self.expand_module(&graph, module, request));
        }

        Ok(DependentsResponse::new(
            modules,
            graph.module_count(),
            graph.edge_count(),
        ))
    }

    fn load_graph(&self, request: &DependentsRequest) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading project model from: {}",
            request.project_path.display()
        ));

        let declarations = self
            .project_model_reader
            .read_project_model(&request.project_path)?;

        let graph = DependencyGraphBuilder::build(&declarations);
        self.progress_reporter.report(&format!(
            "✅ Detected {} module(s) with {} dependent edge(s)",
            graph.module_count(),
            graph.edge_count()
        ));

        Ok(graph)
    }

    fn expand_module(
        &self,
        graph: &DependencyGraph,
        module: &str,
        request: &DependentsRequest,
    ) -> ModuleDependents {
        let tree = ReachabilityExpander::expand(
            graph,
            module,
            &request.excluded_configurations,
            request.max_depth,
        );

        if tree.is_none() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Module '{}' is not part of the project, nothing to show",
                module
            ));
        }

        ModuleDependents::new(module.to_string(), tree)
    }
}
