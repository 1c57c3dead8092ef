use crate::application::dto::{DependentsResponse, OutputFormat};
use crate::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use crate::dependents_analysis::domain::DependentsTree;
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::DependentsError;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};
use std::path::{Component, Path, PathBuf};

/// ExportDependentsUseCase - Renders computed trees in every requested format
///
/// The console tree is always printed before any file is written. Files land
/// in `<output_dir>/<module dir>/graph.{yaml,json,md}` and have their
/// modification time pinned by the file presenter.
pub struct ExportDependentsUseCase<P> {
    progress_reporter: P,
}

impl<P: ProgressReporter> ExportDependentsUseCase<P> {
    pub fn new(progress_reporter: P) -> Self {
        Self { progress_reporter }
    }

    /// Renders each tree of `response` in each of `formats`
    ///
    /// Duplicate formats are rendered once. Modules without a tree are skipped.
    /// Fails before anything is written when two modules would share a directory.
    ///
    /// # Returns
    /// The paths of all written files, in write order
    pub fn execute(
        &self,
        response: &DependentsResponse,
        formats: &[OutputFormat],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let formats: BTreeSet<OutputFormat> = formats.iter().copied().collect();
        if formats.iter().any(|format| format.file_name().is_some()) {
            Self::check_module_directories(response, output_dir)?;
        }

        let mut written = Vec::new();

        for (module, tree) in response.trees() {
            for &format in &formats {
                if let Some(path) = self.export(module, tree, format, output_dir)? {
                    written.push(path);
                }
            }
        }

        Ok(written)
    }

    fn export(
        &self,
        module: &str,
        tree: &DependentsTree,
        format: OutputFormat,
        output_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let content = RendererFactory::create(format).render(tree)?;

        let Some(file_name) = format.file_name() else {
            PresenterFactory::create(PresenterType::Stdout).present(&content)?;
            return Ok(None);
        };

        self.progress_reporter
            .report(RendererFactory::progress_message(format));

        let path = output_dir.join(Self::module_directory(module)).join(file_name);
        PresenterFactory::create(PresenterType::File(path.clone())).present(&content)?;

        let absolute = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
        self.progress_reporter.report_completion(&format!(
            "{} Graph written to {}",
            format.label(),
            absolute.display()
        ));

        Ok(Some(path))
    }

    fn check_module_directories(response: &DependentsResponse, output_dir: &Path) -> Result<()> {
        let mut owners: HashMap<PathBuf, &str> = HashMap::new();
        for (module, _) in response.trees() {
            let directory = Self::module_directory(module);
            match owners.get(&directory) {
                Some(&owner) if owner != module => {
                    return Err(DependentsError::Validation {
                        message: format!(
                            "Modules '{}' and '{}' would both be written to {}",
                            owner,
                            module,
                            output_dir.join(&directory).display()
                        ),
                    }
                    .into());
                }
                Some(_) => {}
                None => {
                    owners.insert(directory, module);
                }
            }
        }
        Ok(())
    }

    /// Maps a module path such as `:app:web` to the relative directory `app/web`
    ///
    /// Segments that would escape the output directory (`..`, `.`) are dropped.
    fn module_directory(module: &str) -> PathBuf {
        module
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(Path::new)
            .filter(|segment| {
                segment
                    .components()
                    .all(|c| matches!(c, Component::Normal(_)))
            })
            .collect()
    }
}
