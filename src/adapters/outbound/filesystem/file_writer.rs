use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DependentsError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::SystemTime;

/// FileSystemWriter adapter for writing rendered graphs to files
///
/// Missing parent directories are created. After writing, the file's
/// modification time is pinned to the Unix epoch so identical content
/// produces identical files across runs.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> DependentsError {
        DependentsError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// Creates the parent directory chain when it does not exist yet
    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    self.write_error(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Rejects writing through a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self
                    .write_error("Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.")
                    .into());
            }
        }
        Ok(())
    }

    fn pin_modification_time(&self) -> Result<()> {
        let file = fs::File::options()
            .write(true)
            .open(&self.output_path)
            .map_err(|e| self.write_error(e.to_string()))?;
        file.set_modified(SystemTime::UNIX_EPOCH).map_err(|e| {
            self.write_error(format!("Failed to set modification time: {}", e))
        })?;
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.ensure_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        self.pin_modification_time()
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
