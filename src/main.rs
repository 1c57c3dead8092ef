mod cli;
mod config;

use cli::{Args, DEFAULT_OUTPUT_DIR};
use config::ConfigFile;
use project_dependents::prelude::*;
use project_dependents::shared::error::{DependentsError, ExitCode};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on failure)
    let args = Args::parse_args();

    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?.unwrap_or_default();
    let settings = Settings::merge(&args, &config, &project_path)?;

    let request = DependentsRequest::new(
        project_path,
        args.modules.clone(),
        settings.excluded_configurations,
        settings.max_depth,
    )?;

    let list_use_case =
        ListDependentsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = list_use_case.execute(&request)?;

    let export_use_case = ExportDependentsUseCase::new(StderrProgressReporter::new());
    export_use_case.execute(&response, &settings.formats, &settings.output_dir)?;

    Ok(())
}

/// Effective options after applying CLI flags over the config file
struct Settings {
    formats: Vec<OutputFormat>,
    excluded_configurations: BTreeSet<ConfigurationTag>,
    max_depth: Option<usize>,
    output_dir: PathBuf,
}

impl Settings {
    fn merge(args: &Args, config: &ConfigFile, project_path: &Path) -> Result<Self> {
        let formats = if !args.formats.is_empty() {
            args.formats.clone()
        } else {
            config
                .formats()
                .filter(|formats| !formats.is_empty())
                .unwrap_or_else(|| vec![OutputFormat::Stdout])
        };

        let excluded_names = if !args.exclude_configurations.is_empty() {
            args.exclude_configurations.clone()
        } else {
            config.excluded_configurations.clone().unwrap_or_default()
        };
        let excluded_configurations = excluded_names
            .into_iter()
            .map(ConfigurationTag::new)
            .collect::<Result<BTreeSet<_>>>()?;

        let output_dir = match (&args.output_dir, &config.output_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => project_path.join(dir),
            (None, None) => project_path.join(DEFAULT_OUTPUT_DIR),
        };

        Ok(Self {
            formats,
            excluded_configurations,
            max_depth: args.depth.or(config.max_depth()),
            output_dir,
        })
    }
}

fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(project_path),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DependentsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DependentsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DependentsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DependentsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["project-dependents", "-m", ":core"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_project_path(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_project_path(&file_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[test]
    fn test_settings_defaults() {
        let project = Path::new("/project");
        let settings = Settings::merge(&args(&[]), &ConfigFile::default(), project).unwrap();

        assert_eq!(settings.formats, vec![OutputFormat::Stdout]);
        assert!(settings.excluded_configurations.is_empty());
        assert_eq!(settings.max_depth, None);
        assert_eq!(
            settings.output_dir,
            project.join("build").join("projectDependents")
        );
    }

    #[test]
    fn test_settings_from_config_file() {
        let config = ConfigFile {
            excluded_configurations: Some(vec!["testImplementation".to_string()]),
            output_formats: Some(vec!["json".to_string()]),
            depth: Some(2),
            output_dir: Some(PathBuf::from("reports")),
            ..ConfigFile::default()
        };
        let project = Path::new("/project");
        let settings = Settings::merge(&args(&[]), &config, project).unwrap();

        assert_eq!(settings.formats, vec![OutputFormat::Json]);
        assert_eq!(settings.excluded_configurations.len(), 1);
        assert_eq!(settings.max_depth, Some(2));
        assert_eq!(settings.output_dir, project.join("reports"));
    }

    #[test]
    fn test_settings_cli_overrides_config_file() {
        let config = ConfigFile {
            excluded_configurations: Some(vec!["testImplementation".to_string()]),
            output_formats: Some(vec!["json".to_string()]),
            depth: Some(2),
            output_dir: Some(PathBuf::from("reports")),
            ..ConfigFile::default()
        };
        let cli = args(&["-f", "mermaid", "-e", "api", "-d", "5", "-o", "/tmp/out"]);
        let settings = Settings::merge(&cli, &config, Path::new("/project")).unwrap();

        assert_eq!(settings.formats, vec![OutputFormat::Mermaid]);
        let excluded: Vec<&str> = settings
            .excluded_configurations
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(excluded, vec!["api"]);
        assert_eq!(settings.max_depth, Some(5));
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_settings_rejects_blank_exclusion() {
        let result = Settings::merge(&args(&["-e", " "]), &ConfigFile::default(), Path::new("."));
        assert!(result.is_err());
    }
}
