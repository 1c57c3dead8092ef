use clap::Parser;
use std::path::PathBuf;

use project_dependents::application::dto::OutputFormat;

/// Default output directory, relative to the project directory
pub const DEFAULT_OUTPUT_DIR: &str = "build/projectDependents";

/// List every module that depends on a given module of a multi-module project
#[derive(Parser, Debug)]
#[command(name = "project-dependents")]
#[command(version)]
#[command(
    about = "List every module that directly or transitively depends on a given module",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Module to list dependents for.
    /// Can be specified multiple times: -m :core -m :api
    #[arg(short, long = "module", value_name = "MODULE", required = true)]
    pub modules: Vec<String>,

    /// Output formats: stdout, yaml, json, mermaid (comma-separated or repeated).
    /// Defaults to stdout
    #[arg(short, long = "format", value_name = "FORMAT", value_delimiter = ',')]
    pub formats: Vec<OutputFormat>,

    /// Configuration to ignore while traversing.
    /// Can be specified multiple times: -e testImplementation -e testFixturesApi
    #[arg(short, long = "exclude-configuration", value_name = "CONFIGURATION")]
    pub exclude_configurations: Vec<String>,

    /// Maximum traversal depth, at least 1 (unbounded if not specified)
    #[arg(
        short,
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub depth: Option<usize>,

    /// Directory for graph files (defaults to <path>/build/projectDependents)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to project-dependents.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["project-dependents", "-m", ":core"]).unwrap();

        assert_eq!(args.modules, vec![":core".to_string()]);
        assert!(args.path.is_none());
        assert!(args.formats.is_empty());
        assert!(args.exclude_configurations.is_empty());
        assert!(args.depth.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_module_is_required() {
        let result = Args::try_parse_from(["project-dependents"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_repeated_modules() {
        let args =
            Args::try_parse_from(["project-dependents", "-m", ":core", "--module", ":api"]).unwrap();
        assert_eq!(args.modules, vec![":core".to_string(), ":api".to_string()]);
    }

    #[test]
    fn test_parse_comma_separated_formats() {
        let args = Args::try_parse_from([
            "project-dependents",
            "-m",
            ":core",
            "-f",
            "yaml,JSON",
            "--format",
            "md",
        ])
        .unwrap();

        assert_eq!(
            args.formats,
            vec![OutputFormat::Yaml, OutputFormat::Json, OutputFormat::Mermaid]
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = Args::try_parse_from(["project-dependents", "-m", ":core", "-f", "graphviz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_exclusions_and_depth() {
        let args = Args::try_parse_from([
            "project-dependents",
            "-m",
            ":core",
            "-e",
            "testImplementation",
            "--exclude-configuration",
            "testFixturesApi",
            "-d",
            "2",
        ])
        .unwrap();

        assert_eq!(
            args.exclude_configurations,
            vec!["testImplementation".to_string(), "testFixturesApi".to_string()]
        );
        assert_eq!(args.depth, Some(2));
    }

    #[test]
    fn test_parse_negative_depth_rejected() {
        let result = Args::try_parse_from(["project-dependents", "-m", ":core", "-d", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_zero_depth_rejected() {
        let err = Args::try_parse_from(["project-dependents", "-m", ":core", "-d", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_depth_one_accepted() {
        let args = Args::try_parse_from(["project-dependents", "-m", ":core", "-d", "1"]).unwrap();
        assert_eq!(args.depth, Some(1));
    }
}
