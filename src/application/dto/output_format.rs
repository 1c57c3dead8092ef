/// Output format enumeration for dependents rendering
///
/// The derived ordering puts `Stdout` first, so sorting a format list
/// always prints the console tree before any file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFormat {
    /// Tree text printed to stdout (default)
    Stdout,
    /// `graph.yaml`
    Yaml,
    /// `graph.json`
    Json,
    /// Mermaid flowchart in `graph.md`
    Mermaid,
}

impl OutputFormat {
    /// All formats in rendering order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Stdout,
        OutputFormat::Yaml,
        OutputFormat::Json,
        OutputFormat::Mermaid,
    ];

    /// File name written for this format, `None` for console output
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            OutputFormat::Stdout => None,
            OutputFormat::Yaml => Some("graph.yaml"),
            OutputFormat::Json => Some("graph.json"),
            OutputFormat::Mermaid => Some("graph.md"),
        }
    }

    /// Human-readable label used in completion messages
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Stdout => "Stdout",
            OutputFormat::Yaml => "YAML",
            OutputFormat::Json => "JSON",
            OutputFormat::Mermaid => "Mermaid",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(OutputFormat::Stdout),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            "mermaid" | "md" => Ok(OutputFormat::Mermaid),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'stdout', 'yaml', 'json' or 'mermaid'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Stdout => write!(f, "stdout"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Mermaid => write!(f, "mermaid"),
        }
    }
}
