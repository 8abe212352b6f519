use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Service name used when none is given on the command line.
pub const DEFAULT_SERVICE: &str = "ms-sql-s";

/// Extension of the scan documents picked up under the root directory.
pub const DEFAULT_EXTENSION: &str = "xml";

/// Output flavour of the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

pub struct Config {
    /// Exact, case-sensitive service name to report on.
    pub service: String,

    /// Absolute root directory that is searched for scan documents.
    pub nmap_dir: PathBuf,

    /// File extension without the leading dot.
    pub extension: String,

    pub format: ReportFormat,

    /// `0` prints everything, `1` hides decoration, `2` also hides the row tree.
    pub quiet: u8,
}

impl Config {
    pub fn new(service: impl Into<String>, nmap_dir: PathBuf) -> Self {
        Self {
            service: service.into(),
            nmap_dir,
            extension: DEFAULT_EXTENSION.to_string(),
            format: ReportFormat::default(),
            quiet: 0,
        }
    }

    /// Strips a leading dot so both `xml` and `.xml` are accepted.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Report file name, relative to the current working directory.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.service, self.format.extension()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
