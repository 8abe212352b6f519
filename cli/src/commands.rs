pub mod report;

use clap::{ArgAction, Parser};
use svcmap_common::config::{Config, DEFAULT_EXTENSION, DEFAULT_SERVICE, ReportFormat};
use svcmap_common::error::ConfigError;
use svcmap_common::utils::path;

#[derive(Parser)]
#[command(name = "svcmap")]
#[command(version)]
#[command(about = "Groups hosts found in nmap XML scans by detected service version.")]
pub struct CommandLine {
    /// The service name to filter by (exact, case-sensitive)
    #[arg(short, long, default_value = DEFAULT_SERVICE)]
    pub service: String,

    /// The directory containing nmap XML files, searched recursively
    #[arg(short = 'd', long = "nmap-dir")]
    pub nmap_dir: Option<String>,

    /// Extension of the scan files to read
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Report format: html or csv
    #[arg(short, long, default_value = "html")]
    pub format: ReportFormat,

    /// Less output; repeat to also hide the result tree
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output; repeat for trace level (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the root directory and builds the run configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let nmap_dir: String = self.nmap_dir.ok_or(ConfigError::MissingRootDir)?;
        let nmap_dir = path::resolve_abs_path(&nmap_dir)?;

        let mut cfg = Config::new(self.service, nmap_dir)
            .with_extension(&self.extension)
            .with_format(self.format);
        cfg.quiet = self.quiet;

        Ok(cfg)
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
