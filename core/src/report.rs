//! # Report Rendering
//!
//! Renders aggregated rows into the report file. The whole document is built
//! in memory first; the file is only created once rendering succeeded, so a
//! failed run never leaves a half-written report behind.

use std::path::{Path, PathBuf};

use svcmap_common::config::{Config, ReportFormat};
use svcmap_common::models::TableRow;
use thiserror::Error;
use tracing::debug;

mod csv;
mod html;

pub use self::csv::generate_csv;
pub use self::html::generate_html;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("error creating output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error rendering csv: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("error flushing csv output: {0}")]
    CsvBuffer(String),
}

/// Renders `rows` for `service` in the requested format.
pub fn render(rows: &[TableRow], service: &str, format: ReportFormat) -> Result<Vec<u8>, ReportError> {
    match format {
        ReportFormat::Html => Ok(generate_html(rows, service).into_bytes()),
        ReportFormat::Csv => generate_csv(rows),
    }
}

/// Writes the report for `rows` to [`Config::output_path`], replacing any
/// existing file, and returns the path written.
pub fn write_report(rows: &[TableRow], cfg: &Config) -> Result<PathBuf, ReportError> {
    let path: PathBuf = cfg.output_path();
    let content: Vec<u8> = render(rows, &cfg.service, cfg.format)?;
    write_file(&path, &content)?;
    Ok(path)
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), ReportError> {
    std::fs::write(path, content).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
