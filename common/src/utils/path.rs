//! Turns the user supplied root directory into an absolute path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// Expands `~` and `~/...` and makes the result absolute.
///
/// The path is not required to exist; traversal reports that later.
pub fn resolve_abs_path(path: &str) -> Result<PathBuf, ConfigError> {
    if path.trim().is_empty() {
        return Err(ConfigError::MissingRootDir);
    }

    let expanded: PathBuf = expand_home(path)?;
    let absolute: PathBuf = absolutize(&expanded).map_err(|source| ConfigError::Resolve {
        path: path.to_string(),
        source,
    })?;

    debug!("Resolved '{path}' to {}", absolute.display());
    Ok(absolute)
}

fn expand_home(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }
    Ok(PathBuf::from(path))
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
