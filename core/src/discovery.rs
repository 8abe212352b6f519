//! # Scan File Discovery
//!
//! Recursively enumerates the scan documents below a root directory.
//!
//! The order of the returned paths follows the filesystem and is not stable
//! across platforms; nothing downstream may depend on it.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot access {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed while walking {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Returns the absolute paths of all non-directory entries below `root` whose
/// file name ends in `.{extension}`.
///
/// Any unreadable entry stops the walk, the same way an unreadable root does.
pub fn find_scan_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let root: PathBuf = std::path::absolute(root).map_err(|source| DiscoveryError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let metadata = std::fs::metadata(&root).map_err(|source| DiscoveryError::Root {
        path: root.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DiscoveryError::NotADirectory(root));
    }

    let suffix: String = format!(".{}", extension.trim_start_matches('.'));
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(&root) {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            path: root.clone(),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} '{suffix}' files below {}", files.len(), root.display());
    Ok(files)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
