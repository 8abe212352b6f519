//! # Record Source
//!
//! Reads scan documents and turns them into [`Observation`]s.
//!
//! Files are independent of each other, so [`harvest`] parses them in parallel
//! with rayon. A file that cannot be read or parsed never aborts the run: it is
//! returned as a [`FileFailure`] so the caller can report every skipped file
//! from a single place.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use svcmap_common::models::Observation;
use thiserror::Error;
use tracing::debug;

mod nmap;

pub use nmap::parse_observations;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("error reading file: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to unmarshal xml data: {0}")]
    Parse(#[from] quick_xml::de::DeError),

    #[error("expected element <nmaprun> but found <{0}>")]
    UnexpectedRoot(String),

    #[error("document has no root element")]
    Empty,
}

/// A file that contributed nothing because it could not be used.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SourceError,
}

/// Everything collected from one set of scan files.
#[derive(Debug, Default)]
pub struct Harvest {
    pub observations: Vec<Observation>,
    /// Sorted by path.
    pub failures: Vec<FileFailure>,
    pub files_read: usize,
}

/// Reads a single scan document.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>, SourceError> {
    let data: String = std::fs::read_to_string(path)?;
    parse_observations(&data)
}

/// Parses every file in `paths`.
///
/// `on_file_done` is called with the running number of processed files,
/// possibly from several threads at once.
pub fn harvest(
    paths: &[PathBuf],
    on_file_done: Option<Box<dyn Fn(usize) + Send + Sync>>,
) -> Harvest {
    let processed = AtomicUsize::new(0);

    let results: Vec<(&PathBuf, Result<Vec<Observation>, SourceError>)> = paths
        .par_iter()
        .map(|path| {
            let result = read_observations(path);
            let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = &on_file_done {
                callback(count);
            }
            (path, result)
        })
        .collect();

    let mut harvest = Harvest::default();
    for (path, result) in results {
        match result {
            Ok(observations) => {
                debug!("{} observations in {}", observations.len(), path.display());
                harvest.files_read += 1;
                harvest.observations.extend(observations);
            }
            Err(error) => harvest.failures.push(FileFailure {
                path: path.clone(),
                error,
            }),
        }
    }

    harvest.failures.sort_by(|a, b| a.path.cmp(&b.path));
    harvest
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;

    const SCAN: &str = r#"<?xml version="1.0"?>
<nmaprun scanner="nmap">
  <host>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="1433">
        <state state="open"/>
        <service name="ms-sql-s" product="Microsoft SQL Server" version="2019"/>
      </port>
    </ports>
  </host>
</nmaprun>"#;

    #[test]
    fn bad_files_are_collected_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xml");
        let broken = dir.path().join("broken.xml");
        let missing = dir.path().join("missing.xml");
        fs::write(&good, SCAN).unwrap();
        fs::write(&broken, "<nmaprun><host>").unwrap();

        let harvest = harvest(&[broken.clone(), good, missing.clone()], None);

        assert_eq!(harvest.files_read, 1);
        assert_eq!(harvest.observations.len(), 1);
        assert_eq!(harvest.failures.len(), 2);
        assert_eq!(harvest.failures[0].path, broken);
        assert_eq!(harvest.failures[1].path, missing);
        assert!(matches!(harvest.failures[1].error, SourceError::Read(_)));
    }

    #[test]
    fn progress_callback_sees_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| {
                let path = dir.path().join(format!("scan{i}.xml"));
                fs::write(&path, SCAN).unwrap();
                path
            })
            .collect();

        let seen = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicUsize::new(0));
        let (seen_ref, max_ref) = (seen.clone(), max.clone());
        let callback: Box<dyn Fn(usize) + Send + Sync> = Box::new(move |count: usize| {
            seen_ref.fetch_add(1, Ordering::Relaxed);
            max_ref.fetch_max(count, Ordering::Relaxed);
        });

        let harvest = harvest(&paths, Some(callback));

        assert_eq!(harvest.observations.len(), 8);
        assert_eq!(seen.load(Ordering::Relaxed), 8);
        assert_eq!(max.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn empty_path_list() {
        let harvest = harvest(&[], None);
        assert!(harvest.observations.is_empty());
        assert!(harvest.failures.is_empty());
        assert_eq!(harvest.files_read, 0);
    }
}
