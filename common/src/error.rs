use thiserror::Error;

/// Problems with the run configuration. All of them are fatal: no report is
/// written when one of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("please provide the nmap directory using the --nmap-dir flag")]
    MissingRootDir,

    #[error("could not determine the home directory of the current user")]
    HomeDirUnavailable,

    #[error("invalid path '{path}': {source}")]
    Resolve {
        path: String,
        source: std::io::Error,
    },

    #[error("unknown report format '{0}' (expected 'html' or 'csv')")]
    UnknownFormat(String),
}
