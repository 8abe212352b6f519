//! # Service Observation Model
//!
//! One [`Observation`] is produced for every scanned port of every host found
//! in a scan document. Observations hold plain text only; nothing links them
//! back to the file they were read from.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reachability classification reported for a port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PortState {
    Open,
    Closed,
    /// Probes were dropped, so nothing detected on the port can be trusted.
    Filtered,
    Unfiltered,
    OpenFiltered,
    ClosedFiltered,
    /// The document did not carry a state at all.
    #[default]
    Unknown,
    /// Any state string the scanner emitted that is not listed above.
    Other(String),
}

impl PortState {
    pub fn is_filtered(&self) -> bool {
        matches!(self, PortState::Filtered)
    }
}

impl FromStr for PortState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s {
            "open" => PortState::Open,
            "closed" => PortState::Closed,
            "filtered" => PortState::Filtered,
            "unfiltered" => PortState::Unfiltered,
            "open|filtered" => PortState::OpenFiltered,
            "closed|filtered" => PortState::ClosedFiltered,
            "" => PortState::Unknown,
            other => PortState::Other(other.to_string()),
        };
        Ok(state)
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortState::Open => "open",
            PortState::Closed => "closed",
            PortState::Filtered => "filtered",
            PortState::Unfiltered => "unfiltered",
            PortState::OpenFiltered => "open|filtered",
            PortState::ClosedFiltered => "closed|filtered",
            PortState::Unknown => "unknown",
            PortState::Other(state) => state,
        };
        f.write_str(s)
    }
}

/// A single port's service detection result on a single host.
///
/// Every text field may be empty. `port` is kept as the scanner wrote it and is
/// never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    pub host: String,
    pub port: String,
    pub state: PortState,
    pub service_name: String,
    pub product: String,
    pub version: String,
}

impl Observation {
    /// `host:port`, the entry placed in a report row.
    pub fn host_port(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Grouping key: product and version joined by a single space.
    ///
    /// The space is kept even when one side is empty, so `"Foo "` and `"Foo"`
    /// are different keys.
    pub fn version_key(&self) -> String {
        format!("{} {}", self.product, self.version)
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
