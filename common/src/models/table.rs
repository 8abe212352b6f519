/// Separator placed between `host:port` entries inside [`TableRow::hosts`].
///
/// Renderers treat it as a line break inside a single cell.
pub const HOST_SEPARATOR: &str = "<br>";

/// One line of the version report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Sorted `host:port` entries joined with [`HOST_SEPARATOR`].
    pub hosts: String,
    pub service_name: String,
    pub version_key: String,
}

impl TableRow {
    /// Iterates the individual `host:port` entries of the row.
    pub fn host_ports(&self) -> impl Iterator<Item = &str> {
        self.hosts
            .split(HOST_SEPARATOR)
            .filter(|entry| !entry.is_empty())
    }

    pub fn host_count(&self) -> usize {
        self.host_ports().count()
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
