use colored::*;
use svcmap_common::models::TableRow;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Heading for a row in the terminal tree. Blank keys get a placeholder so the
/// line is not empty; the report itself keeps the key as is.
pub fn version_heading(row: &TableRow) -> String {
    if row.version_key.trim().is_empty() {
        String::from("(no product or version)")
    } else {
        row.version_key.clone()
    }
}

pub fn row_to_details(row: &TableRow) -> Vec<Detail> {
    row.host_ports()
        .map(|host_port| (String::from("Host"), host_port.color(colors::HOST_PORT)))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
