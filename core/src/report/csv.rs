//! CSV report. Each row's hosts become a multi-line cell.

use svcmap_common::models::TableRow;

use super::ReportError;

pub fn generate_csv(rows: &[TableRow]) -> Result<Vec<u8>, ReportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["hosts", "service", "version"])?;

    for row in rows {
        let hosts: String = row.host_ports().collect::<Vec<_>>().join("\n");
        wtr.write_record([hosts.as_str(), row.service_name.as_str(), row.version_key.as_str()])?;
    }

    wtr.into_inner()
        .map_err(|e| ReportError::CsvBuffer(e.error().to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
