//! Self-contained HTML table report.

use svcmap_common::models::{HOST_SEPARATOR, TableRow};

/// Generates the HTML report for `service`.
///
/// Host entries are escaped one by one and joined with a literal `<br>` so
/// they show up as separate lines of the same cell.
pub fn generate_html(rows: &[TableRow], service: &str) -> String {
    let body: String = if rows.is_empty() {
        r#"        <tr><td colspan="3" class="empty">No matching services found</td></tr>"#.to_string()
    } else {
        rows.iter().map(generate_row).collect::<Vec<_>>().join("\n")
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{service} versions</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
            margin: 2rem;
            color: #1f2328;
        }}

        table {{
            border-collapse: collapse;
            width: 100%;
        }}

        th, td {{
            border: 1px solid #d0d7de;
            padding: 0.5rem 0.75rem;
            text-align: left;
            vertical-align: top;
        }}

        th {{
            background-color: #f6f8fa;
        }}

        td.hosts {{
            font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        }}

        td.empty {{
            text-align: center;
            color: #656d76;
        }}
    </style>
</head>
<body>
    <h1>{service}</h1>
    <table>
        <thead>
            <tr><th>Hosts</th><th>Service</th><th>Version</th></tr>
        </thead>
        <tbody>
{body}
        </tbody>
    </table>
</body>
</html>
"##,
        service = html_escape(service),
        body = body,
    )
}

fn generate_row(row: &TableRow) -> String {
    let hosts: String = row
        .hosts
        .split(HOST_SEPARATOR)
        .map(html_escape)
        .collect::<Vec<_>>()
        .join(HOST_SEPARATOR);

    format!(
        r#"        <tr><td class="hosts">{hosts}</td><td>{service}</td><td>{version}</td></tr>"#,
        hosts = hosts,
        service = html_escape(&row.service_name),
        version = html_escape(&row.version_key),
    )
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
