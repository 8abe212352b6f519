use std::path::PathBuf;

use svcmap_common::config::{Config, ReportFormat};
use svcmap_common::models::TableRow;
use svcmap_core::{aggregate, discovery, report, source};

use crate::utils::{ScanTree, nmap_document, port};

fn run_pipeline(tree: &ScanTree, service: &str) -> (Vec<TableRow>, source::Harvest) {
    let files: Vec<PathBuf> = discovery::find_scan_files(tree.root(), "xml").unwrap();
    let harvest = source::harvest(&files, None);
    let rows = aggregate::aggregate(&harvest.observations, service);
    (rows, harvest)
}

/// The same hosts spread over nested directories produce one row per version,
/// independent of which file each host came from.
#[test]
fn nested_scans_group_by_version() {
    let tree = ScanTree::new();
    tree.write(
        "dc1/a.xml",
        &nmap_document(&[
            ("10.0.0.2", vec![port("1433", "open", "ms-sql-s", "Microsoft SQL Server", "2019")]),
            ("10.0.0.9", vec![port("1433", "open", "ms-sql-s", "Microsoft SQL Server", "2016")]),
        ]),
    );
    tree.write(
        "dc2/racks/b.xml",
        &nmap_document(&[(
            "10.0.0.1",
            vec![
                port("1433", "open", "ms-sql-s", "Microsoft SQL Server", "2019"),
                port("80", "open", "http", "Microsoft IIS httpd", "10.0"),
            ],
        )]),
    );
    tree.write(
        "c.xml",
        &nmap_document(&[(
            "10.0.0.3",
            vec![port("1433", "filtered", "ms-sql-s", "X", "1")],
        )]),
    );

    let (rows, harvest) = run_pipeline(&tree, "ms-sql-s");

    assert_eq!(harvest.files_read, 3);
    assert!(harvest.failures.is_empty());
    assert_eq!(
        rows,
        vec![
            TableRow {
                hosts: "10.0.0.9:1433".to_string(),
                service_name: "ms-sql-s".to_string(),
                version_key: "Microsoft SQL Server 2016".to_string(),
            },
            TableRow {
                hosts: "10.0.0.1:1433<br>10.0.0.2:1433".to_string(),
                service_name: "ms-sql-s".to_string(),
                version_key: "Microsoft SQL Server 2019".to_string(),
            },
        ]
    );
}

#[test]
fn malformed_files_are_skipped() {
    let tree = ScanTree::new();
    tree.write(
        "good.xml",
        &nmap_document(&[("10.0.0.1", vec![port("1433", "open", "ms-sql-s", "MSSQL", "2019")])]),
    );
    let truncated = tree.write("truncated.xml", "<nmaprun><host><address addr=\"10.0.0.2\"/>");
    let foreign = tree.write("pom.xml", "<project><modelVersion>4.0.0</modelVersion></project>");
    let empty = tree.write("empty.xml", "");

    let (rows, harvest) = run_pipeline(&tree, "ms-sql-s");

    assert_eq!(harvest.files_read, 1);
    let failed: Vec<&PathBuf> = harvest.failures.iter().map(|f| &f.path).collect();
    let mut expected = vec![&empty, &foreign, &truncated];
    expected.sort();
    assert_eq!(failed, expected);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hosts, "10.0.0.1:1433");
}

#[test]
fn duplicate_scans_keep_duplicate_entries() {
    let tree = ScanTree::new();
    let doc = nmap_document(&[("10.0.0.1", vec![port("1433", "open", "ms-sql-s", "MSSQL", "2019")])]);
    tree.write("monday.xml", &doc);
    tree.write("tuesday/rescan.xml", &doc);

    let (rows, _) = run_pipeline(&tree, "ms-sql-s");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hosts, "10.0.0.1:1433<br>10.0.0.1:1433");
}

#[test]
fn host_without_address_still_reported() {
    let tree = ScanTree::new();
    tree.write(
        "anon.xml",
        &nmap_document(&[("", vec![port("1433", "open", "ms-sql-s", "MSSQL", "")])]),
    );

    let (rows, _) = run_pipeline(&tree, "ms-sql-s");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hosts, ":1433");
    assert_eq!(rows[0].version_key, "MSSQL ");
}

#[test]
fn empty_tree_renders_empty_report() {
    let tree = ScanTree::new();
    let (rows, harvest) = run_pipeline(&tree, "ms-sql-s");

    assert!(rows.is_empty());
    assert_eq!(harvest.files_read, 0);

    let html = String::from_utf8(report::render(&rows, "ms-sql-s", ReportFormat::Html).unwrap()).unwrap();
    assert!(html.contains("No matching services found"));
}

#[test]
fn rendered_report_matches_rows() {
    let tree = ScanTree::new();
    tree.write(
        "a.xml",
        &nmap_document(&[
            ("2.2.2.2", vec![port("80", "open", "http", "nginx", "1.25")]),
            ("1.1.1.1", vec![port("80", "open", "http", "nginx", "1.25")]),
        ]),
    );

    let (rows, _) = run_pipeline(&tree, "http");
    let cfg = Config::new("http", tree.root().to_path_buf());

    let html = String::from_utf8(report::render(&rows, &cfg.service, cfg.format).unwrap()).unwrap();
    assert!(html.contains("1.1.1.1:80<br>2.2.2.2:80"));
    assert!(html.contains("<td>http</td>"));
    assert!(html.contains("<td>nginx 1.25</td>"));
}
