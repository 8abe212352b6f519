use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// One `<port>` entry of a fixture host.
pub struct PortSpec<'a> {
    pub portid: &'a str,
    pub state: &'a str,
    pub service: &'a str,
    pub product: &'a str,
    pub version: &'a str,
}

pub fn port<'a>(
    portid: &'a str,
    state: &'a str,
    service: &'a str,
    product: &'a str,
    version: &'a str,
) -> PortSpec<'a> {
    PortSpec {
        portid,
        state,
        service,
        product,
        version,
    }
}

/// Builds an nmap XML document with one `<host>` per entry.
pub fn nmap_document(hosts: &[(&str, Vec<PortSpec<'_>>)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<nmaprun scanner=\"nmap\" version=\"7.94\">\n",
    );

    for (addr, ports) in hosts {
        xml.push_str("  <host>\n    <status state=\"up\"/>\n");
        if !addr.is_empty() {
            xml.push_str(&format!("    <address addr=\"{addr}\" addrtype=\"ipv4\"/>\n"));
        }
        xml.push_str("    <ports>\n");
        for p in ports {
            xml.push_str(&format!(
                "      <port protocol=\"tcp\" portid=\"{}\"><state state=\"{}\"/><service name=\"{}\" product=\"{}\" version=\"{}\"/></port>\n",
                p.portid, p.state, p.service, p.product, p.version
            ));
        }
        xml.push_str("    </ports>\n  </host>\n");
    }

    xml.push_str("</nmaprun>\n");
    xml
}

/// A scan directory that is removed when dropped.
pub struct ScanTree {
    dir: TempDir,
}

impl ScanTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}
