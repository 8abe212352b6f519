//! Shared fixture for the command line tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    scan_dir: PathBuf,
    work_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scan_dir = temp_dir.path().join("scans");
        let work_dir = temp_dir.path().join("work");

        fs::create_dir_all(&scan_dir).expect("Failed to create scan dir");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            scan_dir,
            work_dir,
        }
    }

    pub fn scan_dir(&self) -> &Path {
        &self.scan_dir
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Writes a scan file relative to the scan directory, creating parents.
    pub fn write_scan(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.scan_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create scan subdir");
        }
        fs::write(&path, content).expect("Failed to write scan file");
        path
    }

    /// `svcmap` running inside the work directory with colours disabled.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("svcmap").expect("Failed to find svcmap binary");
        cmd.current_dir(&self.work_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--no-banner");
        cmd
    }
}

/// A one-host nmap document with a single port.
pub fn single_port_scan(addr: &str, port: &str, state: &str, service: &str, product: &str, version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -sV" version="7.94" xmloutputversion="1.05">
  <host>
    <status state="up"/>
    <address addr="{addr}" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="{port}">
        <state state="{state}" reason="syn-ack"/>
        <service name="{service}" product="{product}" version="{version}" method="probed" conf="10"/>
      </port>
    </ports>
  </host>
</nmaprun>
"#
    )
}
