//! The **abstraction** over the external scanning tool.
//!
//! High-level modules depend on [`ScanProvider`] rather than on the nmap
//! subprocess directly, so the normalization pipeline can be exercised with
//! fabricated host records in tests.

use std::process::Stdio;

use async_trait::async_trait;
use lansweep_common::error::ScanError;
use tokio::process::Command;
use tracing::debug;

use crate::nmap;
use crate::profile::ScanProfile;

/// Raw per-host data as reported by the scanner, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    /// The host's network address. Never empty for a decoded record.
    pub addr: String,
    /// Liveness state as reported by the scanner ("up", "down", ...).
    pub state: String,
    pub mac: Option<String>,
    pub hostname: Option<String>,
    pub tcp_ports: Vec<PortRecord>,
    /// OS fingerprint candidates, best match first.
    pub os_matches: Vec<String>,
}

/// One TCP port entry from the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortRecord {
    pub port: u16,
    pub state: String,
    pub service: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
}

/// Anything that can enumerate hosts over a target range.
#[async_trait]
pub trait ScanProvider {
    /// Runs one scan of `target` under `profile` and returns the raw host
    /// records. Failures are total: no partial results are ever returned.
    async fn scan(
        &self,
        target: &str,
        profile: &ScanProfile,
    ) -> Result<Vec<HostRecord>, ScanError>;
}

/// Production provider: shells out to nmap with XML output on stdout.
pub struct NmapScanner {
    binary: String,
}

impl NmapScanner {
    pub fn new(binary: Option<String>) -> Self {
        Self {
            binary: binary.unwrap_or_else(|| "nmap".to_string()),
        }
    }
}

impl Default for NmapScanner {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl ScanProvider for NmapScanner {
    async fn scan(
        &self,
        target: &str,
        profile: &ScanProfile,
    ) -> Result<Vec<HostRecord>, ScanError> {
        let args = profile.args();
        debug!(binary = %self.binary, ?args, target, "invoking scanner");

        let output = Command::new(&self.binary)
            .args(&args)
            .args(["-oX", "-"])
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScanError::Failed {
                status: output.status,
                stderr,
            });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        nmap::decode_hosts(&xml)
    }
}
