//! # Network Discovery Pipeline
//!
//! One linear pass per run: invoke the scan provider, normalize whatever
//! it reported, and wrap the outcome in the report shape. A provider
//! failure short-circuits into the `{error}` report; partial results are
//! never returned.

use lansweep_common::report::ScanReport;
use tracing::{debug, error};

use crate::normalize;
use crate::profile::ScanProfile;
use crate::scanner::ScanProvider;
use crate::vendors::VendorProvider;

/// Executes one full discovery cycle against `target`.
pub async fn run_discovery(
    provider: &dyn ScanProvider,
    vendors: &dyn VendorProvider,
    target: &str,
    profile: &ScanProfile,
) -> ScanReport {
    match provider.scan(target, profile).await {
        Ok(hosts) => {
            debug!(total = hosts.len(), "scanner returned host records");
            ScanReport::devices(normalize::normalize(hosts, vendors, profile))
        }
        Err(e) => {
            error!("scan failed: {e}");
            ScanReport::error(format!("Failed to scan network: {e}"))
        }
    }
}
