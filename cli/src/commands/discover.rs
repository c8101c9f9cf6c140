use lansweep_common::config::Config;
use lansweep_core::profile::ScanProfile;
use lansweep_core::scanner::NmapScanner;
use lansweep_core::vendors::MacOuiRepo;
use lansweep_core::{discovery, range};
use tracing::info;

use crate::commands::emit;

/// Full discovery over `target`, defaulting to the resolved local /24.
pub async fn discover(target: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let target = target.unwrap_or_else(range::local_subnet);
    info!("running full discovery against {target}");

    let scanner = NmapScanner::new(cfg.nmap_path.clone());
    let report =
        discovery::run_discovery(&scanner, &MacOuiRepo, &target, &ScanProfile::Full).await;

    emit(&report)
}
