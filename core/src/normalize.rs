//! Reshaping raw scanner records into emitted device records.
//!
//! Pure over its inputs: hosts not reported "up" are dropped, missing
//! fields degrade to placeholders, and vendor resolution goes through the
//! injected [`VendorProvider`]. Nothing in here can fail a run.

use lansweep_common::report::{Device, NOT_AVAILABLE, OpenPort, UNKNOWN, VENDOR_NOT_AVAILABLE};

use crate::profile::ScanProfile;
use crate::scanner::{HostRecord, PortRecord};
use crate::vendors::VendorProvider;

/// Builds one device record per host reported "up".
pub fn normalize(
    hosts: Vec<HostRecord>,
    vendors: &dyn VendorProvider,
    profile: &ScanProfile,
) -> Vec<Device> {
    hosts
        .into_iter()
        .filter(|host| host.state == "up")
        .map(|host| to_device(host, vendors, profile))
        .collect()
}

fn to_device(host: HostRecord, vendors: &dyn VendorProvider, profile: &ScanProfile) -> Device {
    let mac = host
        .mac
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let vendor = resolve_vendor(&mac, vendors);
    let hostname = host
        .hostname
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let (operating_system, open_ports) = if profile.inspects_services() {
        (Some(extract_os(&host)), Some(extract_open_ports(&host)))
    } else {
        (None, None)
    };

    Device {
        ip: host.addr,
        mac,
        hostname,
        vendor,
        operating_system,
        open_ports,
    }
}

/// Lookup is skipped entirely when the scanner gave us no MAC.
fn resolve_vendor(mac: &str, vendors: &dyn VendorProvider) -> String {
    if mac == NOT_AVAILABLE {
        return UNKNOWN.to_string();
    }
    vendors
        .vendor(mac)
        .unwrap_or_else(|| VENDOR_NOT_AVAILABLE.to_string())
}

/// First OS-match candidate, or "Unknown" when fingerprinting gave nothing.
fn extract_os(host: &HostRecord) -> String {
    host.os_matches
        .first()
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Only ports whose state is exactly "open" make it into the report.
fn extract_open_ports(host: &HostRecord) -> Vec<OpenPort> {
    host.tcp_ports
        .iter()
        .filter(|port| port.state == "open")
        .map(to_open_port)
        .collect()
}

fn to_open_port(port: &PortRecord) -> OpenPort {
    OpenPort {
        port: port.port,
        service: port
            .service
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        product: port.product.clone().unwrap_or_default(),
        version: port.version.clone().unwrap_or_default(),
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
