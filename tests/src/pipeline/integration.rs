#![cfg(test)]
//! End-to-end pipeline tests with faked scan and vendor providers.
//!
//! These exercise the whole invoke → normalize → report path and pin down
//! the exact JSON documents a run emits.

use async_trait::async_trait;
use lansweep_common::error::ScanError;
use lansweep_common::report::ScanReport;
use lansweep_core::discovery;
use lansweep_core::profile::ScanProfile;
use lansweep_core::scanner::{HostRecord, PortRecord, ScanProvider};
use lansweep_core::vendors::VendorProvider;

/// Provider that returns a canned host list, or fails the whole scan.
struct FakeScanner {
    outcome: Result<Vec<HostRecord>, String>,
}

#[async_trait]
impl ScanProvider for FakeScanner {
    async fn scan(
        &self,
        _target: &str,
        _profile: &ScanProfile,
    ) -> Result<Vec<HostRecord>, ScanError> {
        match &self.outcome {
            Ok(hosts) => Ok(hosts.clone()),
            Err(message) => Err(ScanError::Decode(message.clone())),
        }
    }
}

struct FixedVendors(Option<&'static str>);

impl VendorProvider for FixedVendors {
    fn vendor(&self, _mac: &str) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn reference_host() -> HostRecord {
    HostRecord {
        addr: "192.168.1.23".to_string(),
        state: "up".to_string(),
        mac: Some("AA:BB:CC:00:00:01".to_string()),
        hostname: None,
        tcp_ports: vec![
            PortRecord {
                port: 80,
                state: "open".to_string(),
                service: Some("http".to_string()),
                product: None,
                version: None,
            },
            PortRecord {
                port: 22,
                state: "closed".to_string(),
                ..PortRecord::default()
            },
        ],
        os_matches: vec!["Linux 5.x".to_string()],
    }
}

#[tokio::test]
async fn full_discovery_emits_the_expected_document() {
    let scanner = FakeScanner {
        outcome: Ok(vec![reference_host()]),
    };
    let vendors = FixedVendors(Some("AcmeCorp"));

    let report =
        discovery::run_discovery(&scanner, &vendors, "192.168.1.0/24", &ScanProfile::Full).await;

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"devices":[{"IP":"192.168.1.23","MAC":"AA:BB:CC:00:00:01","#,
            r#""Hostname":"Not Available","Vendor":"AcmeCorp","#,
            r#""OperatingSystem":"Linux 5.x","#,
            r#""OpenPorts":[{"port":80,"service":"http","product":"","version":""}]}]}"#
        )
    );
}

#[tokio::test]
async fn scan_failure_becomes_an_error_document() {
    let scanner = FakeScanner {
        outcome: Err("unexpected end of file".to_string()),
    };
    let vendors = FixedVendors(None);

    let report =
        discovery::run_discovery(&scanner, &vendors, "192.168.1.0/24", &ScanProfile::Full).await;

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"error":"Failed to scan network: could not decode scanner output: unexpected end of file"}"#
    );
    assert!(!json.contains("devices"));
}

#[tokio::test]
async fn no_hosts_up_yields_an_empty_device_list() {
    let mut down = reference_host();
    down.state = "down".to_string();
    let scanner = FakeScanner {
        outcome: Ok(vec![down]),
    };
    let vendors = FixedVendors(None);

    let report =
        discovery::run_discovery(&scanner, &vendors, "192.168.1.0/24", &ScanProfile::Full).await;

    assert_eq!(report, ScanReport::devices(Vec::new()));
    assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"devices":[]}"#);
}

#[tokio::test]
async fn sweep_devices_carry_no_service_fields() {
    let scanner = FakeScanner {
        outcome: Ok(vec![reference_host()]),
    };
    let vendors = FixedVendors(Some("AcmeCorp"));
    let profile = ScanProfile::Ping { interface: None };

    let report = discovery::run_discovery(&scanner, &vendors, "192.168.1.0/24", &profile).await;

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""IP":"192.168.1.23""#));
    assert!(!json.contains("OperatingSystem"));
    assert!(!json.contains("OpenPorts"));
}
