//! # Scan Report Model
//!
//! The flat device records a run emits, plus the top-level report shape.
//! A run produces exactly one JSON document on stdout: either
//! `{"devices": [...]}` or `{"error": "..."}`, never both.

use serde::Serialize;

/// Placeholder for per-host fields the scanner could not provide.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Placeholder for a MAC whose prefix the vendor dataset does not know.
pub const VENDOR_NOT_AVAILABLE: &str = "Vendor Not Available";

/// Placeholder used when resolution was skipped or returned nothing.
pub const UNKNOWN: &str = "Unknown";

/// One open TCP port on a discovered device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenPort {
    pub port: u16,
    pub service: String,
    pub product: String,
    pub version: String,
}

/// A single host the scanner reported as up, reshaped for emission.
///
/// Constructed once by the normalizer and never mutated afterwards. The
/// OS and port fields only exist for the full discovery profile; when
/// absent they are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "MAC")]
    pub mac: String,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "OperatingSystem", skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(rename = "OpenPorts", skip_serializing_if = "Option::is_none")]
    pub open_ports: Option<Vec<OpenPort>>,
}

/// The final result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanReport {
    Devices { devices: Vec<Device> },
    Error { error: String },
}

impl ScanReport {
    pub fn devices(devices: Vec<Device>) -> Self {
        Self::Devices { devices }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_device_list_serializes_to_devices_key() {
        let report = ScanReport::devices(Vec::new());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"devices":[]}"#);
    }

    #[test]
    fn error_report_serializes_to_error_key_only() {
        let report = ScanReport::error("Failed to scan network: boom");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"error":"Failed to scan network: boom"}"#);
        assert!(!json.contains("devices"));
    }

    #[test]
    fn device_uses_original_field_names() {
        let device = Device {
            ip: "10.0.0.1".to_string(),
            mac: "AA:BB:CC:00:00:01".to_string(),
            hostname: NOT_AVAILABLE.to_string(),
            vendor: UNKNOWN.to_string(),
            operating_system: Some("Linux 5.x".to_string()),
            open_ports: Some(vec![OpenPort {
                port: 80,
                service: "http".to_string(),
                product: String::new(),
                version: String::new(),
            }]),
        };

        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains(r#""IP":"10.0.0.1""#));
        assert!(json.contains(r#""MAC":"AA:BB:CC:00:00:01""#));
        assert!(json.contains(r#""Hostname":"Not Available""#));
        assert!(json.contains(r#""OperatingSystem":"Linux 5.x""#));
        assert!(json.contains(r#""OpenPorts":[{"port":80"#));
    }

    #[test]
    fn sweep_device_omits_os_and_ports() {
        let device = Device {
            ip: "10.0.0.2".to_string(),
            mac: NOT_AVAILABLE.to_string(),
            hostname: NOT_AVAILABLE.to_string(),
            vendor: UNKNOWN.to_string(),
            operating_system: None,
            open_ports: None,
        };

        let json = serde_json::to_string(&device).unwrap();
        assert!(!json.contains("OperatingSystem"));
        assert!(!json.contains("OpenPorts"));
    }
}
