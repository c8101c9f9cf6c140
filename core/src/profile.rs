//! Named scanner configurations.
//!
//! The two discovery modes are fixed argument sets rather than free-form
//! flag strings: call sites pick a profile, and the invoker appends the
//! output selector and the target range.

/// A fixed configuration for the external scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProfile {
    /// Full discovery: OS detection, SYN scan, service/version detection,
    /// host-liveness ping skipped.
    Full,

    /// Lightweight discovery: ping-style sweep without port scanning, run
    /// unprivileged and optionally bound to one interface.
    Ping { interface: Option<String> },
}

impl ScanProfile {
    /// Scanner argv for this profile, excluding output selector and target.
    pub fn args(&self) -> Vec<String> {
        match self {
            ScanProfile::Full => ["-O", "-sS", "-sV", "-Pn"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ScanProfile::Ping { interface } => {
                let mut args = vec!["-sn".to_string(), "--unprivileged".to_string()];
                if let Some(iface) = interface {
                    args.push("-e".to_string());
                    args.push(iface.clone());
                }
                args
            }
        }
    }

    /// Whether the profile yields port and OS data worth normalizing.
    pub fn inspects_services(&self) -> bool {
        matches!(self, ScanProfile::Full)
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
    fn full_profile_args_are_fixed() {
        assert_eq!(ScanProfile::Full.args(), vec!["-O", "-sS", "-sV", "-Pn"]);
    }

    #[test]
    fn ping_profile_without_interface() {
        let profile = ScanProfile::Ping { interface: None };
        assert_eq!(profile.args(), vec!["-sn", "--unprivileged"]);
    }

    #[test]
    fn ping_profile_binds_interface() {
        let profile = ScanProfile::Ping {
            interface: Some("en0".to_string()),
        };
        assert_eq!(profile.args(), vec!["-sn", "--unprivileged", "-e", "en0"]);
    }

    #[test]
    fn only_full_profile_inspects_services() {
        assert!(ScanProfile::Full.inspects_services());
        assert!(!ScanProfile::Ping { interface: None }.inspects_services());
    }
}
