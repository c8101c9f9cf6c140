#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Binds the ping sweep to a specific interface.
    ///
    /// Ignored by the full discovery profile.
    pub interface: Option<String>,

    /// Scanner binary to invoke instead of `nmap` from PATH.
    pub nmap_path: Option<String>,
}
