//! Best-effort resolution of the local /24 subnet.
//!
//! Finds the IPv4 address of the interface carrying the default route and
//! widens it to its surrounding /24 block. Resolution is best-effort by
//! contract: every failure path falls back to a fixed default instead of
//! returning an error.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use tracing::debug;

/// Returned whenever the local address cannot be determined.
pub const FALLBACK_SUBNET: &str = "192.168.1.0/24";

/// Resolves the /24 block around the default-route interface address.
pub fn local_subnet() -> String {
    match default_route_addr().or_else(lan_interface_addr) {
        Some(addr) => truncate_to_slash24(addr),
        None => {
            debug!("no usable local address, falling back to {FALLBACK_SUBNET}");
            FALLBACK_SUBNET.to_string()
        }
    }
}

/// Asks the kernel which source address routes towards the internet.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
fn default_route_addr() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(("8.8.8.8", 53)).ok()?;

    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(v4) if !v4.is_loopback() && !v4.is_unspecified() => Some(v4),
        _ => None,
    }
}

/// Fallback for hosts without a default route: the first private IPv4
/// address on a viable interface.
fn lan_interface_addr() -> Option<Ipv4Addr> {
    datalink::interfaces()
        .into_iter()
        .filter(|i| i.is_up() && !i.is_loopback() && !i.is_point_to_point())
        .flat_map(|i| i.ips.into_iter())
        .find_map(|net| match net {
            IpNetwork::V4(v4) if v4.ip().is_private() => Some(v4.ip()),
            _ => None,
        })
}

fn truncate_to_slash24(addr: Ipv4Addr) -> String {
    let [a, b, c, _] = addr.octets();
    format!("{a}.{b}.{c}.0/24")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
