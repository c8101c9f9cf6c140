//! Decoding of the scanner's XML report.
//!
//! Reads an `nmaprun` document (`nmap -oX -`) and lifts the per-host data
//! the pipeline cares about: liveness state, addresses, the first hostname,
//! TCP port details and OS-match candidates. Everything else in the
//! document is skipped.

use lansweep_common::error::ScanError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::scanner::{HostRecord, PortRecord};

/// Decodes an `nmaprun` document into raw host records.
///
/// Hosts without an address are dropped; a record for every other host is
/// returned regardless of its liveness state, which the normalizer filters.
pub fn decode_hosts(xml: &str) -> Result<Vec<HostRecord>, ScanError> {
    let mut reader = Reader::from_str(xml);
    let mut hosts: Vec<HostRecord> = Vec::new();
    let mut current: Option<HostRecord> = None;
    let mut current_port: Option<PortRecord> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ScanError::Decode(e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => match e.name().as_ref() {
                b"host" => current = Some(HostRecord::default()),
                b"status" => {
                    if let Some(host) = current.as_mut() {
                        if let Some(state) = attr(e, b"state")? {
                            host.state = state;
                        }
                    }
                }
                b"address" => {
                    if let Some(host) = current.as_mut() {
                        match attr(e, b"addrtype")?.as_deref() {
                            Some("mac") => host.mac = attr(e, b"addr")?,
                            _ => {
                                if host.addr.is_empty() {
                                    if let Some(addr) = attr(e, b"addr")? {
                                        host.addr = addr;
                                    }
                                }
                            }
                        }
                    }
                }
                b"hostname" => {
                    if let Some(host) = current.as_mut() {
                        if host.hostname.is_none() {
                            host.hostname = attr(e, b"name")?.filter(|n| !n.is_empty());
                        }
                    }
                }
                b"port" => {
                    let is_tcp = attr(e, b"protocol")?.as_deref() == Some("tcp");
                    let port = attr(e, b"portid")?.and_then(|p| p.parse::<u16>().ok());
                    current_port = match (is_tcp, port) {
                        (true, Some(port)) => Some(PortRecord {
                            port,
                            ..PortRecord::default()
                        }),
                        _ => None,
                    };
                }
                b"state" => {
                    // Only appears nested inside <port>.
                    if let Some(port) = current_port.as_mut() {
                        if let Some(state) = attr(e, b"state")? {
                            port.state = state;
                        }
                    }
                }
                b"service" => {
                    if let Some(port) = current_port.as_mut() {
                        port.service = attr(e, b"name")?;
                        port.product = attr(e, b"product")?;
                        port.version = attr(e, b"version")?;
                    }
                }
                b"osmatch" => {
                    if let Some(host) = current.as_mut() {
                        if let Some(name) = attr(e, b"name")? {
                            host.os_matches.push(name);
                        }
                    }
                }
                _ => {}
            },
            Event::End(ref e) => match e.name().as_ref() {
                b"host" => {
                    if let Some(host) = current.take() {
                        if !host.addr.is_empty() {
                            hosts.push(host);
                        }
                    }
                }
                b"port" => {
                    if let (Some(port), Some(host)) = (current_port.take(), current.as_mut()) {
                        host.tcp_ports.push(port);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(hosts)
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, ScanError> {
    for a in e.attributes() {
        let a = a.map_err(|e| ScanError::Decode(e.to_string()))?;
        if a.key.as_ref() == key {
            let value = a
                .unescape_value()
                .map_err(|e| ScanError::Decode(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
