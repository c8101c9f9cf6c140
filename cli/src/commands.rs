pub mod discover;
pub mod sweep;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lansweep_common::report::ScanReport;

#[derive(Parser)]
#[command(name = "lansweep")]
#[command(about = "Summarize the devices on a network as one JSON document.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full discovery: OS, services and open ports for every live host
    #[command(alias = "d")]
    Discover {
        /// Target range (CIDR); defaults to the local /24
        target: Option<String>,

        /// Scanner binary to invoke instead of `nmap` from PATH
        #[arg(long)]
        nmap: Option<String>,
    },
    /// Lightweight sweep: live hosts only, no port scan
    #[command(alias = "s")]
    Sweep {
        /// Target range (CIDR); defaults to the local /24
        target: Option<String>,

        /// Bind the sweep to a specific interface
        #[arg(short, long)]
        interface: Option<String>,

        /// Scanner binary to invoke instead of `nmap` from PATH
        #[arg(long)]
        nmap: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Writes the report to stdout as one compact JSON line.
///
/// Stdout carries nothing else; emitting the `{error}` shape still counts
/// as a successful run.
pub(crate) fn emit(report: &ScanReport) -> anyhow::Result<()> {
    let json = serde_json::to_string(report).context("could not serialize scan report")?;
    println!("{json}");
    Ok(())
}
