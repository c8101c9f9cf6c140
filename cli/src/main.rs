mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, sweep};
use lansweep_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    match commands.command {
        Commands::Discover { target, nmap } => {
            let cfg = Config {
                interface: None,
                nmap_path: nmap,
            };
            discover::discover(target, &cfg).await
        }
        Commands::Sweep {
            target,
            interface,
            nmap,
        } => {
            let cfg = Config {
                interface,
                nmap_path: nmap,
            };
            sweep::sweep(target, &cfg).await
        }
    }
}
