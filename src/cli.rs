//! CLI argument parsing with clap.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wgips")]
#[command(author, version, about = "WireGuard AllowedIPs calculator")]
pub struct Cli {
    /// Allowed IPs/CIDRs (comma- or whitespace-separated)
    #[arg(short, long)]
    pub allowed: String,

    /// Disallowed IPs/CIDRs (comma- or whitespace-separated)
    #[arg(short, long, default_value = "")]
    pub disallowed: String,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}
