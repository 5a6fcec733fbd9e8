//! wgips - WireGuard AllowedIPs calculator.
//!
//! Computes the minimal CIDR list covering "allowed minus disallowed"
//! address space and prints it as a WireGuard `AllowedIPs` line.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use wgips::calc::calculate_allowed_ips;
use wgips::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(allowed = %cli.allowed, disallowed = %cli.disallowed, "computing AllowedIPs");

    let result = calculate_allowed_ips(&cli.allowed, &cli.disallowed)?;

    println!("{result}");
    Ok(())
}
