//! Quanta CLI
//!
//! Parse resource quantities and read them from the environment.

use clap::Parser;
use quanta_log::{LogProfile, Logger};
use std::process;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity; stdout is reserved for results
    let profile = if cli.verbose {
        LogProfile::Development
    } else {
        cli.log_profile.parse().unwrap_or_default()
    };

    let logger = Logger::with_writer(profile, std::io::stderr);
    if let Err(e) = logger.install_global() {
        eprintln!("⚠️  {e}");
    }

    // Execute the command
    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}
