//! CLI argument definitions

use clap::{Parser, Subcommand};
use quanta_core::Quantity;

#[derive(Parser)]
#[command(name = "quanta")]
#[command(about = "Exact resource quantity parsing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging (same as --log-profile DEVELOPMENT)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logger profile; DEVELOPMENT enables debug output
    #[arg(long, global = true, env = "LOGGING_LEVEL", default_value = "PRODUCTION")]
    pub log_profile: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse quantities (e.g. 10Mi, 1.1M, -1) into base units
    Parse {
        /// Print one JSON object per quantity
        #[arg(long)]
        json: bool,

        /// Quantities to parse
        #[arg(required = true, allow_hyphen_values = true)]
        quantities: Vec<String>,
    },

    /// Read an environment variable as a quantity
    Env {
        /// Variable name
        key: String,

        /// Fail if the variable is not set
        #[arg(long)]
        required: bool,

        /// Value used when the variable is not set
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        fallback: Quantity,
    },

    /// List recognized suffixes
    Suffixes,
}
