use crate::cli::Commands;
use anyhow::Result;

pub mod env;
pub mod parse;
pub mod suffixes;

/// Dispatch command to appropriate handler
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Parse { json, quantities } => parse::execute(&quantities, json),

        Commands::Env {
            key,
            required,
            fallback,
        } => env::execute(&key, required, fallback),

        Commands::Suffixes => {
            suffixes::execute();
            Ok(())
        }
    }
}
