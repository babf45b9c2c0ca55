//! resolve-imports CLI entry point.
//!
//! Parses arguments, runs the resolver, and prints the dependency set as a
//! single-line JSON array. Only argument-level errors exit non-zero; see
//! [`resolve_imports::cli`] for the full contract.

use anyhow::Result;
use clap::Parser;
use resolve_imports::cli;
use resolve_imports::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
