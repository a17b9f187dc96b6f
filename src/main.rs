//! pkgcopy - package copy step for packaging pipelines
//!
//! Resolves a source package specifier (literal path or glob pattern) to a
//! single file and copies it into place, deriving the destination from a
//! cache directory when no explicit target is given.

use clap::Parser;

mod cli;
mod commands;
mod copier;
mod error;
mod job;
mod resolve;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Copy(args) => commands::copy::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
