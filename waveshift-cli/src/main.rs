// waveshift-cli/src/main.rs
//
// Binary entry point for the Waveshift CLI. Parses arguments, initializes
// logging, dispatches to the command implementations, and maps any fatal
// error to a red stderr message and a non-zero exit code.

use clap::Parser;
use colored::*;
use std::process;
use waveshift_cli::cli::{Cli, Commands};
use waveshift_cli::commands::{convert, formats};
use waveshift_cli::logging;

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => convert::run_convert(args),
        Commands::Formats => formats::run_formats(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
