//! Entry point for the `bnb-rdf-stats` binary.

mod cli;

use clap::Parser;

fn main() {
    if let Err(error) = cli::Cli::parse().run() {
        eprintln!("Error: {error:#}");
        cli::prompt_to_exit();
        std::process::exit(1);
    }
}
