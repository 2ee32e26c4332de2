//! Vinv - Vehicle inventory browser
//!
//! A CLI tool that fetches vehicle records from a backend API and
//! filters them by make, model, year, fuel type, transmission,
//! mileage and price.

mod cli;
mod commands;
mod config;
mod error;
mod filter;
mod output;
mod source;
mod types;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
