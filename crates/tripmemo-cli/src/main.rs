//! tripmemo - trip memo and invoice management for a transport back office
//!
//! A CLI tool that records billable trips, prices them from the rate
//! table, and rolls pending memos into invoices.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
