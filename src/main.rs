//! intmerge - two-way external merge step
//!
//! A command line tool that merges two text files of sorted integers into a
//! single sorted output file, streaming, in constant memory. One stage of a
//! larger external merge sort; the surrounding pipeline lives elsewhere.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod merge;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::merge::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
