use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;

mod cli;
mod config;
mod console;
mod error;
mod library;
mod naming;
mod organize;
mod runtime;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    runtime::logging::init(args.verbose);

    match runtime::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Same stream as the per-file errors printed by the console.
            println!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
