//! Tryst CLI - share date plans as secret codes and friendly links
//!
//! This is the command-line interface for Tryst. It provides a
//! user-friendly interface to the core library functionality.

mod cli;
mod commands;
mod constants;
mod errors;
mod helpers;
mod output;
mod store;

use clap::Parser;

use tryst_core::VERSION;

use crate::cli::{Cli, Commands};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        let code = err
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Pick(args)) => commands::pick::handle_pick(cli, args),
        Some(Commands::Show(args)) => commands::show::handle_show(cli, args),
        Some(Commands::Share(args)) => commands::share::handle_share(cli, args),
        Some(Commands::Decode(args)) => commands::decode::handle_decode(cli, args),
        Some(Commands::Link(args)) => commands::link::handle_link(cli, args),
        Some(Commands::Resolve(args)) => commands::resolve::handle_resolve(cli, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args),
        None => {
            println!("Tryst v{}", VERSION);
            println!("\nRun `tryst --help` for usage information.");
            Ok(())
        }
    }
}
