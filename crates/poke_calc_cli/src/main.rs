//! One-shot command-line front end for the damage and capture estimators.
//!
//! Requests are the same JSON documents the library's serde types accept;
//! pass one inline, from a file, or on stdin.
//!
//! Usage:
//!   cargo run -p poke_calc_cli -- damage --file request.json
//!   cargo run -p poke_calc_cli -- catch '{"species": "Dratini", "ball": "Timer Ball", "turns": 23}'
//!   echo '{...}' | cargo run -p poke_calc_cli -- damage --json

mod cmd;
mod input;

use clap::{Parser, Subcommand};
use cmd::{catch, damage};

#[derive(Parser)]
#[command(name = "poke_calc_cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate damage for one attack
    Damage(damage::DamageArgs),

    /// Estimate capture odds for one throw plan
    Catch(catch::CatchArgs),
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Damage(args)) => damage::execute(args),
        Some(Commands::Catch(args)) => catch::execute(args),
        None => {
            // No default subcommand; print help and bail.
            use clap::CommandFactory;
            let mut help = Cli::command();
            let _ = help.print_help();
            return;
        }
    };

    if let Err(message) = outcome {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}
