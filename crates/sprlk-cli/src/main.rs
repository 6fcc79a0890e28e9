//! Terminal frontend for Scissors-Paper-Rock-Lizard-Spock.

mod commands;
mod strategy;

use std::process;

use clap::{Parser, Subcommand};

use crate::strategy::Strategy;

#[derive(Parser)]
#[command(
    name = "sprlk",
    about = "Scissors-Paper-Rock-Lizard-Spock against an adaptive opponent",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// RNG seed for a reproducible opponent
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the rules guide
    Rules,

    /// Let a scripted player play against the opponent
    Simulate {
        /// How the scripted player picks its gestures
        #[arg(long, value_enum, default_value = "constant")]
        strategy: Strategy,

        /// Gesture thrown by the constant strategy and opening move of the others
        #[arg(short, long, default_value = "rock")]
        gesture: String,

        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Rules => commands::rules::run(),
        Commands::Simulate {
            strategy,
            gesture,
            rounds,
            seed,
            json,
        } => commands::simulate::run(strategy, &gesture, rounds, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
