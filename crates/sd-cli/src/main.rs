//! CLI frontend for Synth Decider, the decision wheel.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use commands::OptionSource;

#[derive(Parser)]
#[command(
    name = "sd",
    about = "Synth Decider, a decision wheel that always knows best",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 20 slices of the wheel
    Wheel {
        #[command(flatten)]
        source: OptionSource,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spin the wheel and print where it lands
    Spin {
        #[command(flatten)]
        source: OptionSource,

        /// Number of spins
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// RNG seed (overrides the config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the terminal UI
    Tui {
        #[command(flatten)]
        source: OptionSource,

        /// RNG seed (overrides the config)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the effective config as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal; a stderr subscriber would draw over it.
    if !matches!(cli.command, Commands::Tui { .. }) {
        logging::init(cli.verbose);
    }

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Wheel { source, json } => commands::wheel::run(&source, &config, json),
        Commands::Spin {
            source,
            count,
            seed,
            json,
        } => commands::spin::run(&source, config, count, seed, json),
        Commands::Tui { source, seed } => commands::tui::run(&source, config, seed),
        Commands::Config => commands::config::run(&config),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
