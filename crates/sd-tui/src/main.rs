//! Standalone TUI binary for Synth Decider.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use sd_core::{Mode, SpinController, WheelConfig};

#[derive(Parser)]
#[command(
    name = "sd-tui",
    about = "Terminal UI for Synth Decider, the decision wheel",
    version
)]
struct Args {
    /// Obligation mode (student, worker)
    #[arg(short, long, default_value = "student")]
    mode: String,

    /// File with one casual option per line
    #[arg(short = 'f', long)]
    options_file: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let result = build_controller(&args)
        .and_then(|controller| sd_tui::terminal::run(sd_tui::app::TuiApp::new(controller)));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Build the controller from the command-line arguments.
fn build_controller(args: &Args) -> Result<SpinController, String> {
    let mode = args.mode.parse::<Mode>().map_err(|e| e.to_string())?;

    let mut config = match &args.config {
        Some(path) => WheelConfig::from_path(path).map_err(|e| e.to_string())?,
        None => WheelConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let text = match &args.options_file {
        Some(path) => sd_core::read_options_file(path).map_err(|e| e.to_string())?,
        None => sd_core::defaults::default_options_text(),
    };

    SpinController::with_options(mode, &text, config).map_err(|e| e.to_string())
}
