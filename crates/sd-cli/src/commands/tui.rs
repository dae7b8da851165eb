//! Run the terminal UI in-process.

use sd_core::WheelConfig;
use sd_tui::app::TuiApp;

use super::OptionSource;

pub fn run(source: &OptionSource, config: WheelConfig, seed: Option<u64>) -> Result<(), String> {
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    let controller = source.controller(config)?;
    sd_tui::terminal::run(TuiApp::new(controller))
}
