pub mod config;
pub mod spin;
pub mod tui;
pub mod wheel;

use std::path::{Path, PathBuf};

use clap::Args;

use sd_core::{Mode, SpinController, WheelConfig, WheelModel};

/// Where the casual options come from.
#[derive(Args)]
pub struct OptionSource {
    /// A casual option (repeatable)
    #[arg(short = 'o', long = "option", conflicts_with = "options_file")]
    pub options: Vec<String>,

    /// File with one casual option per line
    #[arg(short = 'f', long)]
    pub options_file: Option<PathBuf>,

    /// Obligation mode (student, worker)
    #[arg(short, long, default_value = "student")]
    pub mode: String,
}

impl OptionSource {
    /// Parse the mode flag.
    pub fn mode(&self) -> Result<Mode, String> {
        self.mode.parse::<Mode>().map_err(|e| e.to_string())
    }

    /// The options as one-per-line text.
    pub fn text(&self) -> Result<String, String> {
        if let Some(path) = &self.options_file {
            return sd_core::read_options_file(path).map_err(|e| e.to_string());
        }
        if self.options.is_empty() {
            Ok(sd_core::defaults::default_options_text())
        } else {
            Ok(self.options.join("\n"))
        }
    }

    /// Build a wheel with `config`'s weights.
    pub fn model(&self, config: &WheelConfig) -> Result<WheelModel, String> {
        let options = sd_core::parse_options(&self.text()?);
        WheelModel::build_with(self.mode()?, &options, config).map_err(|e| e.to_string())
    }

    /// Build a controller.
    pub fn controller(&self, config: WheelConfig) -> Result<SpinController, String> {
        SpinController::with_options(self.mode()?, &self.text()?, config).map_err(|e| e.to_string())
    }
}

/// Load the config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<WheelConfig, String> {
    match path {
        Some(path) => WheelConfig::from_path(path).map_err(|e| e.to_string()),
        None => Ok(WheelConfig::default()),
    }
}
