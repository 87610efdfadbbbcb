//! Configuration and CLI argument handling

use crate::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "A single-screen terminal countdown timer")]
#[command(version)]
pub struct Config {
    /// Color theme: default, dark, light, ocean or forest
    #[arg(short, long, default_value = "default")]
    pub theme: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Do not capture mouse clicks
    #[arg(long)]
    pub no_mouse: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Resolve the log directory, `<data dir>/countdown/logs` unless overridden.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|dir| dir.join("countdown").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    /// The selected theme, falling back to the default for unknown IDs.
    pub fn theme(&self) -> &'static Theme {
        Theme::by_id(&self.theme)
    }

    pub fn mouse_enabled(&self) -> bool {
        !self.no_mouse
    }
}
