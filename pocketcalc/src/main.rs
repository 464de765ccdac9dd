//! pocketcalc - a four-function calculator
//!
//! Digits, one pending operator, equals and clear. Dark mode lives in the
//! settings panel.

mod app;
mod engine;
mod format;
mod keypad;
mod screen;

use std::path::PathBuf;

use app::PocketCalcApp;
use clap::Parser;
use eframe::NativeOptions;
use pocketcore::config::ConfigError;
use pocketcore::CalcConfig;

#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about)]
struct Args {
    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(CalcConfig::default_path);
    let (mut config, load_error) = match CalcConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (CalcConfig::default(), Some(err)),
    };
    if args.dark {
        config.dark_mode = true;
    }

    // logging needs the config's filter, so load problems are reported after
    pocketcore::logging::init(&pocketcore::logging::verbosity_filter(args.verbose, &config.log_filter));
    match load_error {
        None => {}
        Some(ConfigError::NotFound(_)) => tracing::debug!("no config file, using defaults"),
        Some(err) => tracing::warn!(error = %err, "ignoring config file"),
    }
    tracing::info!(config = %config_path.display(), dark_mode = config.dark_mode, "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "pocketcalc",
        options,
        Box::new(move |cc| Box::new(PocketCalcApp::new(cc, &config))),
    )
}
