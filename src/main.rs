mod config;
mod consts;
mod dashboard;
mod events;
mod logging;
mod session;
mod ui;
mod weather;

use crate::config::{Config, get_config_path};
use crate::session::{SessionSettings, run_headless_mode, run_tui_mode, setup_session};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal weather dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every mode that runs load cycles.
#[derive(ClapArgs, Debug)]
struct LoadOptions {
    /// Location to load first; defaults to the configured location.
    #[arg(long, value_name = "LOCATION")]
    location: Option<String>,

    /// Simulated provider delay in milliseconds.
    #[arg(long, value_name = "MILLIS")]
    delay_ms: Option<u64>,

    /// Probability (0.0 to 1.0) that a load cycle fails.
    #[arg(long, value_name = "RATE")]
    failure_rate: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        #[command(flatten)]
        load: LoadOptions,

        /// Paint the dashboard background.
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Load once and print the dashboard to stdout
    Show {
        #[command(flatten)]
        load: LoadOptions,
    },
    /// Show the configuration file path and its values
    Config {
        /// Write the default configuration if no file exists yet.
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config_path = get_config_path()?;
    let args = Args::parse();
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;

    match args.command {
        Command::Start {
            load,
            with_background,
        } => {
            let settings = resolve_settings(&config, load, with_background);
            run_tui_mode(setup_session(settings)).await
        }
        Command::Show { load } => {
            let settings = resolve_settings(&config, load, false);
            run_headless_mode(setup_session(settings)).await
        }
        Command::Config { init } => {
            if init && !config_path.exists() {
                config
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                println!("Wrote default configuration.");
            }
            println!("Config file: {}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn resolve_settings(config: &Config, load: LoadOptions, with_background: bool) -> SessionSettings {
    SessionSettings::resolve(
        config,
        load.location,
        load.delay_ms,
        load.failure_rate,
        with_background,
    )
}
