//! Crop Yield - terminal client for crop yield prediction
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crop_yield::PredictInput;
use cropyield_app::config::{init_config, resolve_settings};
use cropyield_core::logging;
use cropyield_core::prelude::*;

/// Crop Yield - predict crop production and browse district crop data
#[derive(Parser, Debug)]
#[command(name = "cropyield", version)]
#[command(about = "Terminal client for crop yield prediction", long_about = None)]
struct Args {
    /// Prediction service base URL (overrides config and CROPYIELD_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Path to config file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one prediction and print NDJSON events (no TUI)
    Predict(PredictArgs),

    /// Load the district catalogue and print NDJSON events (no TUI)
    Districts {
        /// Select a district by name after loading
        #[arg(long, value_name = "NAME")]
        select: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
struct PredictArgs {
    #[arg(long)]
    crop: String,
    #[arg(long)]
    district: String,
    #[arg(long)]
    nitrogen: String,
    #[arg(long)]
    phosphorous: String,
    #[arg(long)]
    potassium: String,
    #[arg(long, allow_hyphen_values = true)]
    ph: String,
    #[arg(long)]
    area: String,
}

impl From<PredictArgs> for PredictInput {
    fn from(args: PredictArgs) -> Self {
        Self {
            crop_name: args.crop,
            district: args.district,
            nitrogen: args.nitrogen,
            phosphorous: args.phosphorous,
            potassium: args.potassium,
            ph: args.ph,
            area: args.area,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    crop_yield::init_runtime_support()?;

    if args.init_config {
        let path = init_config(args.config.as_deref())?;
        eprintln!("Config file: {}", path.display());
        eprintln!("Log file: {}", logging::get_current_log_file()?.display());
        return Ok(());
    }

    let settings = resolve_settings(args.config.as_deref(), args.api_url.as_deref())?;

    let succeeded = match args.command {
        None => return crop_yield::run_tui(settings).await,
        Some(Command::Predict(predict)) => {
            crop_yield::run_headless_predict(settings, predict.into()).await?
        }
        Some(Command::Districts { select }) => {
            crop_yield::run_headless_districts(settings, select).await?
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
