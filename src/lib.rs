//! Crop Yield Library
//!
//! Entry points for the terminal UI and the headless runners. The binary only
//! parses arguments, starts logging and resolves settings before calling
//! into here.

pub mod headless;

pub use headless::runner::PredictInput;
pub use headless::HeadlessEvent;

use std::io;

use cropyield_app::Settings;
use cropyield_client::HttpCropApi;
use cropyield_core::prelude::*;

/// Install error reporting and file logging (stdout belongs to the UI).
///
/// Call once, before settings are loaded, so config warnings reach the log.
pub fn init_runtime_support() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    cropyield_core::logging::init()
}

/// Run the interactive terminal UI
pub async fn run_tui(settings: Settings) -> Result<()> {
    info!("Service: {}", settings.api.base_url);

    let result = cropyield_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Crop yield client exiting");
    result
}

/// Submit one prediction, printing NDJSON events to stdout.
///
/// Returns whether the prediction succeeded.
pub async fn run_headless_predict(settings: Settings, input: PredictInput) -> Result<bool> {
    info!("Headless prediction for {} in {}", input.crop_name, input.district);

    let api = HttpCropApi::new(&settings.api.base_url)?;
    let mut stdout = io::stdout();
    report_error(headless::runner::run_predict(settings, api, &input, &mut stdout).await)
}

/// Load the district catalogue, printing NDJSON events to stdout
pub async fn run_headless_districts(settings: Settings, select: Option<String>) -> Result<bool> {
    info!("Headless district catalogue");

    let api = HttpCropApi::new(&settings.api.base_url)?;
    let mut stdout = io::stdout();
    report_error(
        headless::runner::run_districts(settings, api, select.as_deref(), &mut stdout).await,
    )
}

/// Mirror a run error onto stdout so NDJSON consumers see it too
fn report_error(result: Result<bool>) -> Result<bool> {
    if let Err(ref e) = result {
        error!("Headless run failed: {}", e);
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }
    result
}
