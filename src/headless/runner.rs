//! Headless mode runner - one request lifecycle without a terminal
//!
//! Each run feeds the Engine the same messages the key handler would, then
//! waits on the message channel until the request settles. Every engine
//! event is written to `out` as it happens.

use std::io::Write;

use tokio::sync::broadcast;
use tracing::{info, warn};

use cropyield_app::{message::Message, Engine, EngineEvent, Screen, Settings};
use cropyield_client::CropApi;
use cropyield_core::prelude::*;
use cropyield_core::{District, FormField};

use super::HeadlessEvent;

/// Raw prediction inputs, exactly as given on the command line
#[derive(Debug, Clone, Default)]
pub struct PredictInput {
    pub crop_name: String,
    pub district: String,
    pub nitrogen: String,
    pub phosphorous: String,
    pub potassium: String,
    pub ph: String,
    pub area: String,
}

impl PredictInput {
    fn text_fields(&self) -> [(FormField, &str); 6] {
        [
            (FormField::CropName, &self.crop_name),
            (FormField::Nitrogen, &self.nitrogen),
            (FormField::Phosphorous, &self.phosphorous),
            (FormField::Potassium, &self.potassium),
            (FormField::Ph, &self.ph),
            (FormField::Area, &self.area),
        ]
    }
}

/// Submit one prediction and report its lifecycle.
///
/// Returns `Ok(true)` if the prediction succeeded, `Ok(false)` if the service
/// call failed, and `Err` for bad input.
pub async fn run_predict<A, W>(
    settings: Settings,
    api: A,
    input: &PredictInput,
    out: &mut W,
) -> Result<bool>
where
    A: CropApi + Send + Sync + 'static,
    W: Write,
{
    let district = District::from_name(&input.district)?;

    let mut engine = Engine::new(settings, api);
    let mut events = engine.subscribe();

    engine.process_message(Message::Navigate(Screen::Prediction));
    for (field, value) in input.text_fields() {
        engine.process_message(Message::SetField {
            field,
            value: value.to_string(),
        });
    }
    engine.process_message(Message::ChooseDistrict(Some(district)));

    // Surface validation errors directly instead of as a toast
    engine.state.prediction.form.validate()?;

    engine.process_message(Message::SubmitPrediction);
    forward_events(&mut events, out)?;

    while engine.state.prediction.request.is_pending() {
        if !wait_for_next(&mut engine).await {
            break;
        }
        forward_events(&mut events, out)?;
    }

    engine.shutdown();
    Ok(engine.state.prediction.result().is_some())
}

/// Load the district catalogue and optionally select one entry.
///
/// Returns `Ok(true)` if the catalogue loaded (and the selection matched),
/// `Ok(false)` if the load failed.
pub async fn run_districts<A, W>(
    settings: Settings,
    api: A,
    select: Option<&str>,
    out: &mut W,
) -> Result<bool>
where
    A: CropApi + Send + Sync + 'static,
    W: Write,
{
    let mut engine = Engine::new(settings, api);
    let mut events = engine.subscribe();

    engine.process_message(Message::Navigate(Screen::Districts));
    forward_events(&mut events, out)?;

    while engine.state.districts.catalogue.is_pending() {
        if !wait_for_next(&mut engine).await {
            break;
        }
        forward_events(&mut events, out)?;
    }

    let loaded = engine.state.districts.loaded().is_some();
    if loaded {
        if let Some(name) = select {
            engine.process_message(Message::SelectDistrict(name.to_string()));
            forward_events(&mut events, out)?;

            if engine.state.districts.selected_record().is_none() {
                engine.shutdown();
                return Err(Error::unknown_district(name));
            }
        }
    }

    engine.shutdown();
    Ok(loaded)
}

/// Process one message; `false` once the run should stop
async fn wait_for_next<A>(engine: &mut Engine<A>) -> bool
where
    A: CropApi + Send + Sync + 'static,
{
    if !engine.process_next().await {
        warn!("Message channel closed before the request settled");
        return false;
    }
    if engine.should_quit() {
        info!("Quit requested");
        return false;
    }
    true
}

/// Write every pending engine event that has a headless form
fn forward_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.write_to(out)?;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(_) => return Ok(()),
        }
    }
}
