//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;

use cropyield_app::{Engine, Settings};
use cropyield_client::{CropApi, HttpCropApi};
use cropyield_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the configured prediction service
pub async fn run(settings: Settings) -> Result<()> {
    let api = HttpCropApi::new(&settings.api.base_url)?;
    info!("Using prediction service at {}", api.base_url());

    let mut engine = Engine::new(settings, api);
    let mut term = terminal::enter()?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::leave();

    result
}

/// Main event loop: drain completions, draw, then wait for input.
///
/// Service calls run on the runtime's worker threads while this loop blocks
/// in `event::poll` for at most one tick.
fn run_loop<A>(terminal: &mut DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: CropApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal input")? {
            engine.process_message(message);
        }
    }

    Ok(())
}
