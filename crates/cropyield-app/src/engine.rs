//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the message channel, the TEA state, the settings and the
//! service handle. Both runners feed it messages and read state back out.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use cropyield_client::CropApi;
use cropyield_core::{RequestState, RequestToken};

use crate::config::Settings;
use crate::engine_event::{EngineEvent, RequestKind};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, Screen};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    screen: Screen,
    prediction_token: RequestToken,
    prediction_state: &'static str,
    districts_token: RequestToken,
    districts_state: &'static str,
    selected: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            screen: state.screen,
            prediction_token: state.prediction.request.latest_token(),
            prediction_state: state.prediction.request.state().label(),
            districts_token: state.districts.catalogue.latest_token(),
            districts_state: state.districts.catalogue.state().label(),
            selected: state.districts.selected.clone(),
        }
    }
}

/// Orchestration engine for the crop yield client.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Service handle
/// - Event broadcasting for external consumers
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, service tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    api: Arc<A>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: CropApi + Send + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(settings: Settings, api: A) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            api: Arc::new(api),
            event_tx,
        }
    }

    /// Route to the configured start screen
    pub fn start(&mut self) {
        let screen = Screen::from(self.settings.behavior.start_screen);
        info!("Starting on {:?}", screen);
        self.process_message(Message::Navigate(screen));
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);
        let post = StateSnapshot::capture(&self.state);

        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.screen != post.screen {
            self.emit(EngineEvent::ScreenChanged {
                from: pre.screen,
                to: post.screen,
            });
        }

        // Prediction lifecycle
        let prediction = self.state.prediction.request.state();
        if post.prediction_token != pre.prediction_token && prediction.is_pending() {
            self.emit(EngineEvent::RequestStarted {
                kind: RequestKind::Prediction,
                token: post.prediction_token,
            });
        }
        if pre.prediction_state == "pending" && post.prediction_token == pre.prediction_token {
            match prediction {
                RequestState::Succeeded(result) => self.emit(EngineEvent::PredictionReady {
                    result: result.clone(),
                }),
                RequestState::Failed(message) => self.emit(EngineEvent::RequestFailed {
                    kind: RequestKind::Prediction,
                    message: message.clone(),
                }),
                RequestState::Idle | RequestState::Pending => {}
            }
        }

        // District lifecycle
        let catalogue = self.state.districts.catalogue.state();
        if post.districts_token != pre.districts_token && catalogue.is_pending() {
            self.emit(EngineEvent::RequestStarted {
                kind: RequestKind::Districts,
                token: post.districts_token,
            });
        }
        if pre.districts_state == "pending" && post.districts_token == pre.districts_token {
            match catalogue {
                RequestState::Succeeded(loaded) => self.emit(EngineEvent::DistrictsLoaded {
                    records: loaded.records().to_vec(),
                }),
                RequestState::Failed(message) => self.emit(EngineEvent::RequestFailed {
                    kind: RequestKind::Districts,
                    message: message.clone(),
                }),
                RequestState::Idle | RequestState::Pending => {}
            }
        }

        if post.selected != pre.selected {
            if let Some(record) = self.state.districts.selected_record() {
                self.emit(EngineEvent::DistrictSelected {
                    record: record.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartScreen;
    use cropyield_client::test_utils::{test_record, test_result, FakeCropApi};
    use cropyield_core::{District, Error, FormField};
    use std::time::Duration;

    async fn next_message<A: CropApi + Send + Sync + 'static>(engine: &mut Engine<A>) {
        let processed = tokio::time::timeout(Duration::from_secs(5), engine.process_next())
            .await
            .expect("completion within timeout");
        assert!(processed);
    }

    fn fill_form<A: CropApi + Send + Sync + 'static>(engine: &mut Engine<A>) {
        engine.process_message(Message::Navigate(Screen::Prediction));
        for (field, value) in [
            (FormField::CropName, "Rice"),
            (FormField::Nitrogen, "90"),
            (FormField::Phosphorous, "42"),
            (FormField::Potassium, "43"),
            (FormField::Ph, "6.5"),
            (FormField::Area, "2"),
        ] {
            engine.process_message(Message::SetField {
                field,
                value: value.into(),
            });
        }
        engine.process_message(Message::ChooseDistrict(Some(District::Nadia)));
    }

    #[tokio::test]
    async fn test_prediction_round_trip_emits_events() {
        let mut engine = Engine::new(
            Settings::default(),
            FakeCropApi::new().with_prediction(Ok(test_result(4.2))),
        );
        let mut events = engine.subscribe();
        fill_form(&mut engine);

        engine.process_message(Message::SubmitPrediction);
        next_message(&mut engine).await;

        assert_eq!(engine.api().predict_calls(), 1);
        assert!(engine.state.prediction.result().is_some());

        let mut types = Vec::new();
        while let Ok(event) = events.try_recv() {
            types.push(event.event_type());
        }
        assert_eq!(types, vec!["screen_changed", "request_started", "prediction"]);
    }

    #[tokio::test]
    async fn test_start_screen_districts_loads_on_start() {
        let mut settings = Settings::default();
        settings.behavior.start_screen = StartScreen::Districts;
        let mut engine = Engine::new(
            settings,
            FakeCropApi::new().with_districts(Ok(vec![test_record("Nadia", "Rice; Jute")])),
        );

        engine.start();
        assert!(engine.state.districts.catalogue.is_pending());
        next_message(&mut engine).await;

        assert_eq!(engine.state.screen, Screen::Districts);
        assert_eq!(engine.state.districts.loaded().map(|c| c.len()), Some(1));
        assert_eq!(engine.api().district_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_then_retry_issues_second_request() {
        let api = FakeCropApi::new()
            .with_districts(Err(Error::http_status(
                500,
                "Failed to fetch district data (status 500)",
            )))
            .with_districts(Ok(vec![test_record("Nadia", "Rice")]));
        let mut engine = Engine::new(Settings::default(), api);
        let mut events = engine.subscribe();

        engine.process_message(Message::Navigate(Screen::Districts));
        next_message(&mut engine).await;
        assert!(engine
            .state
            .districts
            .catalogue
            .state()
            .error()
            .is_some_and(|m| m.contains("500")));

        engine.process_message(Message::LoadDistricts);
        next_message(&mut engine).await;
        assert_eq!(engine.api().district_calls(), 2);
        assert!(engine.state.districts.loaded().is_some());

        let failed = std::iter::from_fn(|| events.try_recv().ok())
            .filter(|e| matches!(e, EngineEvent::RequestFailed { .. }))
            .count();
        assert_eq!(failed, 1);
    }

    #[tokio::test]
    async fn test_selection_emits_once_and_never_calls_service() {
        let mut engine = Engine::new(
            Settings::default(),
            FakeCropApi::new().with_districts(Ok(vec![test_record("Nadia", "Rice")])),
        );
        engine.process_message(Message::Navigate(Screen::Districts));
        next_message(&mut engine).await;
        let mut events = engine.subscribe();

        engine.process_message(Message::SelectDistrict("Nadia".into()));
        engine.process_message(Message::SelectDistrict("Nadia".into()));

        assert_eq!(engine.api().district_calls(), 1);
        let selected = std::iter::from_fn(|| events.try_recv().ok())
            .filter(|e| matches!(e, EngineEvent::DistrictSelected { .. }))
            .count();
        assert_eq!(selected, 1);
    }
}
