//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Screen};

use super::{districts, keys::handle_key, prediction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.prune(Instant::now());
            UpdateResult::none()
        }

        Message::Navigate(screen) => navigate(state, screen),

        // ─────────────────────────────────────────────────────────
        // Prediction Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNextField => {
            state.prediction.focus = state.prediction.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevField => {
            state.prediction.focus = state.prediction.focus.prev();
            UpdateResult::none()
        }
        Message::InputChar(c) => prediction::handle_input_char(state, c),
        Message::InputBackspace => {
            let focus = state.prediction.focus;
            state.prediction.form.backspace(focus);
            UpdateResult::none()
        }
        Message::SetField { field, value } => {
            state.prediction.form.set_text(field, value);
            UpdateResult::none()
        }
        Message::NextDistrictChoice => {
            state.prediction.form.next_district();
            UpdateResult::none()
        }
        Message::PrevDistrictChoice => {
            state.prediction.form.prev_district();
            UpdateResult::none()
        }
        Message::ChooseDistrict(district) => {
            state.prediction.form.district = district;
            UpdateResult::none()
        }
        Message::SubmitPrediction => prediction::handle_submit(state),
        Message::PredictionCompleted { token, result } => {
            prediction::handle_completed(state, token, result)
        }
        Message::NewPrediction => prediction::handle_new_prediction(state),

        // ─────────────────────────────────────────────────────────
        // District Catalogue Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadDistricts => districts::handle_load(state),
        Message::DistrictsLoaded { token, result } => {
            districts::handle_loaded(state, token, result)
        }
        Message::HighlightNextDistrict => {
            state.districts.highlight_next();
            UpdateResult::none()
        }
        Message::HighlightPrevDistrict => {
            state.districts.highlight_prev();
            UpdateResult::none()
        }
        Message::SelectHighlightedDistrict => districts::handle_select_highlighted(state),
        Message::SelectDistrict(name) => districts::handle_select(state, &name),
    }
}

/// Unmount the current screen and mount `screen`
fn navigate(state: &mut AppState, screen: Screen) -> UpdateResult {
    if state.screen == screen {
        return UpdateResult::none();
    }

    debug!("Navigate {:?} -> {:?}", state.screen, screen);
    match state.screen {
        Screen::Landing => {}
        Screen::Prediction => state.prediction.unmount(),
        Screen::Districts => state.districts.unmount(),
    }

    state.screen = screen;
    match screen {
        Screen::Landing => UpdateResult::none(),
        Screen::Prediction => {
            state.prediction.mount();
            UpdateResult::none()
        }
        Screen::Districts => {
            state.districts.mount();
            UpdateResult::message(Message::LoadDistricts)
        }
    }
}
