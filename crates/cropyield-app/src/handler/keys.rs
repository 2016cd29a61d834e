//! Key event handlers for each screen

use cropyield_core::{FieldKind, RequestState};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Landing => handle_key_landing(key),
        Screen::Prediction => handle_key_prediction(state, key),
        Screen::Districts => handle_key_districts(state, key),
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        // "Get Started"
        InputKey::Enter | InputKey::Char('p') => Some(Message::Navigate(Screen::Prediction)),
        InputKey::Char('d') => Some(Message::Navigate(Screen::Districts)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Every printable key is text input here, so navigation uses non-character keys
fn handle_key_prediction(state: &AppState, key: InputKey) -> Option<Message> {
    let on_choice = state.prediction.focus.kind() == FieldKind::Choice;

    match key {
        InputKey::Esc => Some(Message::Navigate(Screen::Landing)),
        InputKey::CharCtrl('d') => Some(Message::Navigate(Screen::Districts)),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevField),

        InputKey::Right if on_choice => Some(Message::NextDistrictChoice),
        InputKey::Left if on_choice => Some(Message::PrevDistrictChoice),

        InputKey::Enter => Some(Message::SubmitPrediction),
        InputKey::CharCtrl('n') => Some(Message::NewPrediction),

        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        _ => None,
    }
}

fn handle_key_districts(state: &AppState, key: InputKey) -> Option<Message> {
    let failed = matches!(state.districts.catalogue.state(), RequestState::Failed(_));

    match key {
        InputKey::Esc => Some(Message::Navigate(Screen::Landing)),
        InputKey::Char('p') => Some(Message::Navigate(Screen::Prediction)),
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::HighlightPrevDistrict),
        InputKey::Down | InputKey::Char('j') => Some(Message::HighlightNextDistrict),
        InputKey::Enter => Some(Message::SelectHighlightedDistrict),

        InputKey::Char('r') if failed => Some(Message::LoadDistricts),
        _ => None,
    }
}
