//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use cropyield_app::config::Settings;
use cropyield_client::test_utils::{test_record, test_result};
use cropyield_core::{District, DistrictCatalogue, FormField};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 32);
    term.draw_with(|frame| view(frame, state));
    term
}

fn loaded_districts(state: &mut AppState) {
    let token = state.districts.catalogue.begin();
    let _ = state.districts.catalogue.settle(
        token,
        Ok(DistrictCatalogue::new(vec![
            test_record("Bankura", "Rice; Potato"),
            test_record("Nadia", "Rice; Jute ;Wheat"),
        ])),
    );
}

#[test]
fn test_landing_screen() {
    let state = AppState::new();
    let term = render(&state);

    assert!(term.buffer_contains("About the Project"));
    assert!(term.buffer_contains("Get Started"));
    assert!(term.buffer_contains("GO GREEN"));
}

#[test]
fn test_footer_can_be_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_footer = false;
    let state = AppState::with_settings(settings);

    let term = render(&state);
    assert!(!term.buffer_contains("GO GREEN"));
}

#[test]
fn test_prediction_screen_idle() {
    let mut state = AppState::new();
    state.screen = Screen::Prediction;

    let term = render(&state);
    assert!(term.buffer_contains("Crop Name"));
    assert!(term.buffer_contains("Select District"));
    assert!(term.buffer_contains("Prediction results will appear here"));
}

#[test]
fn test_prediction_screen_pending_then_success() {
    let mut state = AppState::new();
    state.screen = Screen::Prediction;
    state.prediction.form.set_text(FormField::CropName, "Rice");
    state.prediction.form.district = Some(District::Nadia);
    let token = state.prediction.request.begin();

    let term = render(&state);
    assert!(term.buffer_contains("Analyzing farm data..."));
    assert!(term.buffer_contains("Predicting..."));

    let _ = state.prediction.request.settle(token, Ok(test_result(4.2)));
    let term = render(&state);
    assert!(term.buffer_contains("4.2 tonnes"));
    assert!(term.buffer_contains("Make Another Prediction"));
    assert!(term.buffer_contains("Predict Yield"));
}

#[test]
fn test_districts_screen_loading() {
    let mut state = AppState::new();
    state.screen = Screen::Districts;
    state.districts.catalogue.begin();

    let term = render(&state);
    assert!(term.buffer_contains("Loading districts..."));
    assert!(term.buffer_contains("Select a district to view details"));
}

#[test]
fn test_districts_screen_with_selection() {
    let mut state = AppState::new();
    state.screen = Screen::Districts;
    loaded_districts(&mut state);
    state.districts.select("Nadia");

    let term = render(&state);
    assert!(term.buffer_contains("Bankura"));
    assert!(term.buffer_contains("Major Field Crops"));
    assert!(term.buffer_contains("• Jute"));
    assert!(!term.buffer_contains("Select a district to view details"));
}

#[test]
fn test_toasts_overlay_body() {
    let mut state = AppState::new();
    state.toasts.success("Districts loaded successfully!");

    let term = render(&state);
    assert!(term.buffer_contains("Districts loaded successfully!"));
    // Overlay starts below the header
    assert!(!term.line_contains(0, "Districts loaded"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = AppState::new();
    for screen in [Screen::Landing, Screen::Prediction, Screen::Districts] {
        state.screen = screen;
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }
}
