//! Prediction form handlers

use tracing::{debug, info, warn};

use cropyield_core::{
    District, FieldKind, FormField, PredictionResult, RequestState, RequestToken, Settlement,
};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub const SUCCESS_TOAST: &str = "Prediction successful!";

/// Type into the focused field.
///
/// On the district choice a letter jumps to the next district starting with
/// it, the way a native select does.
pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    let focus = state.prediction.focus;
    if focus.kind() == FieldKind::Choice {
        let form = &mut state.prediction.form;
        form.district = next_district_with_initial(form.district, c).or(form.district);
        return UpdateResult::none();
    }

    if !state.prediction.form.push_char(focus, c) {
        debug!("{} rejected {:?}", focus.label(), c);
    }
    UpdateResult::none()
}

fn next_district_with_initial(current: Option<District>, c: char) -> Option<District> {
    let start = current.map(|d| d.index() + 1).unwrap_or(0);
    let n = District::ALL.len();
    (0..n)
        .map(|offset| District::ALL[(start + offset) % n])
        .find(|d| {
            d.as_str()
                .chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&c))
        })
}

/// Validate the form and start a `POST /predict`
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let screen = &mut state.prediction;
    if screen.request.is_pending() {
        debug!("Prediction already pending, ignoring submit");
        return UpdateResult::none();
    }

    if let Err(e) = screen.form.validate() {
        let first_bad = screen
            .form
            .missing_fields()
            .into_iter()
            .chain(screen.form.invalid_fields())
            .next();
        if let Some(field) = first_bad {
            screen.focus = field;
        }
        state.toasts.error(format!("Error: {e}"));
        return UpdateResult::none();
    }

    let request = screen.form.to_request(&state.settings.api.region);
    let token = screen.request.begin();
    info!("Submitting prediction {} for crop '{}'", token, request.crop);
    UpdateResult::action(UpdateAction::SubmitPrediction { token, request })
}

pub fn handle_completed(
    state: &mut AppState,
    token: RequestToken,
    result: Result<PredictionResult, String>,
) -> UpdateResult {
    let failure = result.as_ref().err().cloned();
    match state.prediction.request.settle(token, result) {
        Settlement::Stale => {
            debug!("Dropping stale prediction completion {}", token);
        }
        Settlement::Applied => match failure {
            None => {
                info!("Prediction {} succeeded", token);
                state.toasts.success(SUCCESS_TOAST);
            }
            Some(message) => {
                warn!("Prediction {} failed: {}", token, message);
                state.toasts.error(format!("Error: {message}"));
            }
        },
    }
    UpdateResult::none()
}

/// Return a settled request to idle, keeping the entered values
pub fn handle_new_prediction(state: &mut AppState) -> UpdateResult {
    match state.prediction.request.state() {
        RequestState::Succeeded(_) | RequestState::Failed(_) => {
            state.prediction.request.reset();
            state.prediction.focus = FormField::CropName;
        }
        RequestState::Idle | RequestState::Pending => {}
    }
    UpdateResult::none()
}
