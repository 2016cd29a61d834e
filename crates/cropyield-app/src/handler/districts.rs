//! District catalogue handlers

use tracing::{debug, info, warn};

use cropyield_core::{DistrictCatalogue, DistrictRecord, RequestToken, Settlement};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub const LOADED_TOAST: &str = "Districts loaded successfully!";
pub const FAILED_TOAST: &str = "Error loading districts!";

/// Start `GET /districts` unless one is already in flight
pub fn handle_load(state: &mut AppState) -> UpdateResult {
    let screen = &mut state.districts;
    if screen.catalogue.is_pending() {
        debug!("District load already pending");
        return UpdateResult::none();
    }

    screen.selected = None;
    screen.highlighted = 0;
    let token = screen.catalogue.begin();
    info!("Loading districts {}", token);
    UpdateResult::action(UpdateAction::LoadDistricts { token })
}

pub fn handle_loaded(
    state: &mut AppState,
    token: RequestToken,
    result: Result<Vec<DistrictRecord>, String>,
) -> UpdateResult {
    let count = result.as_ref().map(|r| r.len()).ok();
    let outcome = result.map(DistrictCatalogue::new);

    match state.districts.catalogue.settle(token, outcome) {
        Settlement::Stale => debug!("Dropping stale district completion {}", token),
        Settlement::Applied => match count {
            Some(count) => {
                info!("Loaded {} districts", count);
                state.toasts.success(LOADED_TOAST);
            }
            None => {
                warn!("District load {} failed", token);
                state.toasts.error(FAILED_TOAST);
            }
        },
    }
    UpdateResult::none()
}

pub fn handle_select_highlighted(state: &mut AppState) -> UpdateResult {
    let name = state.districts.highlighted_record().map(|r| r.name.clone());
    match name {
        Some(name) => handle_select(state, &name),
        None => UpdateResult::none(),
    }
}

/// Pure selection by name; never touches the network
pub fn handle_select(state: &mut AppState, name: &str) -> UpdateResult {
    if state.districts.select(name) {
        debug!("Selected district {:?}", state.districts.selected);
    }
    UpdateResult::none()
}
