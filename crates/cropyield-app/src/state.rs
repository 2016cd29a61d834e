//! Application state (Model in TEA pattern)

use std::time::Duration;

use cropyield_core::{
    DistrictCatalogue, DistrictRecord, FarmInputForm, FormField, PredictionResult,
    RequestLifecycle,
};

use crate::config::{Settings, StartScreen};
use crate::toast::Toasts;

/// The screen currently routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Prediction,
    Districts,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Home",
            Screen::Prediction => "Crop Yield Prediction",
            Screen::Districts => "District Crop Information",
        }
    }
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Landing => Screen::Landing,
            StartScreen::Prediction => Screen::Prediction,
            StartScreen::Districts => Screen::Districts,
        }
    }
}

/// Application run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────
// Prediction screen
// ─────────────────────────────────────────────────────────

/// State owned by the prediction screen while it is mounted
#[derive(Debug, Clone)]
pub struct PredictionScreenState {
    pub form: FarmInputForm,
    /// Field receiving keystrokes
    pub focus: FormField,
    pub request: RequestLifecycle<PredictionResult>,
}

impl Default for PredictionScreenState {
    fn default() -> Self {
        Self {
            form: FarmInputForm::new(),
            focus: FormField::CropName,
            request: RequestLifecycle::new(),
        }
    }
}

impl PredictionScreenState {
    /// Fresh form and an idle request; any in-flight completion becomes stale
    pub fn mount(&mut self) {
        self.form = FarmInputForm::new();
        self.focus = FormField::CropName;
        self.request.reset();
    }

    pub fn unmount(&mut self) {
        self.request.reset();
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.request.state().value()
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        !self.request.is_pending() && self.form.is_complete()
    }
}

// ─────────────────────────────────────────────────────────
// District screen
// ─────────────────────────────────────────────────────────

/// State owned by the district catalogue screen while it is mounted
#[derive(Debug, Clone, Default)]
pub struct DistrictScreenState {
    pub catalogue: RequestLifecycle<DistrictCatalogue>,
    /// Cursor position in the list
    pub highlighted: usize,
    /// Name of the selected record
    pub selected: Option<String>,
}

impl DistrictScreenState {
    pub fn mount(&mut self) {
        self.catalogue.reset();
        self.highlighted = 0;
        self.selected = None;
    }

    pub fn unmount(&mut self) {
        self.catalogue.reset();
        self.selected = None;
    }

    pub fn loaded(&self) -> Option<&DistrictCatalogue> {
        self.catalogue.state().value()
    }

    pub fn selected_record(&self) -> Option<&DistrictRecord> {
        let name = self.selected.as_deref()?;
        self.loaded()?.find(name)
    }

    pub fn highlighted_record(&self) -> Option<&DistrictRecord> {
        self.loaded()?.get(self.highlighted)
    }

    pub fn highlight_next(&mut self) {
        let len = self.loaded().map(|c| c.len()).unwrap_or(0);
        if len > 0 {
            self.highlighted = (self.highlighted + 1).min(len - 1);
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Select the record named `name`.
    ///
    /// An unknown name clears the selection. Returns `true` if the selection
    /// changed. Does nothing before the catalogue has loaded.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(catalogue) = self.loaded() else {
            return false;
        };

        let position = catalogue.position(name);
        let next = position.map(|_| name.to_string());
        if let Some(idx) = position {
            self.highlighted = idx;
        }

        if self.selected == next {
            return false;
        }
        self.selected = next;
        true
    }
}

// ─────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub phase: AppPhase,
    pub settings: Settings,
    pub prediction: PredictionScreenState,
    pub districts: DistrictScreenState,
    pub toasts: Toasts,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let toasts = Toasts::new(Duration::from_millis(settings.ui.toast_duration_ms));
        Self {
            screen: Screen::Landing,
            phase: AppPhase::Running,
            settings,
            prediction: PredictionScreenState::default(),
            districts: DistrictScreenState::default(),
            toasts,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Region string sent with predictions
    pub fn region(&self) -> &str {
        &self.settings.api.region
    }
}
