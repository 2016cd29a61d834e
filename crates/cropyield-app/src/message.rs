//! Message types for the application (TEA pattern)

use cropyield_core::{District, DistrictRecord, FormField, PredictionResult, RequestToken};

use crate::input_key::InputKey;
use crate::state::Screen;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    /// Route to a screen, unmounting the current one
    Navigate(Screen),

    // ─────────────────────────────────────────────────────────
    // Prediction Form Messages
    // ─────────────────────────────────────────────────────────
    FocusNextField,
    FocusPrevField,

    /// Type a character into the focused field
    InputChar(char),

    /// Delete from the focused field
    InputBackspace,

    /// Replace a text field's value (headless input)
    SetField { field: FormField, value: String },

    NextDistrictChoice,
    PrevDistrictChoice,
    ChooseDistrict(Option<District>),

    /// Submit the form to `POST /predict`
    SubmitPrediction,

    /// A prediction request settled
    PredictionCompleted {
        token: RequestToken,
        result: Result<PredictionResult, String>,
    },

    /// Clear the result and return the form to idle ("Make Another Prediction")
    NewPrediction,

    // ─────────────────────────────────────────────────────────
    // District Catalogue Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the catalogue (on mount, or retry after a failure)
    LoadDistricts,

    /// A catalogue request settled
    DistrictsLoaded {
        token: RequestToken,
        result: Result<Vec<DistrictRecord>, String>,
    },

    HighlightNextDistrict,
    HighlightPrevDistrict,

    /// Select the highlighted record
    SelectHighlightedDistrict,

    /// Select a record by name
    SelectDistrict(String),
}
