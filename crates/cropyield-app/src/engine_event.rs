//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use cropyield_core::{DistrictRecord, PredictionResult, RequestToken};

use crate::state::Screen;

/// Which service call a request event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Prediction,
    Districts,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Prediction => "prediction",
            RequestKind::Districts => "districts",
        }
    }
}

/// Domain events emitted by the Engine
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The router moved to another screen
    ScreenChanged { from: Screen, to: Screen },

    /// A request entered `Pending`
    RequestStarted {
        kind: RequestKind,
        token: RequestToken,
    },

    /// The latest prediction succeeded
    PredictionReady { result: PredictionResult },

    /// The district catalogue loaded
    DistrictsLoaded { records: Vec<DistrictRecord> },

    /// The latest request of `kind` failed
    RequestFailed { kind: RequestKind, message: String },

    /// A catalogue entry became selected
    DistrictSelected { record: DistrictRecord },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logs
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::ScreenChanged { .. } => "screen_changed",
            EngineEvent::RequestStarted { .. } => "request_started",
            EngineEvent::PredictionReady { .. } => "prediction",
            EngineEvent::DistrictsLoaded { .. } => "districts_loaded",
            EngineEvent::RequestFailed { .. } => "request_failed",
            EngineEvent::DistrictSelected { .. } => "district_selected",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
