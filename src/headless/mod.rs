//! Headless mode - NDJSON event output instead of the TUI
//!
//! Drives the same Engine as the terminal UI and writes one JSON object per
//! line for every request lifecycle transition, so scripts can call the
//! prediction service without parsing a screen.
//!
//! # Example Output
//!
//! ```json
//! {"event":"request_started","kind":"prediction","token":1,"timestamp":1704700001000}
//! {"event":"prediction","predicted_production":4.2,"temperature":30.0,"humidity":70.0,"rainfall":120.0,"timestamp":1704700001250}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use cropyield_app::{EngineEvent, RequestKind};
use cropyield_core::{DistrictRecord, PredictionResult};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request entered `Pending`
    RequestStarted {
        kind: &'static str,
        token: u64,
        timestamp: i64,
    },

    /// Prediction succeeded; absent readings are `null`
    Prediction {
        predicted_production: Option<f64>,
        temperature: Option<f64>,
        humidity: Option<f64>,
        rainfall: Option<f64>,
        timestamp: i64,
    },

    /// District catalogue loaded
    DistrictsLoaded {
        count: usize,
        names: Vec<String>,
        timestamp: i64,
    },

    /// A catalogue entry was selected
    DistrictSelected {
        name: String,
        description: String,
        major_crops: Vec<String>,
        fruits: Vec<String>,
        vegetables: Vec<String>,
        timestamp: i64,
    },

    /// A request settled as failed
    RequestFailed {
        kind: &'static str,
        message: String,
        timestamp: i64,
    },

    /// Input or setup error that stopped the run before any request
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event; screen changes and shutdown have no output
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::RequestStarted { kind, token } => {
                Some(Self::request_started(*kind, token.value()))
            }
            EngineEvent::PredictionReady { result } => Some(Self::prediction(result)),
            EngineEvent::DistrictsLoaded { records } => Some(Self::districts_loaded(records)),
            EngineEvent::DistrictSelected { record } => Some(Self::district_selected(record)),
            EngineEvent::RequestFailed { kind, message } => {
                Some(Self::request_failed(*kind, message.clone()))
            }
            EngineEvent::ScreenChanged { .. } | EngineEvent::Shutdown => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn request_started(kind: RequestKind, token: u64) -> Self {
        Self::RequestStarted {
            kind: kind.as_str(),
            token,
            timestamp: Self::now(),
        }
    }

    pub fn prediction(result: &PredictionResult) -> Self {
        Self::Prediction {
            predicted_production: result.predicted_production().value,
            temperature: result.temperature().value,
            humidity: result.humidity().value,
            rainfall: result.rainfall().value,
            timestamp: Self::now(),
        }
    }

    pub fn districts_loaded(records: &[DistrictRecord]) -> Self {
        Self::DistrictsLoaded {
            count: records.len(),
            names: records.iter().map(|r| r.name.clone()).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn district_selected(record: &DistrictRecord) -> Self {
        Self::DistrictSelected {
            name: record.name.clone(),
            description: record.description.clone(),
            major_crops: record.major_crop_list(),
            fruits: record.fruit_list(),
            vegetables: record.vegetable_list(),
            timestamp: Self::now(),
        }
    }

    pub fn request_failed(kind: RequestKind, message: String) -> Self {
        Self::RequestFailed {
            kind: kind.as_str(),
            message,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
