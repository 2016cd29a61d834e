//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `prediction`: Prediction form handlers
//! - `districts`: District catalogue handlers

pub(crate) mod districts;
pub(crate) mod keys;
pub(crate) mod prediction;
pub(crate) mod update;


use cropyield_core::{PredictionRequest, RequestToken};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send `request` to `POST /predict`; the completion carries `token`
    SubmitPrediction {
        token: RequestToken,
        request: PredictionRequest,
    },

    /// Fetch `GET /districts`; the completion carries `token`
    LoadDistricts { token: RequestToken },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
