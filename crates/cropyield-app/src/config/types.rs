//! Configuration types for the crop yield client
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Section structs and enums

use serde::{Deserialize, Serialize};

use cropyield_client::DEFAULT_BASE_URL;
use cropyield_core::DEFAULT_REGION;

/// Screen shown when the TUI starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Landing,
    Prediction,
    Districts,
}

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Prediction service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Locale string sent as `region` with every prediction
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            region: default_region(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            show_footer: true,
        }
    }
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    #[serde(default)]
    pub start_screen: StartScreen,
}
