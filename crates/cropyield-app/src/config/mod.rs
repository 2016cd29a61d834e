//! Configuration file parsing for the crop yield client
//!
//! Supports `<config_dir>/crop-yield/config.toml` plus the
//! `CROPYIELD_API_URL` environment override.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, init_config, load_settings, resolve_settings,
    API_URL_ENV, CONFIG_FILENAME,
};
pub use types::*;
