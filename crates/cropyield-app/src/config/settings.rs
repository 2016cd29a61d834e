//! Settings loading, overrides and the default config file

use std::path::{Path, PathBuf};

use cropyield_client::parse_base_url;
use cropyield_core::prelude::*;

use super::types::Settings;

/// Directory under the platform config dir holding our files
pub const CONFIG_DIR_NAME: &str = "crop-yield";

pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `[api] base_url`
pub const API_URL_ENV: &str = "CROPYIELD_API_URL";

/// `<config_dir>/crop-yield/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply the environment and command-line overrides, lowest precedence first
pub fn apply_overrides(settings: &mut Settings, env_api_url: Option<String>, flag_api_url: Option<&str>) {
    if let Some(url) = env_api_url.filter(|u| !u.trim().is_empty()) {
        debug!("{} overrides base_url: {}", API_URL_ENV, url);
        settings.api.base_url = url;
    }
    if let Some(url) = flag_api_url {
        debug!("--api-url overrides base_url: {}", url);
        settings.api.base_url = url.to_string();
    }
}

/// Build the effective settings: defaults < file < env < flag.
///
/// An explicit `config_path` that does not exist is an error; the default
/// location is allowed to be missing. The resulting `base_url` must parse.
pub fn resolve_settings(config_path: Option<&Path>, flag_api_url: Option<&str>) -> Result<Settings> {
    let mut settings = match config_path {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => load_settings(path),
        None => default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    };

    apply_overrides(&mut settings, std::env::var(API_URL_ENV).ok(), flag_api_url);
    parse_base_url(&settings.api.base_url)?;

    info!(
        "Settings: base_url={} start_screen={:?}",
        settings.api.base_url, settings.behavior.start_screen
    );
    Ok(settings)
}

/// Write the default config file unless one already exists.
///
/// Returns the path of the (existing or new) file.
pub fn init_config(config_path: Option<&Path>) -> Result<PathBuf> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()
            .ok_or_else(|| Error::config("No configuration directory on this platform"))?,
    };

    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    std::fs::write(&path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Wrote default config to {:?}", path);
    Ok(path)
}

fn generate_default_config() -> String {
    r#"# Crop Yield Prediction client configuration

[api]
base_url = "http://127.0.0.1:7860"   # Overridden by CROPYIELD_API_URL or --api-url
region = "West Bengal"               # Sent as `region` with every prediction

[ui]
toast_duration_ms = 3000
show_footer = true

[behavior]
start_screen = "landing"             # landing | prediction | districts
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartScreen;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_file_logs_a_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let settings = tracing::subscriber::with_default(subscriber, || load_settings(&path));
        assert_eq!(settings, Settings::default());

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Failed to parse"));
    }

    #[test]
    fn test_file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntoast_duration_ms = 500\n").unwrap();
        assert_eq!(load_settings(&path).ui.toast_duration_ms, 500);
    }

    #[test]
    fn test_flag_beats_env_beats_file() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://file:1".into();

        apply_overrides(&mut settings, Some("http://env:2".into()), None);
        assert_eq!(settings.api.base_url, "http://env:2");

        apply_overrides(&mut settings, Some("http://env:2".into()), Some("http://flag:3"));
        assert_eq!(settings.api.base_url, "http://flag:3");
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, Some("  ".into()), None);
        assert_eq!(settings.api.base_url, "http://127.0.0.1:7860");
    }

    #[test]
    #[serial]
    fn test_resolve_reads_env_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[behavior]\nstart_screen = \"prediction\"\n").unwrap();

        std::env::set_var(API_URL_ENV, "http://10.0.0.5:7860");
        let settings = resolve_settings(Some(&path), None);
        std::env::remove_var(API_URL_ENV);

        let settings = settings.unwrap();
        assert_eq!(settings.api.base_url, "http://10.0.0.5:7860");
        assert_eq!(settings.behavior.start_screen, StartScreen::Prediction);
    }

    #[test]
    #[serial]
    fn test_resolve_rejects_invalid_url() {
        std::env::remove_var(API_URL_ENV);
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let err = resolve_settings(Some(&path), Some("not a url")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_explicit_missing_path_is_error() {
        let dir = tempdir().unwrap();
        let err = resolve_settings(Some(&dir.path().join("nope.toml")), None).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_init_config_writes_parseable_defaults_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let written = init_config(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_settings(&path), Settings::default());

        std::fs::write(&path, "[ui]\nshow_footer = false\n").unwrap();
        init_config(Some(&path)).unwrap();
        assert!(!load_settings(&path).ui.show_footer);
    }
}
