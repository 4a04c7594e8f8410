//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::CONFIG_FILE_PATH;
use super::types::Config;

/// Load configuration from ~/.deepnote-launcher/config.json
///
/// Returns Config::default() if the file is missing or can't be parsed.
pub fn load_config() -> Config {
    let config_path = PathBuf::from(shellexpand::tilde(CONFIG_FILE_PATH).as_ref());
    load_config_from(&config_path)
}

/// Load configuration from an explicit path, falling back to defaults.
#[instrument(name = "load_config", skip_all, fields(path = %config_path.display()))]
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!("Config file not found, using defaults");
        return Config::default();
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(error = %e, "Failed to read config file, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&contents) {
        Ok(config) => {
            info!("Successfully loaded config");
            config
        }
        Err(e) => {
            let error_hint = if e.to_string().contains("unknown variant") {
                "\n\nHint: 'defaultCategory' must be one of \"all\", \"favorites\", \"dataapp\", \"template\"."
            } else {
                ""
            };

            warn!(
                error = %e,
                hint = %error_hint,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
