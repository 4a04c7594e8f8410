//! Launcher state persistence
//!
//! Remembers the last selected category between runs. Stored in
//! `~/.deepnote-launcher/state.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::projects::Category;

const STATE_VERSION: u32 = 1;

/// The full persisted state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LauncherState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_category: Option<Category>,
}

fn default_version() -> u32 {
    STATE_VERSION
}

/// Get the path to the state file: ~/.deepnote-launcher/state.json
pub fn get_state_file_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".deepnote-launcher").join("state.json")
}

/// Load the state file. Missing or unreadable files yield `None`.
pub fn load_state_from(path: &Path) -> Option<LauncherState> {
    if !path.exists() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse state file");
                None
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read state file");
            None
        }
    }
}

/// Save the state file (atomic write)
pub fn save_state_to(path: &Path, state: &LauncherState) -> bool {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            tracing::warn!(error = %e, "Failed to create state directory");
            return false;
        }
    }

    let json = match serde_json::to_string_pretty(state) {
        Ok(j) => j,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize state");
            return false;
        }
    };

    // Atomic write: temp file then rename
    let tmp_path = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&tmp_path, &json) {
        tracing::warn!(error = %e, "Failed to write temp state file");
        return false;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        tracing::warn!(error = %e, "Failed to rename temp state file");
        let _ = fs::remove_file(&tmp_path);
        return false;
    }

    tracing::debug!(path = %path.display(), "State saved");
    true
}

/// Last category selected by the user, if any
pub fn load_last_category() -> Option<Category> {
    load_state_from(&get_state_file_path())?.last_category
}

/// Remember `category` for the next run
pub fn save_last_category(category: Category) -> bool {
    let path = get_state_file_path();
    let mut state = load_state_from(&path).unwrap_or_default();
    state.version = STATE_VERSION;
    state.last_category = Some(category);
    save_state_to(&path, &state)
}
