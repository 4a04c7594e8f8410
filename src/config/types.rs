//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::projects::Category;

/// Launcher configuration. Every field is optional; getters fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Override for the projects listing endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_endpoint: Option<String>,
    /// Override for the notebook that receives forwarded prompts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_notebook_url: Option<String>,
    /// Category used when neither the command line nor the saved state picks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<Category>,
    /// Keyring service name for the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyring_service: Option<String>,
}

impl Config {
    /// Returns the projects endpoint, or DEFAULT_PROJECTS_ENDPOINT if not configured
    pub fn get_projects_endpoint(&self) -> &str {
        non_empty(&self.projects_endpoint).unwrap_or(DEFAULT_PROJECTS_ENDPOINT)
    }

    /// Returns the prompt notebook URL, or DEFAULT_PROMPT_NOTEBOOK_URL if not configured
    pub fn get_prompt_notebook_url(&self) -> &str {
        non_empty(&self.prompt_notebook_url).unwrap_or(DEFAULT_PROMPT_NOTEBOOK_URL)
    }

    /// Returns the configured default category, or `Category::All`
    pub fn get_default_category(&self) -> Category {
        self.default_category.unwrap_or_default()
    }

    /// Returns the keyring service, or DEFAULT_KEYRING_SERVICE if not configured
    pub fn get_keyring_service(&self) -> &str {
        non_empty(&self.keyring_service).unwrap_or(DEFAULT_KEYRING_SERVICE)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
