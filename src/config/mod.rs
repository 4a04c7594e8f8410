//! Configuration module - launcher settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.deepnote-launcher/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    CONFIG_FILE_PATH, DEFAULT_KEYRING_SERVICE, DEFAULT_PROJECTS_ENDPOINT,
    DEFAULT_PROMPT_NOTEBOOK_URL,
};

pub use types::Config;

pub use loader::{load_config, load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
