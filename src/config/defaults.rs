//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Projects listing endpoint (staging API)
pub const DEFAULT_PROJECTS_ENDPOINT: &str = "https://api-ra-15422.deepnote-staging.com/v1/projects";

/// Notebook that receives forwarded prompts through the `__prompt` query parameter
pub const DEFAULT_PROMPT_NOTEBOOK_URL: &str = "https://ra-15422.deepnote-staging.com/workspace/deepnote-b29c5ffe-318b-4d24-9726-ff78fc714ef2/project/Deepnote-AI-8e824e62-aa97-47df-875c-70f9e16e67cf/notebook/70b60195729a4a4f9aaaab2524ddaaf3";

/// Keyring service under which the API key is stored
pub const DEFAULT_KEYRING_SERVICE: &str = "com.deepnote.launcher";

/// Location of the optional config file
pub const CONFIG_FILE_PATH: &str = "~/.deepnote-launcher/config.json";
