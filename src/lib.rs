//! Deepnote launcher - search and open Deepnote projects, forward prompts to Deepnote AI
//!
//! The library holds the project-list pipeline (credential → fetch → filter →
//! present) and the prompt forwarder. System actions go through the `host`
//! module so the core stays testable without a browser or clipboard.

pub mod config;
pub mod credentials;
pub mod error;
pub mod host;
pub mod logging;
pub mod projects;
pub mod prompt;
pub mod state;
pub mod terminal;
