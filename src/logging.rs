//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.deepnote-launcher/logs/deepnote-launcher.jsonl) - structured, one event per line
//! - **Compact to stderr** - human-readable, errors only unless `RUST_LOG` is set
//!
//! # Usage
//!
//! ```rust,ignore
//! use deepnote_launcher::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! // Use tracing macros directly
//! tracing::info!(event_type = "app_start", "Launcher started");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-10-16T10:30:45.123Z","level":"INFO","target":"deepnote_launcher::projects::client","fields":{"event_type":"fetch","action":"settled","count":12}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "deepnote-launcher.jsonl";
const FILE_FILTER: &str = "info,ureq=warn";
const STDERR_FILTER: &str = "error";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// If the log file can't be opened only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    init_in(&get_log_dir())
}

/// Same as [`init`], with the JSONL file placed in `log_dir`.
pub fn init_in(log_dir: &Path) -> LoggingGuard {
    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join(LOG_FILE_NAME);

    // Stderr stays quiet unless RUST_LOG asks otherwise; notices are printed by the host
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STDERR_FILTER));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact()
        .with_filter(stderr_filter);

    let file = OpenOptions::new().create(true).append(true).open(&log_path);

    match file {
        Ok(file) => {
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

            let json_layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .with_filter(EnvFilter::new(FILE_FILTER));

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(json_layer)
                .init();

            tracing::debug!(
                event_type = "app_lifecycle",
                action = "started",
                log_path = %log_path.display(),
                "Logging initialized"
            );

            LoggingGuard {
                _file_guard: Some(file_guard),
            }
        }
        Err(e) => {
            tracing_subscriber::registry().with(stderr_layer).init();

            tracing::warn!(
                error = %e,
                log_path = %log_path.display(),
                "Failed to open log file, logging to stderr only"
            );

            LoggingGuard { _file_guard: None }
        }
    }
}

/// Get the log directory path (~/.deepnote-launcher/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".deepnote-launcher").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("deepnote-launcher-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log a project fetch lifecycle event.
///
/// `count` is the number of projects on success, `None` when the fetch failed
/// or has not settled yet.
pub fn log_fetch_event(action: &str, ticket: u64, count: Option<usize>) {
    match count {
        Some(count) => {
            tracing::info!(
                event_type = "fetch",
                action = action,
                ticket = ticket,
                count = count,
                "Projects fetch {} ({} projects)", action, count
            );
        }
        None => {
            tracing::info!(
                event_type = "fetch",
                action = action,
                ticket = ticket,
                "Projects fetch {}", action
            );
        }
    }
}

/// Log a user action (open, copy, forward) with its outcome
pub fn log_action_event(action: &str, target: &str, success: bool) {
    if success {
        tracing::info!(
            event_type = "action",
            action = action,
            target = target,
            success = true,
            "{} {}", action, target
        );
    } else {
        tracing::warn!(
            event_type = "action",
            action = action,
            target = target,
            success = false,
            "{} {} failed", action, target
        );
    }
}
