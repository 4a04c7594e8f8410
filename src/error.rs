use thiserror::Error;
use tracing::{error, warn};

/// Error severity for notice display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable, user can fix it
    Error,    // action failed
}

/// Failure to load the project list.
///
/// Unauthenticated, server and transport failures are deliberately not
/// distinguished: they all surface as the same notice. The cause is only
/// kept for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch projects: {cause}")]
pub struct FetchError {
    cause: String,
}

impl FetchError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Diagnostic cause for logging. Never shown to the user.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Domain-specific errors for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Prompt is missing")]
    MissingInput,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to open '{url}': {message}")]
    OpenFailed { url: String, message: String },

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Credential store error: {0}")]
    Credential(String),
}

impl LauncherError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingInput => ErrorSeverity::Warning,
            Self::Fetch(_) => ErrorSeverity::Error,
            Self::OpenFailed { .. } => ErrorSeverity::Error,
            Self::Clipboard(_) => ErrorSeverity::Error,
            Self::InvalidUrl { .. } => ErrorSeverity::Error,
            Self::Credential(_) => ErrorSeverity::Warning,
        }
    }

    /// Text for the user-facing notice. Kept generic so causes don't leak.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput => "Prompt is missing".to_string(),
            Self::Fetch(_) => "Failed to fetch projects".to_string(),
            Self::OpenFailed { .. } => "Failed to open URL".to_string(),
            Self::Clipboard(_) => "Failed to copy to clipboard".to_string(),
            Self::InvalidUrl { url, .. } => format!("Invalid URL: {}", url),
            Self::Credential(msg) => format!("Credential issue: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use deepnote_launcher::error::ResultExt;
///
/// // Log and continue if the state file can't be read
/// let state = read_state().log_err();
///
/// // Log as warning for expected failures
/// let cached = read_config().warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_user_message_hides_cause() {
        let err = LauncherError::from(FetchError::new("http status: 401"));
        assert_eq!(err.user_message(), "Failed to fetch projects");
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_open_failed_message_is_generic() {
        let err = LauncherError::OpenFailed {
            url: "https://example.com".to_string(),
            message: "no handler".to_string(),
        };
        assert_eq!(err.user_message(), "Failed to open URL");
    }

    #[test]
    fn test_missing_input_is_warning() {
        assert_eq!(
            LauncherError::MissingInput.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(LauncherError::MissingInput.user_message(), "Prompt is missing");
    }

    #[test]
    fn test_result_ext_returns_value_on_ok() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
        let err: std::result::Result<u32, String> = Err("boom".to_string());
        assert_eq!(err.warn_on_err(), None);
    }
}
