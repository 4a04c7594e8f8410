//! Host surface: the system actions the launcher consumes.
//!
//! The core never talks to the browser, the clipboard or the terminal
//! directly. It goes through `Host`, which the binary implements with
//! `SystemHost` and tests implement with a recorder.

use crate::error::{ErrorSeverity, LauncherError, Result};
use crate::logging;

/// Toast variant determines the icon of the notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Success toast - checkmark icon
    Success,
    /// Warning toast - warning icon
    Warning,
    /// Error toast - X icon
    Error,
    /// Info toast - info icon
    #[default]
    Info,
}

impl ToastVariant {
    /// Get the icon character for this variant
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✕",
            ToastVariant::Info => "ℹ",
        }
    }

    /// Convert from ErrorSeverity to ToastVariant
    pub fn from_severity(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => ToastVariant::Info,
            ErrorSeverity::Warning => ToastVariant::Warning,
            ErrorSeverity::Error => ToastVariant::Error,
        }
    }
}

/// A transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub message: Option<String>,
}

impl Toast {
    pub fn new(variant: ToastVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            message: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, title)
    }

    /// Notice for a failed action, styled by the error's severity.
    pub fn from_error(error: &LauncherError) -> Self {
        Self::new(
            ToastVariant::from_severity(error.severity()),
            error.user_message(),
        )
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// System actions supplied by the host.
pub trait Host {
    /// Open `url` in the user's default handler.
    fn open_url(&self, url: &str) -> Result<()>;

    /// Place `text` on the system clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Display a transient notice.
    fn show_toast(&self, toast: Toast);
}

/// Host backed by the real system: default browser, clipboard and stderr.
#[derive(Debug, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn open_url(&self, url: &str) -> Result<()> {
        match open::that(url) {
            Ok(()) => {
                logging::log_action_event("open", url, true);
                Ok(())
            }
            Err(e) => {
                logging::log_action_event("open", url, false);
                Err(LauncherError::OpenFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        logging::log_action_event("copy", "clipboard", result.is_ok());
        result.map_err(|e| LauncherError::Clipboard(e.to_string()))
    }

    fn show_toast(&self, toast: Toast) {
        tracing::debug!(variant = ?toast.variant, title = %toast.title, "Showing toast");
        eprintln!("{} {}", toast.variant.icon(), toast.title);
        if let Some(message) = &toast.message {
            eprintln!("  {}", message);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::*;

    /// Host that records every call instead of touching the system.
    #[derive(Default)]
    pub struct RecordingHost {
        pub opened: RefCell<Vec<String>>,
        pub copied: RefCell<Vec<String>>,
        pub toasts: RefCell<Vec<Toast>>,
        pub fail_open: bool,
        pub fail_copy: bool,
    }

    impl RecordingHost {
        pub fn failing_open() -> Self {
            Self {
                fail_open: true,
                ..Self::default()
            }
        }

        pub fn failing_copy() -> Self {
            Self {
                fail_copy: true,
                ..Self::default()
            }
        }

        pub fn toast_titles(&self) -> Vec<String> {
            self.toasts.borrow().iter().map(|t| t.title.clone()).collect()
        }
    }

    impl Host for RecordingHost {
        fn open_url(&self, url: &str) -> Result<()> {
            if self.fail_open {
                return Err(LauncherError::OpenFailed {
                    url: url.to_string(),
                    message: "no handler".to_string(),
                });
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn copy_to_clipboard(&self, text: &str) -> Result<()> {
            if self.fail_copy {
                return Err(LauncherError::Clipboard("clipboard unavailable".to_string()));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn show_toast(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_from_error_uses_severity_and_generic_message() {
        let toast = Toast::from_error(&LauncherError::MissingInput);
        assert_eq!(toast.variant, ToastVariant::Warning);
        assert_eq!(toast.title, "Prompt is missing");

        let toast = Toast::from_error(&LauncherError::Clipboard("x11 gone".to_string()));
        assert_eq!(toast.variant, ToastVariant::Error);
        assert_eq!(toast.title, "Failed to copy to clipboard");
    }

    #[test]
    fn test_toast_builders() {
        let toast = Toast::success("Copied").with_message("p1");
        assert_eq!(toast.variant, ToastVariant::Success);
        assert_eq!(toast.message.as_deref(), Some("p1"));
        assert_eq!(ToastVariant::default(), ToastVariant::Info);
        assert_eq!(ToastVariant::Error.icon(), "✕");
    }

    #[test]
    #[cfg(feature = "system-tests")]
    #[ignore = "Opens the system browser - run with --features system-tests -- --ignored"]
    fn test_system_host_opens_url() {
        SystemHost.open_url("https://deepnote.com").unwrap();
    }
}
