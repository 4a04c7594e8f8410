//! Project browser state.
//!
//! Explicit transitions replace the reactive bindings of a list view:
//! credential available → fetch; fetch settles → replace list, clear loading;
//! category or search changes → the derived view is recomputed on demand.
//!
//! Every fetch gets a `FetchTicket`. Only the most recent ticket may settle
//! the state, so a slow response to an older trigger can't overwrite a newer
//! list.

use crate::credentials::{ApiKey, CredentialProvider};
use crate::error::{FetchError, LauncherError, Result};
use crate::host::{Host, Toast};
use crate::logging;

use super::client::ProjectFetcher;
use super::filter::{derive_view, Category};
use super::present::{present, RowAction, RowModel};
use super::types::Project;

/// Handle for one outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// State of the project list view.
#[derive(Debug)]
pub struct ProjectBrowser {
    /// Unmodified copy of the last successful fetch
    projects: Vec<Project>,
    is_loading: bool,
    category: Category,
    search_text: String,
    latest_ticket: u64,
    last_fetch_failed: bool,
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

impl ProjectBrowser {
    /// Fresh view. Loading until the first fetch settles or the key is found missing.
    pub fn new(category: Category) -> Self {
        Self {
            projects: Vec::new(),
            is_loading: true,
            category,
            search_text: String::new(),
            latest_ticket: 0,
            last_fetch_failed: false,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether the most recently settled fetch failed
    pub fn last_fetch_failed(&self) -> bool {
        self.last_fetch_failed
    }

    /// Read the key and, if present, fetch once.
    ///
    /// Returns `false` when no key is available; no request is made in that case.
    pub fn activate(
        &mut self,
        credentials: &dyn CredentialProvider,
        fetcher: &dyn ProjectFetcher,
        host: &dyn Host,
    ) -> bool {
        match credentials.credential() {
            Some(api_key) => {
                self.refresh(&api_key, fetcher, host);
                true
            }
            None => {
                tracing::info!("No API key configured, skipping project fetch");
                self.is_loading = false;
                host.show_toast(
                    Toast::warning("Deepnote API key is not set")
                        .with_message("Run `deepnote-launcher auth set <KEY>` or export DEEPNOTE_API_KEY"),
                );
                false
            }
        }
    }

    /// Fetch synchronously and settle the result.
    pub fn refresh(&mut self, api_key: &ApiKey, fetcher: &dyn ProjectFetcher, host: &dyn Host) {
        let ticket = self.begin_fetch();
        let result = fetcher.fetch_projects(api_key);
        self.settle(ticket, result, host);
    }

    /// Mark a fetch as started. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.is_loading = true;
        logging::log_fetch_event("started", self.latest_ticket, None);
        FetchTicket(self.latest_ticket)
    }

    /// Apply a fetch result.
    ///
    /// Returns `false` and leaves the state untouched if `ticket` is stale.
    /// On failure the previous list is kept and a notice is shown.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<Project>, FetchError>,
        host: &dyn Host,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Dropping stale fetch result"
            );
            return false;
        }

        self.is_loading = false;
        self.last_fetch_failed = result.is_err();
        match result {
            Ok(projects) => {
                logging::log_fetch_event("settled", ticket.0, Some(projects.len()));
                self.projects = projects;
            }
            Err(e) => {
                tracing::error!(ticket = ticket.0, cause = %e.cause(), "Error fetching projects");
                logging::log_fetch_event("failed", ticket.0, None);
                host.show_toast(Toast::from_error(&LauncherError::Fetch(e)));
            }
        }
        true
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    /// Projects matching the current category and search text, in server order.
    pub fn view(&self) -> Vec<&Project> {
        derive_view(&self.projects, self.category, &self.search_text)
    }

    /// Rows for the current view.
    pub fn rows(&self) -> Vec<RowModel> {
        self.view().into_iter().map(present).collect()
    }

    /// Run a row action through the host, reporting the outcome as a notice.
    pub fn perform(&self, action: &RowAction, host: &dyn Host) -> Result<()> {
        let result = match action {
            RowAction::OpenInBrowser { url } => host.open_url(url),
            RowAction::CopyToClipboard { title, content, .. } => {
                host.copy_to_clipboard(content).map(|()| {
                    tracing::debug!(action = %title, "Copied to clipboard");
                    host.show_toast(
                        Toast::success("Copied to clipboard").with_message(content.clone()),
                    );
                })
            }
        };

        if let Err(e) = &result {
            host.show_toast(Toast::from_error(e));
        }
        result
    }
}
