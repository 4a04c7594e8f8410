//! Prompt forwarder: hand a free-text prompt to the Deepnote AI notebook.

use url::Url;

use crate::error::{LauncherError, Result};
use crate::host::{Host, Toast};
use crate::logging;

/// Query parameter the notebook reads the prompt from
pub const PROMPT_QUERY_PARAM: &str = "__prompt";

/// Build `<base>?__prompt=<prompt>`.
///
/// Query pairs already on `base` are kept, except an existing `__prompt`,
/// so the result always carries exactly one.
pub fn build_prompt_url(base: &str, prompt: &str) -> Result<Url> {
    if prompt.is_empty() {
        return Err(LauncherError::MissingInput);
    }

    let mut url = Url::parse(base).map_err(|source| LauncherError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| key != PROMPT_QUERY_PARAM)
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(PROMPT_QUERY_PARAM, prompt);

    Ok(url)
}

/// Validate, build and open the prompt URL.
///
/// Any failure is shown as a notice and returned. A missing prompt aborts
/// before the host is asked to open anything.
pub fn forward_prompt(host: &dyn Host, base: &str, prompt: &str) -> Result<Url> {
    // The host logs the open itself
    let result = build_prompt_url(base, prompt)
        .inspect_err(|_| logging::log_action_event("forward_prompt", base, false))
        .and_then(|url| {
            host.open_url(url.as_str())?;
            Ok(url)
        });

    if let Err(e) = &result {
        host.show_toast(Toast::from_error(e));
    }
    result
}
