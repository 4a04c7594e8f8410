//! Row presenter: a pure mapping from a project to what a list row shows.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use super::types::Project;

/// Label used when a timestamp can't be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Status badge shown next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Favorite,
    DataApp,
    Template,
}

impl Badge {
    pub fn icon(&self) -> &'static str {
        match self {
            Badge::Favorite => "★",
            Badge::DataApp => "📊",
            Badge::Template => "⧉",
        }
    }
}

/// Author avatar with a name tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBadge {
    pub avatar: String,
    pub tooltip: String,
}

/// Keyboard shortcut attached to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub modifiers: &'static [&'static str],
    pub key: &'static str,
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        f.write_str(self.key)
    }
}

/// Title of the action that copies the project ID
pub const COPY_ID_ACTION: &str = "Copy Project ID";

/// Title of the action that copies the project URL
pub const COPY_URL_ACTION: &str = "Copy Project URL";

const COPY_ID_SHORTCUT: Shortcut = Shortcut {
    modifiers: &["cmd"],
    key: ".",
};

const COPY_URL_SHORTCUT: Shortcut = Shortcut {
    modifiers: &["cmd", "shift"],
    key: "c",
};

/// An action available on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RowAction {
    OpenInBrowser {
        url: String,
    },
    CopyToClipboard {
        title: &'static str,
        content: String,
        shortcut: Shortcut,
    },
}

impl RowAction {
    pub fn title(&self) -> &str {
        match self {
            RowAction::OpenInBrowser { .. } => "Open in Browser",
            RowAction::CopyToClipboard { title, .. } => *title,
        }
    }
}

/// Render-ready row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date_label: String,
    pub date_tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<String>,
    pub kind_label: &'static str,
    pub badges: Vec<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorBadge>,
    /// First action is the primary one
    pub actions: Vec<RowAction>,
}

impl RowModel {
    pub fn primary_action(&self) -> Option<&RowAction> {
        self.actions.first()
    }

    pub fn action_titled(&self, title: &str) -> Option<&RowAction> {
        self.actions.iter().find(|action| action.title() == title)
    }
}

/// Present a project using the local time zone.
pub fn present(project: &Project) -> RowModel {
    present_in(project, &Local)
}

/// Present a project with dates rendered in `tz`.
pub fn present_in<Tz>(project: &Project, tz: &Tz) -> RowModel
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    RowModel {
        id: project.id.clone(),
        title: project.name.clone(),
        subtitle: format!("Created: {}", format_date(&project.created_at, tz, "%b %-d, %Y")),
        date_label: format_date(&project.last_accessed_at, tz, "%b %-d"),
        date_tooltip: format_date(&project.last_accessed_at, tz, "%A, %B %-d at %H:%M"),
        updated_label: project
            .updated_at
            .as_deref()
            .map(|updated| format!("Updated: {}", format_date(updated, tz, "%b %-d, %Y"))),
        kind_label: if project.is_template {
            "Template"
        } else {
            "Project"
        },
        badges: badges(project),
        author: project.author.as_ref().map(|author| AuthorBadge {
            avatar: author.avatar.clone(),
            tooltip: join_name(&author.name, &author.last_name),
        }),
        actions: vec![
            RowAction::OpenInBrowser {
                url: project.open_url().to_string(),
            },
            RowAction::CopyToClipboard {
                title: COPY_ID_ACTION,
                content: project.id.clone(),
                shortcut: COPY_ID_SHORTCUT,
            },
            RowAction::CopyToClipboard {
                title: COPY_URL_ACTION,
                content: project.url.clone(),
                shortcut: COPY_URL_SHORTCUT,
            },
        ],
    }
}

fn badges(project: &Project) -> Vec<Badge> {
    let mut badges = Vec::new();
    if project.is_favorite {
        badges.push(Badge::Favorite);
    }
    if project.has_data_app {
        badges.push(Badge::DataApp);
    }
    if project.is_template {
        badges.push(Badge::Template);
    }
    badges
}

fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

fn format_date<Tz>(raw: &str, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    parse_timestamp(raw, tz)
        .map(|parsed| parsed.format(pattern).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Parse an ISO 8601 timestamp into `tz`.
///
/// Offset-less date-times are read as local time in `tz`; a bare date is
/// midnight UTC.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
