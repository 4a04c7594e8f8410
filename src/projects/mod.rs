//! Projects module - listing, filtering and presenting Deepnote projects
//!
//! # Module Structure
//!
//! - `types` - Server-supplied data (Project, Author) with lenient decoding
//! - `client` - `ProjectFetcher` trait and the HTTP client
//! - `filter` - Category filter and name search
//! - `present` - Pure mapping from a project to a render-ready row
//! - `browser` - Browser state: credential → fetch → derived view

mod browser;
mod client;
mod filter;
mod present;
mod types;

pub use browser::{FetchTicket, ProjectBrowser};
pub use client::{DeepnoteClient, ProjectFetcher};
pub use filter::{derive_view, Category};
pub use present::{
    present, present_in, AuthorBadge, Badge, RowAction, RowModel, Shortcut, COPY_ID_ACTION,
    COPY_URL_ACTION, INVALID_DATE,
};
pub use types::{Author, Project, ProjectsResponse};

#[cfg(test)]
pub(crate) mod test_support {
    use super::Project;

    /// Minimal project with the given id and name; all flags false.
    pub fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://deepnote.com/project/{}", id),
            data_app_url: format!("https://deepnote.com/app/{}", id),
            created_at: "2024-01-05T10:00:00Z".to_string(),
            last_accessed_at: "2024-03-10T14:30:00Z".to_string(),
            ..Project::default()
        }
    }

    pub fn favorite(id: &str, name: &str) -> Project {
        Project {
            is_favorite: true,
            ..project(id, name)
        }
    }

    pub fn data_app(id: &str, name: &str) -> Project {
        Project {
            has_data_app: true,
            ..project(id, name)
        }
    }

    pub fn template(id: &str, name: &str) -> Project {
        Project {
            is_template: true,
            ..project(id, name)
        }
    }
}
