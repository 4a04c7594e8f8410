//! Category filter and name search over the fetched project list.
//!
//! Policy: category predicate first, then a case-insensitive substring match
//! on `name` over what's left. No tokenization and no ranking; results keep
//! the server's order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::Project;

/// Single-select category filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Favorites,
    #[value(name = "dataapp")]
    DataApp,
    Template,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Favorites,
        Category::DataApp,
        Category::Template,
    ];

    /// Stable identifier used in config, state and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Favorites => "favorites",
            Category::DataApp => "dataapp",
            Category::Template => "template",
        }
    }

    /// Human-readable title for the category dropdown
    pub fn title(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Favorites => "Favorites",
            Category::DataApp => "Data Apps",
            Category::Template => "Templates",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Favorites => project.is_favorite,
            Category::DataApp => project.has_data_app,
            Category::Template => project.is_template,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Derive the visible list. Borrows from `projects` and never mutates it.
pub fn derive_view<'a>(
    projects: &'a [Project],
    category: Category,
    search_text: &str,
) -> Vec<&'a Project> {
    let needle = search_text.to_lowercase();
    projects
        .iter()
        .filter(|project| category.matches(project))
        .filter(|project| name_contains(&project.name, &needle))
        .collect()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
fn name_contains(name: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if name.is_ascii() && needle_lower.is_ascii() {
        return contains_ignore_ascii_case(name, needle_lower);
    }
    name.to_lowercase().contains(needle_lower)
}

/// Byte-wise ASCII case-insensitive search, no allocation.
#[inline]
fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.len() > h.len() {
        return false;
    }
    h.windows(n.len())
        .any(|window| window.iter().zip(n).all(|(a, b)| a.to_ascii_lowercase() == *b))
}
