//! Plain-text rendering of project rows for the terminal host.

use crate::projects::{Category, RowModel};

/// Header line: category title, search text and match count.
pub fn format_header(category: Category, search_text: &str, count: usize) -> String {
    let noun = if count == 1 { "project" } else { "projects" };
    if search_text.is_empty() {
        format!("{} ({} {})", category.title(), count, noun)
    } else {
        format!(
            "{} matching \"{}\" ({} {})",
            category.title(),
            search_text,
            count,
            noun
        )
    }
}

/// Two-line row: index, badges, title and date; then subtitle and accessories.
pub fn format_row(index: usize, row: &RowModel) -> String {
    let mut first = format!("{:>3}. ", index);
    for badge in &row.badges {
        first.push_str(badge.icon());
        first.push(' ');
    }
    first.push_str(&row.title);
    first.push_str("  ·  ");
    first.push_str(&row.date_label);
    if let Some(author) = &row.author {
        if !author.tooltip.is_empty() {
            first.push_str("  ·  ");
            first.push_str(&author.tooltip);
        }
    }

    let mut second = format!("     {}  ·  {}", row.subtitle, row.kind_label);
    if let Some(updated) = &row.updated_label {
        second.push_str("  ·  ");
        second.push_str(updated);
    }

    format!("{}\n{}", first, second)
}

/// Message for an empty view.
pub fn format_empty(search_text: &str) -> String {
    if search_text.is_empty() {
        "No projects found".to_string()
    } else {
        format!("No projects match \"{}\"", search_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::test_support::{favorite, project};
    use crate::projects::{present_in, Author};
    use chrono::Utc;

    #[test]
    fn test_header() {
        assert_eq!(format_header(Category::All, "", 2), "All Projects (2 projects)");
        assert_eq!(
            format_header(Category::Favorites, "alp", 1),
            "Favorites matching \"alp\" (1 project)"
        );
    }

    #[test]
    fn test_row_with_badges_and_author() {
        let mut p = favorite("p1", "Alpha");
        p.updated_at = Some("2024-02-01T08:00:00Z".to_string());
        p.author = Some(Author {
            name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Author::default()
        });
        let row = present_in(&p, &Utc);

        assert_eq!(
            format_row(1, &row),
            "  1. ★ Alpha  ·  Mar 10  ·  Ada Lovelace\n     Created: Jan 5, 2024  ·  Project  ·  Updated: Feb 1, 2024"
        );
    }

    #[test]
    fn test_row_without_optional_parts() {
        let row = present_in(&project("p2", "Beta"), &Utc);
        assert_eq!(
            format_row(12, &row),
            " 12. Beta  ·  Mar 10\n     Created: Jan 5, 2024  ·  Project"
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(format_empty(""), "No projects found");
        assert_eq!(format_empty("zz"), "No projects match \"zz\"");
    }
}
