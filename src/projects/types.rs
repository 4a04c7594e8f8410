//! Server-supplied project records.
//!
//! The API response is not schema-validated. Every field is defaulted and
//! decoded leniently, so a record with a missing or wrong-typed field still
//! renders (with blank values) instead of failing the whole list.

use serde::{Deserialize, Serialize};

/// A Deepnote project as returned by `GET /v1/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub last_accessed_at: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_template: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_data_app: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_favorite: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub data_app_url: String,
    #[serde(deserialize_with = "lenient::author")]
    pub author: Option<Author>,
}

impl Project {
    /// URL opened by the row's primary action: the published app for data
    /// apps, the editor otherwise.
    pub fn open_url(&self) -> &str {
        if self.has_data_app {
            &self.data_app_url
        } else {
            &self.url
        }
    }
}

/// Project author, display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar: String,
}

/// Body of the projects listing. A missing, null or non-array `projects`
/// field is an empty list; an element that isn't an object is a blank project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default, deserialize_with = "lenient::projects")]
    pub projects: Option<Vec<Project>>,
}

impl ProjectsResponse {
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.unwrap_or_default()
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{Author, Project};

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(scalar_to_string(Value::deserialize(deserializer)?))
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
    }

    pub fn author<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Author>, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
            _ => Ok(None),
        }
    }

    pub fn projects<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<Project>>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .map(|item| serde_json::from_value(item).unwrap_or_default())
                    .collect(),
            )),
            _ => Ok(None),
        }
    }

    fn scalar_to_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_project() {
        let json = r#"{
            "id": "p1",
            "name": "Alpha",
            "slug": "alpha-p1",
            "createdAt": "2024-01-05T10:00:00Z",
            "updatedAt": null,
            "lastAccessedAt": "2024-03-10T14:30:00Z",
            "isTemplate": false,
            "hasDataApp": true,
            "isFavorite": true,
            "url": "https://deepnote.com/project/p1",
            "dataAppUrl": "https://deepnote.com/app/p1",
            "author": {"id": "u1", "name": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "avatar": "https://img/ada.png"}
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.slug, "alpha-p1");
        assert_eq!(project.updated_at, None);
        assert!(project.has_data_app);
        assert!(project.is_favorite);
        assert!(!project.is_template);
        let author = project.author.unwrap();
        assert_eq!(author.last_name, "Lovelace");
        assert_eq!(author.avatar, "https://img/ada.png");
    }

    #[test]
    fn test_decode_tolerates_missing_and_wrong_typed_fields() {
        let json = r#"{"id": 42, "name": null, "isFavorite": "yes", "author": "nobody"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "42");
        assert_eq!(project.name, "");
        assert!(!project.is_favorite);
        assert_eq!(project.author, None);
        assert_eq!(project.url, "");
    }

    #[test]
    fn test_open_url_prefers_data_app() {
        let mut project = Project {
            url: "https://deepnote.com/project/p1".to_string(),
            data_app_url: "https://deepnote.com/app/p1".to_string(),
            ..Project::default()
        };
        assert_eq!(project.open_url(), "https://deepnote.com/project/p1");
        project.has_data_app = true;
        assert_eq!(project.open_url(), "https://deepnote.com/app/p1");
    }

    #[test]
    fn test_response_without_projects_field_is_empty() {
        let response: ProjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_projects().is_empty());

        let response: ProjectsResponse = serde_json::from_str(r#"{"projects": null}"#).unwrap();
        assert!(response.into_projects().is_empty());
    }

    #[test]
    fn test_malformed_element_does_not_fail_the_list() {
        let json = r#"{"projects": [null, {"id": "1", "name": "A"}, 7]}"#;
        let projects = serde_json::from_str::<ProjectsResponse>(json)
            .unwrap()
            .into_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0], Project::default());
        assert_eq!(projects[1].name, "A");
        assert_eq!(projects[2], Project::default());
    }

    #[test]
    fn test_non_array_projects_field_is_empty() {
        let response: ProjectsResponse =
            serde_json::from_str(r#"{"projects": "soon"}"#).unwrap();
        assert!(response.into_projects().is_empty());
    }

    #[test]
    fn test_response_preserves_server_order() {
        let json = r#"{"projects": [{"id": "b"}, {"id": "a"}, {"id": "c"}]}"#;
        let response: ProjectsResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = response.into_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
