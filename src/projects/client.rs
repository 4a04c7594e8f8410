//! Project fetcher.
//!
//! One GET per trigger, no retry and no backoff. Every failure (transport,
//! non-2xx status, undecodable body) collapses into a single `FetchError`;
//! the cause is only kept for the logs.

use crate::credentials::ApiKey;
use crate::error::FetchError;

use super::types::{Project, ProjectsResponse};

/// Source of the project list.
pub trait ProjectFetcher: Send + Sync {
    /// Fetch all projects visible to `api_key`, in server order.
    fn fetch_projects(&self, api_key: &ApiKey) -> Result<Vec<Project>, FetchError>;
}

/// HTTP client for the Deepnote projects API.
#[derive(Debug, Clone)]
pub struct DeepnoteClient {
    endpoint: String,
}

impl DeepnoteClient {
    /// Create a client for the given projects endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ProjectFetcher for DeepnoteClient {
    fn fetch_projects(&self, api_key: &ApiKey) -> Result<Vec<Project>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting project list");

        let response = ureq::get(&self.endpoint)
            .header("Authorization", &format!("Bearer {}", api_key.expose()))
            .header("Accept", "application/json")
            .call()
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    endpoint = %self.endpoint,
                    "Project list request failed"
                );
                FetchError::new(e.to_string())
            })?;

        let body: ProjectsResponse = response.into_body().read_json().map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode project list");
            FetchError::new(format!("invalid response body: {}", e))
        })?;

        let projects = body.into_projects();
        tracing::debug!(count = projects.len(), "Received project list");
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    fn client_for(server: &mockito::Server) -> DeepnoteClient {
        DeepnoteClient::new(format!("{}/v1/projects", server.url()))
    }

    #[test]
    fn test_fetch_sends_bearer_token_and_decodes_projects() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/projects")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"projects": [
                    {"id": "1", "name": "Alpha", "isFavorite": true, "hasDataApp": false, "isTemplate": false},
                    {"id": "2", "name": "Beta"}
                ]}"#,
            )
            .create();

        let projects = client_for(&server).fetch_projects(&key()).unwrap();

        mock.assert();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Alpha");
        assert!(projects[0].is_favorite);
        assert_eq!(projects[1].id, "2");
    }

    #[test]
    fn test_fetch_unauthorized_is_fetch_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/projects")
            .with_status(401)
            .with_body(r#"{"error": "unauthorized"}"#)
            .create();

        let result = client_for(&server).fetch_projects(&key());

        mock.assert();
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_server_error_is_fetch_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/v1/projects").with_status(503).create();

        assert!(client_for(&server).fetch_projects(&key()).is_err());
    }

    #[test]
    fn test_fetch_invalid_json_is_fetch_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/projects")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let err = client_for(&server).fetch_projects(&key()).unwrap_err();
        assert!(err.cause().contains("invalid response body"));
    }

    #[test]
    fn test_fetch_missing_projects_field_is_empty_list() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/projects")
            .with_status(200)
            .with_body("{}")
            .create();

        let projects = client_for(&server).fetch_projects(&key()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_fetch_keeps_list_with_malformed_element() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/projects")
            .with_status(200)
            .with_body(r#"{"projects": [null, {"id": "1", "name": "A"}]}"#)
            .create();

        let projects = client_for(&server).fetch_projects(&key()).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "");
        assert_eq!(projects[1].name, "A");
    }

    #[test]
    fn test_fetch_unreachable_host_is_fetch_error() {
        let client = DeepnoteClient::new("http://127.0.0.1:1/v1/projects");
        assert!(client.fetch_projects(&key()).is_err());
    }
}
