//! REST client for the RAI-Lab `/api` endpoints, using [`reqwest`].

use serde::de::DeserializeOwned;

use crate::models::{PersonCard, ProjectCard};

/// HTTP client for one RAI-Lab backend.
#[derive(Debug, Clone)]
pub struct LabClient {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl LabClient {
    /// * `api_url` - Base URL of the backend, e.g. `http://localhost:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /api/people`: active members.
    pub async fn fetch_people(&self) -> Result<Vec<PersonCard>, ClientError> {
        self.get_json("/api/people").await
    }

    /// `GET /api/people/alumni`.
    pub async fn fetch_alumni(&self) -> Result<Vec<PersonCard>, ClientError> {
        self.get_json("/api/people/alumni").await
    }

    /// `GET /api/projects`: every project with team cards inlined.
    pub async fn fetch_projects(&self) -> Result<Vec<ProjectCard>, ClientError> {
        self.get_json("/api/projects").await
    }

    /// `GET /api/projects/{id}`: one project with team contact details.
    pub async fn fetch_project(&self, id: i64) -> Result<ProjectCard, ClientError> {
        self.get_json(&format!("/api/projects/{id}")).await
    }

    // ---- private helpers ----

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%url, "Fetching");
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// Return the response unchanged on success, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = LabClient::new("http://localhost:5000/");
        assert_eq!(client.api_url(), "http://localhost:5000");
    }
}
