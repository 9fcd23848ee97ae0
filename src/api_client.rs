//! Typed client for the storylink HTTP API.
//!
//! Each call is a thin wrapper around one endpoint. A non-success status
//! becomes [`StorylinkError::Backend`] carrying the server's `error` message
//! verbatim, so callers can show it to the user as is.

use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{Result, StorylinkError};
use crate::model::{
    ConnectRequest, ConnectResponse, GenerateRequest, GenerateResponse, StoriesResponse,
    StoryDetails,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "STORYLINK_API_URL";

/// Message used when an error response has no readable body.
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: crate::http::client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn generate_tests(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.call(Method::POST, "/generate-tests", Some(request))
            .await
            .inspect_err(|e| error!(error = %e, "Error generating tests"))
    }

    pub async fn connect_jira(&self, request: &ConnectRequest) -> Result<ConnectResponse> {
        self.call(Method::POST, "/jira/connect", Some(request))
            .await
            .inspect_err(|e| error!(error = %e, "Error connecting to Jira"))
    }

    pub async fn get_jira_stories(&self) -> Result<StoriesResponse> {
        self.call::<(), _>(Method::GET, "/jira/stories", None)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching Jira stories"))
    }

    pub async fn get_jira_story_details(&self, key: &str) -> Result<StoryDetails> {
        let path = format!("/jira/stories/{}", key);
        self.call::<(), _>(Method::GET, &path, None)
            .await
            .inspect_err(|e| error!(issue = key, error = %e, "Error fetching story"))
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "storylink API request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<T>().await?)
    }
}

async fn error_from_response(response: Response) -> StorylinkError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    StorylinkError::Backend(error_message(status.as_u16(), &body))
}

/// Pick the message to surface for a failed call.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_server_error_verbatim() {
        let body = r#"{"error":"Failed to connect to Jira. Please check your credentials."}"#;
        assert_eq!(
            error_message(401, body),
            "Failed to connect to Jira. Please check your credentials."
        );
    }

    #[test]
    fn test_error_message_without_error_field() {
        assert_eq!(error_message(502, r#"{"detail":"x"}"#), "HTTP error! status: 502");
    }

    #[test]
    fn test_error_message_for_unparseable_body() {
        assert_eq!(error_message(500, "<html>oops</html>"), UNKNOWN_ERROR);
        assert_eq!(error_message(500, ""), UNKNOWN_ERROR);
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = BackendClient::new("http://localhost:8081/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081/api");
    }
}
