use std::fmt;
use std::sync::{PoisonError, RwLock};

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, error};

use super::types::{JiraIssue, SearchRequest, SearchResponse};
use super::{
    DETAIL_FIELDS, ISSUE_PATH, MAX_RESULTS, MYSELF_PATH, SEARCH_FIELDS, SEARCH_PATH,
};
use crate::error::{Result, StorylinkError};

const JSON: &str = "application/json";

/// Credentials for one Jira Cloud site.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl JiraConfig {
    /// Join an endpoint path (starting with `/`) onto the base URL without
    /// producing a double slash.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// JQL selecting every issue of a project, newest key first.
pub fn project_jql(project_key: &str) -> String {
    format!("project = {} ORDER BY key DESC", project_key)
}

/// Jira REST client holding the credentials of the last successful `connect`.
///
/// The configuration is cloned out of the lock before each request, so a
/// reconfiguration racing an in-flight call may be seen by it or not.
pub struct JiraClient {
    http: reqwest::Client,
    config: RwLock<Option<JiraConfig>>,
}

impl JiraClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_http(crate::http::client()?))
    }

    pub fn with_http(http: reqwest::Client) -> Self {
        Self {
            http,
            config: RwLock::new(None),
        }
    }

    /// Replace the held configuration. No call is made to Jira.
    pub fn set_config(&self, config: JiraConfig) {
        let mut held = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *held = Some(config);
    }

    pub fn config(&self) -> Option<JiraConfig> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_configured(&self) -> bool {
        self.config().is_some()
    }

    /// Check the held credentials against `/rest/api/3/myself`.
    pub async fn test_connection(&self) -> Result<bool> {
        match self
            .send::<IgnoredAny>(Method::GET, MYSELF_PATH, None)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                error!(error = %e, "Jira connection test failed");
                Err(e)
            }
        }
    }

    /// List the issues of `project_key`, newest key first, capped at
    /// [`MAX_RESULTS`].
    pub async fn list_issues(&self, project_key: &str) -> Result<Vec<JiraIssue>> {
        let body = SearchRequest {
            jql: project_jql(project_key),
            fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
            max_results: MAX_RESULTS,
        };

        match self
            .send::<SearchResponse>(Method::POST, SEARCH_PATH, Some(serde_json::to_vec(&body)?))
            .await
        {
            Ok(response) => Ok(response.into_issues()),
            Err(e) => {
                error!(project = project_key, error = %e, "Failed to fetch Jira stories");
                Err(e)
            }
        }
    }

    /// Fetch a single issue with its summary and raw description.
    pub async fn get_issue(&self, key: &str) -> Result<JiraIssue> {
        let endpoint = format!("{}/{}?fields={}", ISSUE_PATH, key, DETAIL_FIELDS.join(","));
        self.send::<JiraIssue>(Method::GET, &endpoint, None)
            .await
            .inspect_err(|e| error!(issue = key, error = %e, "Failed to fetch story"))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let config = self.config().ok_or(StorylinkError::NotConfigured)?;
        let url = config.endpoint_url(endpoint);
        debug!(%method, %url, "Jira request");

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&config.email, Some(&config.api_token))
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorylinkError::Remote { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> JiraConfig {
        JiraConfig {
            base_url: base_url.to_string(),
            email: "qa@example.com".to_string(),
            api_token: "secret-token".to_string(),
        }
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        assert_eq!(
            config("https://acme.atlassian.net/").endpoint_url(MYSELF_PATH),
            "https://acme.atlassian.net/rest/api/3/myself"
        );
        assert_eq!(
            config("https://acme.atlassian.net").endpoint_url(MYSELF_PATH),
            "https://acme.atlassian.net/rest/api/3/myself"
        );
        assert_eq!(
            config("https://acme.atlassian.net//").endpoint_url(SEARCH_PATH),
            "https://acme.atlassian.net/rest/api/3/search/jql"
        );
    }

    #[test]
    fn test_project_jql() {
        assert_eq!(project_jql("GENAI"), "project = GENAI ORDER BY key DESC");
    }

    #[test]
    fn test_config_debug_hides_token() {
        let rendered = format!("{:?}", config("https://acme.atlassian.net"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("qa@example.com"));
    }

    #[test]
    fn test_set_config_replaces_previous() {
        let client = JiraClient::with_http(crate::http::client().unwrap());
        assert!(!client.is_configured());

        client.set_config(config("https://one.atlassian.net"));
        client.set_config(config("https://two.atlassian.net"));
        assert_eq!(
            client.config().map(|c| c.base_url),
            Some("https://two.atlassian.net".to_string())
        );
    }

    #[tokio::test]
    async fn test_calls_fail_before_connect() {
        let client = JiraClient::with_http(crate::http::client().unwrap());

        assert!(matches!(
            client.test_connection().await,
            Err(StorylinkError::NotConfigured)
        ));
        assert!(matches!(
            client.list_issues("GENAI").await,
            Err(StorylinkError::NotConfigured)
        ));
        assert!(matches!(
            client.get_issue("GENAI-1").await,
            Err(StorylinkError::NotConfigured)
        ));
    }
}
