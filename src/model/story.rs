use std::fmt;

use serde::{Deserialize, Serialize};

use crate::jira::{JiraConfig, JiraIssue};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl fmt::Debug for ConnectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectRequest")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl From<ConnectRequest> for JiraConfig {
    fn from(req: ConnectRequest) -> Self {
        JiraConfig {
            base_url: req.base_url,
            email: req.email,
            api_token: req.api_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub success: bool,
    pub message: String,
}

/// A story as shown in the picker: identity plus its one-line summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraStory {
    pub id: String,
    pub key: String,
    pub summary: String,
}

impl From<JiraIssue> for JiraStory {
    fn from(issue: JiraIssue) -> Self {
        Self {
            id: issue.id,
            key: issue.key,
            summary: issue.fields.summary.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesResponse {
    pub stories: Vec<JiraStory>,
}

/// A single story ready for test generation.
///
/// `description` and `acceptance_criteria` are derived from the issue's
/// description field, never copied verbatim from an ADF payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDetails {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acceptance_criteria: String,
}

impl From<JiraIssue> for StoryDetails {
    fn from(issue: JiraIssue) -> Self {
        let description = issue.fields.description.as_ref();
        Self {
            description: crate::adf::convert_adf_to_text(description),
            acceptance_criteria: crate::criteria::extract_acceptance_criteria(description),
            title: issue.fields.summary.unwrap_or_default(),
            key: issue.key,
        }
    }
}
