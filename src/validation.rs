//! Declared schemas for payloads crossing the HTTP boundary.
//!
//! Inbound failures surface as 400s; outbound failures mean the server built
//! something it should not send and are reported as 500s.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Result, StorylinkError};
use crate::model::{ConnectRequest, JiraStory, StoriesResponse, StoryDetails};

/// Maximum allowed length for an issue key.
pub const MAX_KEY_LENGTH: usize = 64;

static ISSUE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*-[0-9]+$").expect("issue key pattern is valid")
});

/// A payload with a declared shape beyond what its Rust type enforces.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(msg: impl Into<String>) -> StorylinkError {
    StorylinkError::Validation(msg.into())
}

/// Validates a Jira base URL: absolute, http or https.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).map_err(|e| invalid(format!("baseUrl: {}", e)))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("baseUrl: unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("baseUrl: missing host"));
    }
    Ok(())
}

/// Validates an issue key such as `GENAI-42`.
///
/// The key is interpolated into a Jira URL path, so anything outside the
/// key alphabet is rejected.
pub fn validate_issue_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(invalid("Issue key cannot be empty"));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(invalid(format!(
            "Issue key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        )));
    }
    if !ISSUE_KEY.is_match(key) {
        return Err(invalid(format!("Invalid issue key: {}", key)));
    }
    Ok(())
}

impl Validate for ConnectRequest {
    fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;
        if self.email.trim().is_empty() {
            return Err(invalid("email cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(invalid("email must be a valid email address"));
        }
        if self.api_token.is_empty() {
            return Err(invalid("apiToken cannot be empty"));
        }
        Ok(())
    }
}

impl Validate for JiraStory {
    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(invalid("story id cannot be empty"));
        }
        validate_issue_key(&self.key)
    }
}

impl Validate for StoriesResponse {
    fn validate(&self) -> Result<()> {
        self.stories.iter().try_for_each(|story| story.validate())
    }
}

impl Validate for StoryDetails {
    fn validate(&self) -> Result<()> {
        validate_issue_key(&self.key)
    }
}
