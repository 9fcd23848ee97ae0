//! Jira Cloud REST client.
//!
//! Holds the credentials supplied at connect time and exposes the three
//! calls the story workflow needs:
//!
//! - [`JiraClient::test_connection`]: `GET /rest/api/3/myself`
//! - [`JiraClient::list_issues`]: `POST /rest/api/3/search/jql`
//! - [`JiraClient::get_issue`]: `GET /rest/api/3/issue/{key}`

mod client;
mod types;

pub use client::{JiraClient, JiraConfig, project_jql};
pub use types::{IssueFields, JiraIssue, SearchRequest, SearchResponse};

/// The only project stories are listed from.
pub const STORY_PROJECT_KEY: &str = "GENAI";

/// Upper bound on issues returned by a listing.
pub const MAX_RESULTS: u32 = 100;

pub const MYSELF_PATH: &str = "/rest/api/3/myself";
pub const SEARCH_PATH: &str = "/rest/api/3/search/jql";
pub const ISSUE_PATH: &str = "/rest/api/3/issue";

pub const SEARCH_FIELDS: &[&str] = &["id", "key", "summary"];
pub const DETAIL_FIELDS: &[&str] = &["id", "key", "summary", "description"];
