use serde::{Deserialize, Serialize};

use crate::adf::Description;

/// An issue as returned by the Jira REST API, limited to the requested fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,

    /// Plain text on older instances, ADF on Jira Cloud.
    #[serde(default)]
    pub description: Option<Description>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub fields: Vec<String>,
    pub max_results: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Option<Vec<JiraIssue>>,
}

impl SearchResponse {
    pub fn into_issues(self) -> Vec<JiraIssue> {
        self.issues.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_wire_shape() {
        let req = SearchRequest {
            jql: "project = GENAI ORDER BY key DESC".to_string(),
            fields: vec!["id".to_string()],
            max_results: 100,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["maxResults"], 100);
        assert_eq!(value["jql"], "project = GENAI ORDER BY key DESC");
    }

    #[test]
    fn test_search_response_without_issues_is_empty() {
        let resp: SearchResponse = serde_json::from_value(json!({"isLast": true})).unwrap();
        assert!(resp.into_issues().is_empty());

        let resp: SearchResponse = serde_json::from_value(json!({"issues": null})).unwrap();
        assert!(resp.into_issues().is_empty());
    }

    #[test]
    fn test_issue_with_null_description() {
        let issue: JiraIssue = serde_json::from_value(json!({
            "id": "10000",
            "key": "GENAI-3",
            "self": "https://acme.atlassian.net/rest/api/3/issue/10000",
            "fields": {"summary": "Login", "description": null}
        }))
        .unwrap();
        assert_eq!(issue.fields.summary.as_deref(), Some("Login"));
        assert!(issue.fields.description.is_none());
    }
}
