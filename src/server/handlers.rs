use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;
use tracing::{error, info, warn};

use super::AppState;
use super::error::{ApiError, CONNECT_FAILED, INVALID_RESPONSE_FORMAT};
use crate::error::StorylinkError;
use crate::jira::STORY_PROJECT_KEY;
use crate::model::{ConnectRequest, ConnectResponse, JiraStory, StoriesResponse, StoryDetails};
use crate::validation::{Validate, validate_issue_key};

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// An outbound payload failed its schema; never forward it.
fn invalid_response() -> ApiError {
    StorylinkError::Internal(INVALID_RESPONSE_FORMAT.to_string()).into()
}

fn parse_connect_request(
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<ConnectRequest, StorylinkError> {
    let Json(value) = body.map_err(|e| StorylinkError::Validation(e.body_text()))?;
    let request: ConnectRequest = serde_json::from_value(value)
        .map_err(|e| StorylinkError::Validation(e.to_string()))?;
    request.validate()?;
    Ok(request)
}

/// `POST /api/jira/connect`
pub async fn connect(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> ApiResult<ConnectResponse> {
    let request = parse_connect_request(body).map_err(|e| {
        warn!(error = %e, "Rejected Jira connect request");
        ApiError::bad_request(e.to_string())
    })?;

    let base_url = request.base_url.clone();
    state.jira.set_config(request.into());

    match state.jira.test_connection().await {
        Ok(_) => {
            info!(%base_url, "Connected to Jira");
            Ok(Json(ConnectResponse {
                success: true,
                message: "Successfully connected to Jira".to_string(),
            }))
        }
        Err(e) => {
            warn!(error = %e, %base_url, "Jira rejected the supplied credentials");
            Err(ApiError::unauthorized(CONNECT_FAILED))
        }
    }
}

/// `GET /api/jira/stories`
///
/// Always lists [`STORY_PROJECT_KEY`]; the project is not caller-selectable.
pub async fn list_stories(State(state): State<AppState>) -> ApiResult<StoriesResponse> {
    let issues = state
        .jira
        .list_issues(STORY_PROJECT_KEY)
        .await
        .map_err(ApiError::from)?;

    let response = StoriesResponse {
        stories: issues.into_iter().map(JiraStory::from).collect(),
    };

    if let Err(e) = response.validate() {
        error!(error = %e, "Story listing failed its response schema");
        return Err(invalid_response());
    }

    Ok(Json(response))
}

/// `GET /api/jira/stories/{key}`
pub async fn story_details(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<StoryDetails> {
    validate_issue_key(&key).map_err(ApiError::from)?;

    let issue = state.jira.get_issue(&key).await.map_err(ApiError::from)?;
    let details = StoryDetails::from(issue);

    if let Err(e) = details.validate() {
        error!(issue = %key, error = %e, "Story details failed their response schema");
        return Err(invalid_response());
    }

    Ok(Json(details))
}
