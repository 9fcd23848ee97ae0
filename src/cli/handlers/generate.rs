use anyhow::{Context, Result};

use crate::model::GenerateRequest;

use super::CommandContext;
use super::utils::print_test_cases;

/// Parameters for the generate operation
pub struct GenerateParams {
    pub title: Option<String>,
    pub criteria: Option<String>,
    pub description: Option<String>,
    pub additional_info: Option<String>,
    pub from_story: Option<String>,
    pub json: bool,
}

pub async fn handle_generate(ctx: &CommandContext, params: GenerateParams) -> Result<()> {
    let backend = ctx.backend()?;

    let request = match params.from_story {
        Some(key) => {
            let details = backend
                .get_jira_story_details(&key)
                .await
                .with_context(|| format!("Failed to load story {}", key))?;
            GenerateRequest {
                additional_info: params.additional_info,
                ..GenerateRequest::from(details)
            }
        }
        None => GenerateRequest {
            story_title: params.title.context("--title is required")?,
            acceptance_criteria: params.criteria.context("--criteria is required")?,
            description: params.description,
            additional_info: params.additional_info,
        },
    };

    let response = backend.generate_tests(&request).await?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_test_cases(&response);
    }
    Ok(())
}
