use anyhow::Result;

use super::CommandContext;
use super::utils::{print_story_details, print_story_list};

pub async fn handle_stories(ctx: &CommandContext, json: bool) -> Result<()> {
    let response = ctx.backend()?.get_jira_stories().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_story_list(&response.stories);
    }
    Ok(())
}

pub async fn handle_story(ctx: &CommandContext, key: String, json: bool) -> Result<()> {
    let details = ctx.backend()?.get_jira_story_details(&key).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print_story_details(&details);
    }
    Ok(())
}
