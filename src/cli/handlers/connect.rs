use anyhow::Result;
use colored::Colorize;

use crate::model::ConnectRequest;

use super::CommandContext;

pub async fn handle_connect(ctx: &CommandContext, request: ConnectRequest, json: bool) -> Result<()> {
    let backend = ctx.backend()?;
    let base_url = request.base_url.clone();
    let response = backend.connect_jira(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{} {} ({})", "Connected".green(), base_url.cyan(), response.message);
    }
    Ok(())
}
