use anyhow::{Context, Result};
use clap::Parser;

use storylink::cli::handlers::{self, CommandContext, GenerateParams};
use storylink::cli::{Cli, Commands};
use storylink::config::StorylinkConfig;
use storylink::model::ConnectRequest;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    if let Some(api_url) = cli.api_url {
        config.client.api_url = api_url;
    }
    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    storylink::logging::init(cli.verbose, log_file);

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(ctx, host, port).await,
        Commands::Connect {
            base_url,
            email,
            api_token,
            json,
        } => {
            let request = ConnectRequest {
                base_url,
                email,
                api_token,
            };
            handlers::handle_connect(&ctx, request, json).await
        }
        Commands::Stories { json } => handlers::handle_stories(&ctx, json).await,
        Commands::Story { key, json } => handlers::handle_story(&ctx, key, json).await,
        Commands::Generate {
            title,
            criteria,
            description,
            additional_info,
            from_story,
            json,
        } => {
            let params = GenerateParams {
                title,
                criteria,
                description,
                additional_info,
                from_story,
                json,
            };
            handlers::handle_generate(&ctx, params).await
        }
        Commands::Convert { input, json } => handlers::handle_convert(input, json),
    }
}

fn load_config(cli: &Cli) -> Result<StorylinkConfig> {
    let cwd = std::env::current_dir()?;
    StorylinkConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load storylink configuration")
}
