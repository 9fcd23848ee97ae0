use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api_client::API_URL_ENV;

#[derive(Parser)]
#[command(name = "storylink")]
#[command(
    author,
    version,
    about = "Link Jira stories to test generation: fetch issues and extract acceptance criteria"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .storylink.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the storylink API (overrides config)
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the storylink HTTP API
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Connect the running API to a Jira Cloud site
    Connect {
        /// Jira site URL, e.g. https://acme.atlassian.net
        #[arg(long, env = "JIRA_BASE_URL")]
        base_url: String,

        /// Account email
        #[arg(long, env = "JIRA_EMAIL")]
        email: String,

        /// API token
        #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
        api_token: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stories from the GENAI project
    #[command(visible_alias = "ls")]
    Stories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one story with its description and acceptance criteria
    Story {
        /// Issue key, e.g. GENAI-42
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate test cases for a story
    Generate {
        /// Story title
        #[arg(long, required_unless_present = "from_story")]
        title: Option<String>,

        /// Acceptance criteria text
        #[arg(long, required_unless_present = "from_story")]
        criteria: Option<String>,

        /// Story description
        #[arg(long)]
        description: Option<String>,

        /// Extra context for the generator
        #[arg(long)]
        additional_info: Option<String>,

        /// Fill title, criteria and description from a Jira story
        #[arg(long, conflicts_with_all = ["title", "criteria", "description"])]
        from_story: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a saved description (ADF JSON or plain text) offline
    Convert {
        /// File to read, or '-' for stdin
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
