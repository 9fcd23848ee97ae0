mod connect;
mod convert;
mod generate;
mod serve;
mod stories;
mod utils;

pub use connect::handle_connect;
pub use convert::handle_convert;
pub use generate::{GenerateParams, handle_generate};
pub use serve::handle_serve;
pub use stories::{handle_stories, handle_story};

use crate::api_client::BackendClient;
use crate::config::StorylinkConfig;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: StorylinkConfig,
}

impl CommandContext {
    pub fn new(config: StorylinkConfig) -> Self {
        Self { config }
    }

    /// Client for the configured storylink API.
    pub fn backend(&self) -> crate::error::Result<BackendClient> {
        BackendClient::new(self.config.client.api_url.as_str())
    }
}
