//! Shared outbound HTTP client construction.

use crate::error::Result;

const USER_AGENT: &str = concat!("storylink/", env!("CARGO_PKG_VERSION"));

/// Build a reqwest client on rustls with the ring provider.
///
/// The provider is installed process-wide on first use; later calls find it
/// already set and move on.
pub fn client() -> Result<reqwest::Client> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}
