use anyhow::{Context, Result};
use colored::Colorize;

use crate::server::run_server;

use super::CommandContext;

pub async fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ctx.config;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    let addr = config.listen_addr();

    println!("{} storylink API on http://{}/api", "Serving".green(), addr);

    run_server(&addr)
        .await
        .with_context(|| format!("Server on {} stopped", addr))
}
