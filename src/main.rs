use pixelhub_mcp::client::PixelHubClient;
use pixelhub_mcp::config::Config;
use pixelhub_mcp::tools::PixelHubServer;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting PixelHub MCP Server...");

    let config = Config::from_env();
    config.log_summary();

    // One HTTP client for the whole process, shared by both tools
    let client = PixelHubClient::new(&config)?;
    tracing::info!("Created PixelHub client for {}", client.api_base());

    let service = PixelHubServer::new(Arc::new(client))
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
