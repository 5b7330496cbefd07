//! Calls the PixelHub endpoints directly (no MCP) and prints the raw JSON.
//!
//! Useful to check that `PIXELHUB_BASE_URL` points at a live service.

use pixelhub_mcp::client::{PixelHubClient, RELEVANCE_ENDPOINT, TAGS_ENDPOINT};
use pixelhub_mcp::config::Config;
use reqwest::Method;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let client = PixelHubClient::new(&config)?;

    println!("========================================");
    println!("PixelHub API Probe (No MCP)");
    println!("========================================");
    println!("Target: {}\n", client.api_base());

    println!("Test 1: List Tags");
    println!("--------------------------");
    match client
        .request(Method::GET, TAGS_ENDPOINT, &json!({"page": 1, "limit": 10}))
        .await
    {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(e) => println!("✗ Error: {}", e),
    }
    println!();

    println!("Test 2: Relevance Search");
    println!("--------------------------");
    match client
        .request(
            Method::GET,
            RELEVANCE_ENDPOINT,
            &json!({"tags": "nature,landscape", "page": 1, "limit": 5}),
        )
        .await
    {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(e) => println!("✗ Error: {}", e),
    }

    Ok(())
}
