//! MCP tools exposing the PixelHub image catalog
//!
//! - `tags_tool`: tag listing
//! - `images_tool`: tag-based relevance search
//! - `router`: MCP tool routing and server info

pub mod images_tool;
pub mod pagination;
pub mod router;
pub mod tags_tool;

pub use router::PixelHubServer;

use crate::client::ClientError;
use crate::schema::Envelope;

/// Text returned when the catalog cannot serve a tool call
pub fn failure_text(tool: &str) -> String {
    format!(
        "Error: Failed to execute {}. The PixelHub service returned an error or could not be reached. Please try again later.",
        tool
    )
}

/// Payload of a successful catalog call, or the failure text for `tool`
///
/// Upstream errors, non-200 codes and missing `data` all render the same way.
pub fn successful_page<T>(
    tool: &str,
    result: Result<Envelope<T>, ClientError>,
) -> Result<T, String> {
    match result {
        Ok(envelope) => envelope.into_success().ok_or_else(|| {
            tracing::warn!(tool, "PixelHub returned an unsuccessful envelope");
            failure_text(tool)
        }),
        Err(e) => {
            tracing::warn!(
                tool,
                endpoint = e.endpoint().unwrap_or("-"),
                "catalog call failed: {}",
                e
            );
            Err(failure_text(tool))
        }
    }
}
