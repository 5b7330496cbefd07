//! PixelHub tool router
//!
//! Exposes the catalog tools over MCP. Each handler renders its outcome,
//! failures included, into a single text content block, so a tool call
//! never surfaces as a protocol error.
//!
//! ## Exposed MCP Tools
//!
//! 1. **list_tags** - Tags in use with their usage counts, paginated
//! 2. **search_images_by_tags** - Images matching any given tag, most matches first
//!
//! ## Workflow
//!
//! ```text
//! MCP Client
//!     ↓
//! PixelHubServer (this module)
//!     ├─→ tags_tool    (list_tags)              STEP 1
//!     └─→ images_tool  (search_images_by_tags)  STEP 2
//!             ↓
//!       ImageCatalog → PixelHub API
//! ```

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::images_tool::{self, SearchImagesParams};
use super::tags_tool::{self, ListTagsParams};
use crate::client::ImageCatalog;

/// MCP server for the PixelHub image catalog
#[derive(Clone)]
pub struct PixelHubServer {
    tool_router: ToolRouter<Self>,
    catalog: Arc<dyn ImageCatalog>,
}

impl PixelHubServer {
    pub fn new(catalog: Arc<dyn ImageCatalog>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog,
        }
    }
}

#[tool_router]
impl PixelHubServer {
    /// List available tags with usage counts
    #[tool(
        description = "STEP 1: List all available tags in the PixelHub system with their usage counts, sorted by usage frequency. Call this first to learn which tags exist before searching."
    )]
    async fn list_tags(
        &self,
        Parameters(params): Parameters<ListTagsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = tags_tool::list_tags(self.catalog.as_ref(), params).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Search images by tags using relevance ranking
    #[tool(
        description = "STEP 2: Search images by tags using relevance ranking (OR logic). ONLY call this tool AFTER calling list_tags first to get available tags. Use tags from the list_tags result."
    )]
    async fn search_images_by_tags(
        &self,
        Parameters(params): Parameters<SearchImagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = images_tool::search_images_by_tags(self.catalog.as_ref(), params).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PixelHubServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server searches the PixelHub image catalog: 1) list_tags - list the tags in use with their counts, 2) search_images_by_tags - find images matching any of the given tags, most matches first. Always call list_tags first and search only with tags it returned."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::FakeCatalog;
    use serde_json::json;

    fn server_with(catalog: FakeCatalog) -> PixelHubServer {
        PixelHubServer::new(Arc::new(catalog))
    }

    fn first_text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .find_map(|c| c.as_text().map(|t| t.text.clone()))
            .unwrap_or_default()
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = server_with(FakeCatalog::unavailable());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("list_tags"));
    }

    #[test]
    fn test_both_tools_registered() {
        let server = server_with(FakeCatalog::unavailable());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["list_tags", "search_images_by_tags"]);
    }

    #[tokio::test]
    async fn test_list_tags_returns_single_text_block() {
        let server = server_with(FakeCatalog::responding(json!({
            "code": 200,
            "data": {"tags": [{"name": "nature", "count": 5}], "total": 1, "current_page": 1}
        })));

        let result = server
            .list_tags(Parameters(ListTagsParams::default()))
            .await
            .unwrap();

        assert_eq!(result.content.len(), 1);
        assert!(first_text(&result).contains("1. 'nature' - used 5 times"));
    }

    #[tokio::test]
    async fn test_failures_stay_successful_results() {
        let server = server_with(FakeCatalog::unavailable());

        let result = server
            .search_images_by_tags(Parameters(SearchImagesParams {
                tags: vec!["sky".into()],
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_eq!(result.content.len(), 1);
        assert!(first_text(&result).starts_with("Error: Failed to execute search_images_by_tags."));
    }
}
