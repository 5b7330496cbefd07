//! Image catalog trait definition
//!
//! Defines the interface the MCP tools use to reach an image catalog.

use async_trait::async_trait;

use super::error::ClientError;
use crate::schema::{Envelope, SearchPage, TagPage};

/// Trait for image catalog backends
///
/// Implementations must be Send + Sync so one instance can serve
/// concurrent tool calls. Each method performs at most one remote call.
#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Fetch one page of tags with their usage counts
    async fn list_tags(&self, page: i64, limit: i64) -> Result<Envelope<TagPage>, ClientError>;

    /// Search images matching any of `tags`, ranked by the number of matches
    async fn search_relevance(
        &self,
        tags: &[String],
        page: i64,
        limit: i64,
    ) -> Result<Envelope<SearchPage>, ClientError>;
}
