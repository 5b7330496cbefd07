//! Tag-based image search tool
//!
//! Matching uses OR semantics and ranking (more matched tags first) is
//! done by PixelHub; this tool only validates input and renders results.

use rmcp::schemars;

use super::successful_page;
use super::pagination::{next_page_hint, normalize_limit, normalize_page, remaining};
use crate::client::ImageCatalog;

/// Default number of images per page
pub const DEFAULT_IMAGE_LIMIT: i64 = 20;

/// Largest page the search accepts
pub const MAX_IMAGE_LIMIT: i64 = 100;

/// Text returned when the search is called without tags
pub const MISSING_TAGS_TEXT: &str = "Error: At least one tag must be provided for search. Please call list_tags first to see available tags, then use those tags for search.";

/// Image search parameters
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchImagesParams {
    #[serde(default)]
    #[schemars(
        description = "List of tags to search for. IMPORTANT: Only use tags that exist in the system (from list_tags result). Images matching any of these tags will be returned, ranked by relevance (number of matching tags)"
    )]
    pub tags: Vec<String>,
    #[schemars(description = "Page number for pagination, default is 1")]
    pub page: Option<i64>,
    #[schemars(description = "Number of images per page, default is 20, maximum is 100")]
    pub limit: Option<i64>,
}

/// Search images by tags, ranked by relevance
pub async fn search_images_by_tags(catalog: &dyn ImageCatalog, params: SearchImagesParams) -> String {
    let SearchImagesParams { tags, page, limit } = params;

    if tags.is_empty() {
        return MISSING_TAGS_TEXT.to_string();
    }

    let page = normalize_page(page.unwrap_or(1));
    let limit = normalize_limit(
        limit.unwrap_or(DEFAULT_IMAGE_LIMIT),
        MAX_IMAGE_LIMIT,
        DEFAULT_IMAGE_LIMIT,
    );

    tracing::info!(?tags, page, limit, "search_images_by_tags");

    let result = catalog.search_relevance(&tags, page, limit).await;
    let data = match successful_page("search_images_by_tags", result) {
        Ok(data) => data,
        Err(text) => return text,
    };

    let searched = tags.join(", ");

    if data.results.is_empty() {
        return format!(
            "No images found matching the tags: {}. Try using different tags from the list_tags result, or call list_tags again to see all available options.",
            searched
        );
    }

    let current_page = data.current_page.unwrap_or(page);
    let mut text = format!(
        "Found {} images matching tags [{}] (showing page {}):\n\n",
        data.total, searched, current_page
    );

    for (i, image) in data.results.iter().enumerate() {
        let image_tags = if image.tags.is_empty() {
            "No tags".to_string()
        } else {
            image.tags.join(", ")
        };

        text.push_str(&format!("{}. Image ID: {}\n", i + 1, image.id));
        text.push_str(&format!("   URL: {}\n", image.url));
        text.push_str(&format!("   Description: {}\n", image.description));
        text.push_str(&format!("   Tags: {}\n", image_tags));
        text.push_str(&format!(
            "   Matched tags: {}/{}\n",
            image.matched_tag_count,
            tags.len()
        ));
        text.push_str(&format!("   Upload date: {}\n\n", image.upload_date));
    }

    if let Some(left) = remaining(data.total, current_page, limit, data.results.len()) {
        text.push_str(&next_page_hint("images", left, current_page));
    }

    text
}
