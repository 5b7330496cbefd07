//! Tag listing tool
//!
//! Renders one page of PixelHub tags, most used first, so an agent can
//! pick search terms that actually exist in the catalog.

use rmcp::schemars;

use super::successful_page;
use super::pagination::{next_page_hint, normalize_limit, normalize_page, remaining};
use crate::client::ImageCatalog;

/// Largest page the tag listing accepts; also used when the limit is out of range
pub const MAX_TAG_LIMIT: i64 = 1000;

/// Text returned when the catalog has no tags
pub const NO_TAGS_TEXT: &str = "No tags found in the system.";

/// Instruction appended to every successful listing
pub const NEXT_STEP_TEXT: &str = "Next step: call search_images_by_tags with the tags from this list that match the user's request.";

/// Tag listing parameters
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListTagsParams {
    #[schemars(description = "Page number for pagination, default is 1")]
    pub page: Option<i64>,
    #[schemars(description = "Number of tags per page, default is 1000, maximum is 1000")]
    pub limit: Option<i64>,
}

/// List tags with their usage counts
pub async fn list_tags(catalog: &dyn ImageCatalog, params: ListTagsParams) -> String {
    let page = normalize_page(params.page.unwrap_or(1));
    let limit = normalize_limit(params.limit.unwrap_or(MAX_TAG_LIMIT), MAX_TAG_LIMIT, MAX_TAG_LIMIT);

    tracing::info!(page, limit, "list_tags");

    let data = match successful_page("list_tags", catalog.list_tags(page, limit).await) {
        Ok(data) => data,
        Err(text) => return text,
    };

    if data.tags.is_empty() {
        return NO_TAGS_TEXT.to_string();
    }

    let current_page = data.current_page.unwrap_or(page);
    let mut text = format!(
        "Found {} tags in total (showing page {}):\n\n",
        data.total, current_page
    );

    for (i, tag) in data.tags.iter().enumerate() {
        let plural = if tag.count == 1 { "" } else { "s" };
        text.push_str(&format!(
            "{}. '{}' - used {} time{}\n",
            i + 1,
            tag.name,
            tag.count,
            plural
        ));
    }

    if let Some(left) = remaining(data.total, current_page, limit, data.tags.len()) {
        text.push('\n');
        text.push_str(&next_page_hint("tags", left, current_page));
        text.push('\n');
    }

    text.push('\n');
    text.push_str(NEXT_STEP_TEXT);
    text
}
