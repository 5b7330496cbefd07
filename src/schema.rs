//! Response shapes for the PixelHub API
//!
//! Every endpoint wraps its payload in a `{code, data}` envelope. Optional
//! fields are resolved to their display defaults here, while decoding, so
//! the tools never have to guess at missing values.

use serde::Deserialize;
use std::fmt;

/// Envelope code the API uses to signal success
pub const SUCCESS_CODE: i64 = 200;

/// `{code, data}` wrapper around every API payload
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Payload of a successful envelope
    ///
    /// Returns `None` when `code` is not 200 or `data` is missing.
    pub fn into_success(self) -> Option<T> {
        if self.code == SUCCESS_CODE {
            self.data
        } else {
            None
        }
    }
}

/// A tag with its usage count
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTag")]
pub struct Tag {
    pub name: String,
    pub count: u64,
}

#[derive(Deserialize)]
struct RawTag {
    name: Option<String>,
    count: Option<u64>,
}

impl From<RawTag> for Tag {
    fn from(raw: RawTag) -> Self {
        Self {
            name: raw.name.unwrap_or_else(|| "Unknown".to_string()),
            count: raw.count.unwrap_or(0),
        }
    }
}

/// One page of `GET /tags`
#[derive(Debug, Clone, Deserialize)]
pub struct TagPage {
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub current_page: Option<i64>,
}

/// Image identifiers arrive as either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Number(n) => write!(f, "{}", n),
            ImageId::Text(s) => f.write_str(s),
        }
    }
}

/// An image matched by relevance search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawImage")]
pub struct ImageResult {
    pub id: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
    pub matched_tag_count: u64,
    pub upload_date: String,
}

#[derive(Deserialize)]
struct RawImage {
    id: Option<ImageId>,
    url: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    matched_tag_count: Option<u64>,
    upload_date: Option<String>,
}

impl From<RawImage> for ImageResult {
    fn from(raw: RawImage) -> Self {
        Self {
            id: raw
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            url: raw.url.unwrap_or_default(),
            description: raw
                .description
                .unwrap_or_else(|| "No description".to_string()),
            tags: raw.tags.unwrap_or_default(),
            matched_tag_count: raw.matched_tag_count.unwrap_or(0),
            upload_date: raw.upload_date.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// One page of `GET /search/relevance`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub results: Vec<ImageResult>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub current_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let envelope: Envelope<TagPage> = serde_json::from_value(json!({
            "code": 200,
            "data": {"tags": [{"name": "nature", "count": 5}], "total": 1, "current_page": 1}
        }))
        .unwrap();

        let page = envelope.into_success().unwrap();
        assert_eq!(page.tags, vec![Tag { name: "nature".into(), count: 5 }]);
        assert_eq!(page.total, 1);
        assert_eq!(page.current_page, Some(1));
    }

    #[test]
    fn test_error_code_without_data() {
        let envelope: Envelope<TagPage> = serde_json::from_value(json!({"code": 500})).unwrap();
        assert!(envelope.into_success().is_none());
    }

    #[test]
    fn test_success_code_without_data() {
        let envelope: Envelope<TagPage> = serde_json::from_value(json!({"code": 200})).unwrap();
        assert!(envelope.into_success().is_none());
    }

    #[test]
    fn test_missing_tags_array_is_rejected() {
        let result: Result<Envelope<TagPage>, _> =
            serde_json::from_value(json!({"code": 200, "data": {"total": 3}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_without_total_or_current_page() {
        let page: SearchPage = serde_json::from_value(json!({"results": [{}]})).unwrap();

        assert_eq!(page.total, 0);
        assert_eq!(page.current_page, None);
        assert_eq!(page.results[0].id, "Unknown");
        assert_eq!(page.results[0].url, "");
    }

    #[test]
    fn test_tag_defaults() {
        let tag: Tag = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tag.name, "Unknown");
        assert_eq!(tag.count, 0);
    }

    #[test]
    fn test_image_defaults_for_null_fields() {
        let image: ImageResult = serde_json::from_value(json!({
            "id": 42,
            "url": "https://cdn.example.com/42.jpg",
            "description": null,
            "tags": null,
            "upload_date": null
        }))
        .unwrap();

        assert_eq!(image.id, "42");
        assert_eq!(image.description, "No description");
        assert!(image.tags.is_empty());
        assert_eq!(image.matched_tag_count, 0);
        assert_eq!(image.upload_date, "Unknown");
    }

    #[test]
    fn test_image_string_id() {
        let image: ImageResult = serde_json::from_value(json!({
            "id": "img-7",
            "url": "u",
            "description": "a cat",
            "tags": ["cat", "indoor"],
            "matched_tag_count": 2,
            "upload_date": "2024-05-01"
        }))
        .unwrap();

        assert_eq!(image.id, "img-7");
        assert_eq!(image.tags, vec!["cat", "indoor"]);
        assert_eq!(image.matched_tag_count, 2);
        assert_eq!(image.upload_date, "2024-05-01");
    }
}
