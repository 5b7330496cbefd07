//! PixelHub API access
//!
//! The MCP tools talk to the catalog through the [`ImageCatalog`] trait.
//! [`PixelHubClient`] is the HTTP implementation used in production.

pub mod error;
pub mod pixelhub;
pub mod traits;

// Re-exports
pub use error::{ClientError, ClientResult};
pub use pixelhub::{PixelHubClient, RELEVANCE_ENDPOINT, TAGS_ENDPOINT, join_tags};
pub use traits::ImageCatalog;
