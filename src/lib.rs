//! PixelHub MCP - tag listing and relevance search over the PixelHub image catalog
//!
//! Library modules for the MCP server

pub mod client;
pub mod config;
pub mod schema;
pub mod tools;
