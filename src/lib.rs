//! # Research Server
//!
//! A Model Context Protocol (MCP) server that searches arXiv, saves each
//! result as a JSON record, and answers questions about the saved papers.
//!
//! ## Architecture
//!
//! - [`models`]: Paper records, search queries and info selectors
//! - [`sources`]: The paper provider trait, the arXiv client and a mock
//! - [`store`]: One pretty-printed JSON file per paper
//! - [`research`]: The operations (search, extract, list, prompt)
//! - [`mcp`]: Tools, resource and prompt registered with the pmcp server
//! - [`utils`]: HTTP client, retries and id validation
//! - [`config`]: Configuration management

pub mod config;
pub mod mcp;
pub mod models;
pub mod research;
pub mod sources;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use models::{InfoType, PaperRecord, SearchQuery};
pub use research::{ResearchContext, ResearchError};
pub use sources::{Source, SourceError};
pub use store::PaperStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
