//! Paper providers.
//!
//! A [`Source`] answers a topic query with relevance-ranked
//! [`ProviderPaper`]s. The production implementation is [`ArxivSource`];
//! [`MockSource`] returns canned results for tests.
//!
//! New providers can be added by implementing the trait and handing the
//! implementation to [`crate::research::ResearchContext::new`].

mod arxiv;
pub mod mock;

pub use arxiv::ArxivSource;
pub use mock::MockSource;

use crate::models::{ProviderPaper, SearchQuery};
use async_trait::async_trait;

/// The Source trait defines the interface for all paper providers.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Search for up to `query.max_results` papers, most relevant first
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ProviderPaper>, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status
    #[error("Provider returned HTTP status {0}")]
    Status(u16),

    /// The provider reported an error inside an otherwise valid response
    #[error("API error: {0}")]
    Api(String),

    /// Parsing error (Atom feed, dates, identifiers)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SourceError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Network(_) => true,
            SourceError::Status(status) => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SourceError::Status(status.as_u16()),
            None => SourceError::Network(err.to_string()),
        }
    }
}
