//! The research operations: search, extract, list and prompt.
//!
//! Operations run against an explicit [`ResearchContext`] (paper store plus
//! provider) and return `Result<String, ResearchError>`. Callers at the edge
//! (MCP handlers, CLI) turn failures into descriptive strings with
//! [`Operation::render`], so a failure never reaches the host as a fault.

mod extract;
mod folders;
mod prompt;
mod search;

pub use prompt::create_search_prompt;

use std::sync::Arc;

use crate::config::Config;
use crate::sources::{ArxivSource, Source, SourceError};
use crate::store::{PaperStore, StoreError};

/// Errors produced by the research operations
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// The paper provider failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The paper store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A caller-supplied argument was unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Operations whose failures are rendered as strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Extract,
    ListFolders,
}

impl Operation {
    /// Prefix placed before a rendered failure
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Operation::Search => "Error searching papers",
            Operation::Extract => "Error extracting info",
            Operation::ListFolders => "Error listing papers",
        }
    }

    /// Collapse an operation result into the string handed to the caller
    pub fn render(self, result: Result<String, ResearchError>) -> String {
        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("{}: {}", self.error_prefix(), e);
                format!("{}: {}", self.error_prefix(), e)
            }
        }
    }
}

/// Everything an operation needs: where records live and who to ask for papers
#[derive(Debug, Clone)]
pub struct ResearchContext {
    store: PaperStore,
    source: Arc<dyn Source>,
}

impl ResearchContext {
    /// Create a context from a store and a provider
    pub fn new(store: PaperStore, source: Arc<dyn Source>) -> Self {
        Self { store, source }
    }

    /// Create the production context: configured store directory, arXiv provider
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let source = ArxivSource::new(config.arxiv.clone())?;
        Ok(Self::new(
            PaperStore::new(config.store.directory.clone()),
            Arc::new(source),
        ))
    }

    /// The paper store
    pub fn store(&self) -> &PaperStore {
        &self.store
    }

    /// The paper provider
    pub fn source(&self) -> &Arc<dyn Source> {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ok_passes_through() {
        assert_eq!(
            Operation::Search.render(Ok("Found 1 papers".to_string())),
            "Found 1 papers"
        );
    }

    #[test]
    fn test_render_error_prefixes() {
        let err = || ResearchError::Source(SourceError::Network("timed out".to_string()));

        assert_eq!(
            Operation::Search.render(Err(err())),
            "Error searching papers: Network error: timed out"
        );
        assert_eq!(
            Operation::Extract.render(Err(err())),
            "Error extracting info: Network error: timed out"
        );
        assert_eq!(
            Operation::ListFolders.render(Err(err())),
            "Error listing papers: Network error: timed out"
        );
    }
}
