//! Mock source for testing purposes.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Mutex, PoisonError};

use crate::models::{ProviderPaper, SearchQuery};
use crate::sources::{Source, SourceError};

/// A mock source that returns predefined papers, truncated to the
/// requested `max_results`, or a configured failure.
#[derive(Debug, Default)]
pub struct MockSource {
    papers: Mutex<Vec<ProviderPaper>>,
    failure: Mutex<Option<String>>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockSource {
    /// Create a new mock source with no papers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source that returns the given papers.
    pub fn with_papers(papers: Vec<ProviderPaper>) -> Self {
        let source = Self::new();
        source.set_papers(papers);
        source
    }

    /// Set the papers to return.
    pub fn set_papers(&self, papers: Vec<ProviderPaper>) {
        *self.papers.lock().unwrap_or_else(PoisonError::into_inner) = papers;
    }

    /// Make every search fail with a network error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ProviderPaper>, SourceError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());

        if let Some(message) = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(SourceError::Network(message));
        }

        let papers = self.papers.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(papers.iter().take(query.max_results).cloned().collect())
    }
}

/// Helper function to create a mock paper for testing.
pub fn make_paper(id: &str, title: &str) -> ProviderPaper {
    ProviderPaper {
        id: id.to_string(),
        title: title.to_string(),
        authors: vec!["Test Author".to_string(), "Another Author".to_string()],
        summary: format!("Abstract for {}", title),
        published: Utc
            .with_ymd_and_hms(2024, 3, 9, 17, 45, 0)
            .single()
            .unwrap_or_default(),
        pdf_url: Some(format!("http://arxiv.org/pdf/{}", id)),
        categories: vec!["cs.AI".to_string()],
    }
}
