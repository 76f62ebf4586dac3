//! `search_papers`: query the provider and persist every result.

use super::{ResearchContext, ResearchError};
use crate::models::{PaperRecord, SearchQuery};

impl ResearchContext {
    /// Search the provider for `query.topic` and save each result to the store
    ///
    /// Existing records with the same id are replaced. Returns a confirmation
    /// naming the number of papers found and the store directory.
    pub async fn search_papers(&self, query: &SearchQuery) -> Result<String, ResearchError> {
        self.store.ensure_dir()?;

        let papers = self.source.search(query).await?;

        let mut saved = 0;
        for paper in papers {
            let record = PaperRecord::from(paper);
            self.store.save(&record)?;
            saved += 1;
        }

        tracing::info!(
            "Saved {} papers on '{}' from {} to {}",
            saved,
            query.topic,
            self.source.name(),
            self.store.dir().display()
        );

        Ok(format!(
            "Found {} papers on '{}'. Papers saved to {}/ directory.",
            saved,
            query.topic,
            self.store.dir().display()
        ))
    }
}
