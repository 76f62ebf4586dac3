//! arXiv research source implementation.

use async_trait::async_trait;
use feed_rs::model::Entry;
use feed_rs::parser;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::sync::Arc;

use crate::config::ArxivConfig;
use crate::models::{ProviderPaper, SearchQuery};
use crate::sources::{Source, SourceError};
use crate::utils::{with_retry, HttpClient, RetryConfig};

/// Marker in the id of the entry arXiv returns for a rejected query
const ARXIV_ERROR_ID: &str = "/api/errors";

/// arXiv research source
///
/// Queries the Atom API sorted by relevance, paging until the requested
/// number of results is collected or the feed runs out. Consecutive
/// requests are spaced by `delay_seconds`, as the arXiv API terms ask.
#[derive(Clone)]
pub struct ArxivSource {
    client: HttpClient,
    config: ArxivConfig,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl std::fmt::Debug for ArxivSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivSource")
            .field("config", &self.config)
            .field("rate_limited", &self.limiter.is_some())
            .finish()
    }
}

impl ArxivSource {
    /// Create a new arXiv source
    pub fn new(config: ArxivConfig) -> Result<Self, SourceError> {
        let client = HttpClient::new(config.timeout())?;
        Ok(Self::with_client(client, config))
    }

    /// Create with a custom HTTP client
    pub fn with_client(client: HttpClient, config: ArxivConfig) -> Self {
        let limiter = Quota::with_period(config.delay())
            .map(|quota| Arc::new(RateLimiter::direct(quota)));

        Self {
            client,
            config,
            limiter,
        }
    }

    /// Build the query URL for one page of results
    fn page_url(&self, topic: &str, start: usize, max_results: usize) -> String {
        format!(
            "{}?search_query={}&start={}&max_results={}&sortBy=relevance&sortOrder=descending",
            self.config.api_url,
            urlencoding::encode(topic),
            start,
            max_results
        )
    }

    /// Fetch and parse one page of the Atom feed
    async fn fetch_page(
        &self,
        topic: &str,
        start: usize,
        max_results: usize,
    ) -> Result<Vec<Entry>, SourceError> {
        let url = self.page_url(topic, start, max_results);
        let retry = RetryConfig::with_retries(self.config.max_retries)
            .initial_delay(self.config.delay());

        let feed = with_retry(retry, || {
            let url = url.clone();
            async move {
                if let Some(limiter) = &self.limiter {
                    limiter.until_ready().await;
                }

                tracing::debug!("Fetching arXiv page: {}", url);

                let response = self
                    .client
                    .client()
                    .get(&url)
                    .header("Accept", "application/atom+xml")
                    .send()
                    .await
                    .map_err(|e| {
                        SourceError::Network(format!("Failed to fetch arXiv results: {}", e))
                    })?;

                if !response.status().is_success() {
                    return Err(SourceError::Status(response.status().as_u16()));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

                parser::parse(bytes.as_ref())
                    .map_err(|e| SourceError::Parse(format!("Failed to parse Atom feed: {}", e)))
            }
        })
        .await?;

        Ok(feed.entries)
    }

    /// Extract the short id (e.g. "2301.12345v1") from an entry id URL
    pub fn short_id(entry_id: &str) -> Result<String, SourceError> {
        entry_id
            .split_once("/abs/")
            .map(|(_, id)| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SourceError::Parse(format!("Unexpected arXiv entry id: {}", entry_id)))
    }

    /// Parse an arXiv Atom feed entry
    fn parse_entry(entry: &Entry) -> Result<ProviderPaper, SourceError> {
        if entry.id.contains(ARXIV_ERROR_ID) {
            let message = entry
                .summary
                .as_ref()
                .map(|s| s.content.trim().to_string())
                .unwrap_or_else(|| "arXiv rejected the query".to_string());
            return Err(SourceError::Api(message));
        }

        let id = Self::short_id(&entry.id)?;

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        let authors = entry.authors.iter().map(|a| a.name.clone()).collect();

        let summary = entry
            .summary
            .as_ref()
            .map(|s| s.content.clone())
            .unwrap_or_default();

        let published = entry
            .published
            .or(entry.updated)
            .ok_or_else(|| SourceError::Parse(format!("Missing publication date for {}", id)))?;

        let pdf_url = entry
            .links
            .iter()
            .find(|link| {
                link.title.as_deref() == Some("pdf")
                    || link.media_type.as_deref() == Some("application/pdf")
            })
            .map(|link| link.href.clone());

        let categories = entry.categories.iter().map(|c| c.term.clone()).collect();

        Ok(ProviderPaper {
            id,
            title,
            authors,
            summary,
            published,
            pdf_url,
            categories,
        })
    }
}

#[async_trait]
impl Source for ArxivSource {
    fn name(&self) -> &str {
        "arXiv"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ProviderPaper>, SourceError> {
        let page_size = self.config.page_size.max(1);
        let mut papers = Vec::with_capacity(query.max_results.min(page_size));
        let mut start = 0;

        while papers.len() < query.max_results {
            let wanted = (query.max_results - papers.len()).min(page_size);
            let entries = self.fetch_page(&query.topic, start, wanted).await?;
            let fetched = entries.len();

            for entry in &entries {
                papers.push(Self::parse_entry(entry)?);
            }

            if fetched < wanted {
                break;
            }
            start += fetched;
        }

        papers.truncate(query.max_results);
        tracing::debug!("arXiv returned {} papers for '{}'", papers.len(), query.topic);
        Ok(papers)
    }
}
