//! Paper models: the provider's view of a paper and the record we persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL used when the provider does not report a PDF link
pub const ARXIV_PDF_URL: &str = "https://arxiv.org/pdf";

/// A single search result as reported by the paper provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPaper {
    /// Short identifier (e.g. "2301.12345v1")
    pub id: String,

    /// Paper title
    pub title: String,

    /// Author display names, in provider order
    pub authors: Vec<String>,

    /// Abstract text
    pub summary: String,

    /// First publication timestamp
    pub published: DateTime<Utc>,

    /// Direct PDF link, if the provider reported one
    pub pdf_url: Option<String>,

    /// Classification tags, in provider order
    pub categories: Vec<String>,
}

/// Normalized paper metadata, one file per record in the paper store
///
/// The serialized form is exactly these seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Provider identifier; also the filename stem in the store
    pub id: String,

    /// Paper title
    pub title: String,

    /// Author display names
    pub authors: Vec<String>,

    /// Abstract text
    pub r#abstract: String,

    /// Publication date, `YYYY-MM-DD`
    pub published: String,

    /// Link to the full document
    pub url: String,

    /// Classification tags
    pub categories: Vec<String>,
}

impl PaperRecord {
    /// Authors joined with ", "
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

impl From<ProviderPaper> for PaperRecord {
    fn from(paper: ProviderPaper) -> Self {
        let url = paper
            .pdf_url
            .unwrap_or_else(|| format!("{}/{}", ARXIV_PDF_URL, paper.id));

        Self {
            published: paper.published.format("%Y-%m-%d").to_string(),
            id: paper.id,
            title: paper.title,
            authors: paper.authors,
            r#abstract: paper.summary,
            url,
            categories: paper.categories,
        }
    }
}
