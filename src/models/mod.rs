//! Core data models for papers, search queries and extraction selectors.

mod paper;
mod search;

pub use paper::{PaperRecord, ProviderPaper, ARXIV_PDF_URL};
pub use search::{InfoType, SearchQuery, UnknownInfoType, DEFAULT_MAX_RESULTS};
