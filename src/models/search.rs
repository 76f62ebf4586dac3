//! Search and extraction request models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of papers requested per search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Topic to search for, passed to the provider verbatim
    pub topic: String,

    /// Maximum number of results to request from the provider
    pub max_results: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            topic: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

/// Field selector for `extract_info`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoType {
    /// Title, authors and abstract
    #[default]
    Summary,
    /// Comma-joined author list
    Authors,
    /// Raw abstract text
    Abstract,
    /// Full-text link
    Url,
}

impl InfoType {
    /// Every selector, in the order they are advertised
    pub const ALL: [InfoType; 4] = [
        InfoType::Summary,
        InfoType::Authors,
        InfoType::Abstract,
        InfoType::Url,
    ];

    /// Wire name of the selector
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::Summary => "summary",
            InfoType::Authors => "authors",
            InfoType::Abstract => "abstract",
            InfoType::Url => "url",
        }
    }

    /// Comma-separated list of all selector names
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an `info_type` string names no known selector
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown info type: {0}")]
pub struct UnknownInfoType(pub String);

impl FromStr for InfoType {
    type Err = UnknownInfoType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownInfoType(s.to_string()))
    }
}
