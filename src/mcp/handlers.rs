//! Tool handlers backed by the research operations.
//!
//! Handlers never fail towards the host: argument problems and operation
//! failures are rendered into the returned text by [`Operation::render`].

use serde_json::Value;

use super::tools::ToolHandler;
use crate::models::{InfoType, SearchQuery, DEFAULT_MAX_RESULTS};
use crate::research::{Operation, ResearchContext, ResearchError};

/// Read a required string argument
fn required_str<'a>(args: &'a Value, name: &str) -> Result<&'a str, ResearchError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ResearchError::InvalidArgument(format!("Missing '{}' parameter", name)))
}

/// Read `max_results`, falling back to the default when absent
fn max_results(args: &Value) -> Result<usize, ResearchError> {
    match args.get("max_results") {
        None | Some(Value::Null) => Ok(DEFAULT_MAX_RESULTS),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                ResearchError::InvalidArgument(format!(
                    "'max_results' must be a non-negative integer, got {}",
                    value
                ))
            }),
    }
}

/// Read `info_type`; absent means `summary`, a non-string never matches a selector
fn info_type(args: &Value) -> &str {
    match args.get("info_type") {
        None | Some(Value::Null) => InfoType::default().as_str(),
        Some(value) => value.as_str().unwrap_or(""),
    }
}

/// Handler for `search_papers`
#[derive(Debug)]
pub struct SearchPapersHandler {
    pub context: ResearchContext,
}

impl SearchPapersHandler {
    async fn search(&self, args: &Value) -> Result<String, ResearchError> {
        let topic = required_str(args, "topic")?;
        let query = SearchQuery::new(topic).max_results(max_results(args)?);
        self.context.search_papers(&query).await
    }
}

#[async_trait::async_trait]
impl ToolHandler for SearchPapersHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let result = self.search(&args).await;
        Ok(Value::String(Operation::Search.render(result)))
    }
}

/// Handler for `extract_info`
#[derive(Debug)]
pub struct ExtractInfoHandler {
    pub context: ResearchContext,
}

impl ExtractInfoHandler {
    fn extract(&self, args: &Value) -> Result<String, ResearchError> {
        let paper_id = required_str(args, "paper_id")?;
        self.context.extract_info(paper_id, info_type(args))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ExtractInfoHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let result = self.extract(&args);
        Ok(Value::String(Operation::Extract.render(result)))
    }
}
