//! Tool registry for MCP tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::handlers::{ExtractInfoHandler, SearchPapersHandler};
use crate::models::{InfoType, DEFAULT_MAX_RESULTS};
use crate::research::ResearchContext;

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search_papers")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Registry for all MCP tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry holding the research tools bound to `context`
    pub fn from_context(context: &ResearchContext) -> Self {
        let mut registry = Self::default();

        registry.register(Tool {
            name: "search_papers".to_string(),
            description: format!(
                "Search for papers on {} about a topic and store their information in {}/",
                context.source().name(),
                context.store().dir().display()
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "The topic to search for"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to retrieve",
                        "minimum": 0,
                        "default": DEFAULT_MAX_RESULTS
                    }
                },
                "required": ["topic"]
            }),
            handler: Arc::new(SearchPapersHandler {
                context: context.clone(),
            }),
        });

        let info_types: Vec<&str> = InfoType::ALL.iter().map(InfoType::as_str).collect();
        registry.register(Tool {
            name: "extract_info".to_string(),
            description: "Get information about a saved paper by its ID".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "paper_id": {
                        "type": "string",
                        "description": "The ID of the paper to look for"
                    },
                    "info_type": {
                        "type": "string",
                        "description": "Which information to return",
                        "enum": info_types,
                        "default": InfoType::default().as_str()
                    }
                },
                "required": ["paper_id"]
            }),
            handler: Arc::new(ExtractInfoHandler {
                context: context.clone(),
            }),
        });

        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get all tools, ordered by name
    pub fn all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, String> {
        let tool = self
            .get(name)
            .ok_or_else(|| format!("Tool '{}' not found", name))?;

        tool.handler.execute(args).await
    }
}
