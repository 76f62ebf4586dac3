//! MCP server implementation using pmcp.
//!
//! Registers the research tools, the `papers://folders` resource and the
//! `generate_search_prompt` prompt, then serves them over streamable HTTP
//! or stdio.

use crate::mcp::prompts::{SearchPromptHandler, SEARCH_PROMPT_NAME};
use crate::mcp::resources::PaperFoldersResource;
use crate::mcp::tools::ToolRegistry;
use crate::research::ResearchContext;
use async_trait::async_trait;
use pmcp::{
    server::streamable_http_server::StreamableHttpServer, Error, RequestHandlerExtra, Server,
    ServerCapabilities, ToolHandler, ToolInfo,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Name reported to MCP clients
pub const SERVER_NAME: &str = "research";

/// The MCP server exposing the research operations
#[derive(Debug, Clone)]
pub struct McpServer {
    server: Arc<Mutex<Server>>,
}

impl McpServer {
    /// Create a new MCP server bound to the given research context
    pub fn new(context: ResearchContext) -> Result<Self, pmcp::Error> {
        let server = Self::build_server_impl(context)?;
        Ok(Self {
            server: Arc::new(Mutex::new(server)),
        })
    }

    fn build_server_impl(context: ResearchContext) -> Result<Server, pmcp::Error> {
        let tools = ToolRegistry::from_context(&context);

        let mut builder = Server::builder()
            .name(SERVER_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::default());

        for tool in tools.all() {
            let tool_handler = ToolWrapper {
                name: tool.name.clone(),
                description: Some(tool.description.clone()),
                input_schema: tool.input_schema.clone(),
                handler: tool.handler.clone(),
            };
            builder = builder.tool(tool_handler.name.clone(), tool_handler);
        }

        builder
            .prompt(SEARCH_PROMPT_NAME, SearchPromptHandler)
            .resources(PaperFoldersResource::new(context))
            .build()
    }

    /// Run the server in stdio mode
    ///
    /// Consumes the server; fails if a clone is still alive.
    pub async fn run(self) -> Result<(), pmcp::Error> {
        tracing::info!("Starting MCP server in stdio mode");

        let server = Arc::try_unwrap(self.server)
            .map_err(|_| Error::internal("Cannot unwrap Arc - multiple references exist"))?
            .into_inner();

        server.run_stdio().await
    }

    /// Run the server over streamable HTTP on `addr`
    ///
    /// Returns the bound address and the task serving requests.
    pub async fn run_http(&self, addr: &str) -> Result<(SocketAddr, JoinHandle<()>), pmcp::Error> {
        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| Error::invalid_params(format!("Invalid address: {}", e)))?;

        let http_server = StreamableHttpServer::new(socket_addr, self.server.clone());
        let (bound, handle) = http_server.start().await?;

        tracing::info!("MCP server listening on http://{}", bound);
        Ok((bound, handle))
    }
}

/// Wrapper for adapting our Tool to pmcp's ToolHandler
#[derive(Clone)]
struct ToolWrapper {
    name: String,
    description: Option<String>,
    input_schema: Value,
    handler: Arc<dyn crate::mcp::tools::ToolHandler>,
}

#[async_trait]
impl ToolHandler for ToolWrapper {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> Result<Value, Error> {
        self.handler
            .execute(args)
            .await
            .map(call_tool_result)
            .map_err(|e| Error::internal(&e))
    }

    fn metadata(&self) -> Option<ToolInfo> {
        Some(ToolInfo::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        ))
    }
}

/// Wrap text output as a `CallToolResult`, so the client receives the
/// text itself as the content body rather than its JSON encoding
fn call_tool_result(value: Value) -> Value {
    match value {
        Value::String(text) => serde_json::json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false
        }),
        other => other,
    }
}
