//! MCP (Model Context Protocol) surface of the research server.

mod handlers;
pub mod prompts;
pub mod resources;
pub mod server;
mod tools;

pub use prompts::SearchPromptHandler;
pub use resources::{PaperFoldersResource, FOLDERS_URI};
pub use server::McpServer;
pub use tools::{Tool, ToolHandler, ToolRegistry};
