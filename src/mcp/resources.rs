//! The `papers://folders` resource.

use async_trait::async_trait;
use pmcp::types::{Content, ListResourcesResult, ReadResourceResult, ResourceInfo};
use pmcp::{Error, RequestHandlerExtra, ResourceHandler};

use crate::research::{Operation, ResearchContext};

/// URI of the paper listing resource
pub const FOLDERS_URI: &str = "papers://folders";

/// Serves the store listing as a plain-text resource
#[derive(Debug, Clone)]
pub struct PaperFoldersResource {
    context: ResearchContext,
}

impl PaperFoldersResource {
    pub fn new(context: ResearchContext) -> Self {
        Self { context }
    }

    /// The listing text, with failures rendered inline
    pub fn contents(&self) -> String {
        Operation::ListFolders.render(self.context.list_paper_folders())
    }

    fn info() -> ResourceInfo {
        ResourceInfo {
            uri: FOLDERS_URI.to_string(),
            name: "paper_folders".to_string(),
            description: Some("Saved paper records in the papers directory".to_string()),
            mime_type: Some("text/plain".to_string()),
            meta: None,
        }
    }

    /// The resource body, tagged with its uri and mime type
    pub fn read_contents(&self) -> ReadResourceResult {
        ReadResourceResult::new(vec![Content::Resource {
            uri: FOLDERS_URI.to_string(),
            text: Some(self.contents()),
            mime_type: Some("text/plain".to_string()),
            meta: None,
        }])
    }

    /// The single-entry resource listing
    fn listing() -> Result<ListResourcesResult, Error> {
        serde_json::from_value(serde_json::json!({ "resources": [Self::info()] }))
            .map_err(|e| Error::internal(format!("Failed to build resource listing: {}", e)))
    }
}

#[async_trait]
impl ResourceHandler for PaperFoldersResource {
    async fn read(
        &self,
        uri: &str,
        _extra: RequestHandlerExtra,
    ) -> Result<ReadResourceResult, Error> {
        if uri != FOLDERS_URI {
            return Err(Error::invalid_params(format!("Unknown resource: {}", uri)));
        }

        Ok(self.read_contents())
    }

    async fn list(
        &self,
        _cursor: Option<String>,
        _extra: RequestHandlerExtra,
    ) -> Result<ListResourcesResult, Error> {
        Self::listing()
    }
}
