//! The `generate_search_prompt` prompt.

use std::collections::HashMap;

use async_trait::async_trait;
use pmcp::types::{Content, GetPromptResult, PromptArgument, PromptInfo, PromptMessage, Role};
use pmcp::{Error, PromptHandler, RequestHandlerExtra};

use crate::research::create_search_prompt;

/// Name under which the prompt is registered
pub const SEARCH_PROMPT_NAME: &str = "generate_search_prompt";

/// Renders the research-planning prompt for a `topic` argument
#[derive(Debug, Clone, Default)]
pub struct SearchPromptHandler;

impl SearchPromptHandler {
    /// Build the prompt result for `args`
    pub fn render(&self, args: &HashMap<String, String>) -> Result<GetPromptResult, Error> {
        let topic = args
            .get("topic")
            .ok_or_else(|| Error::invalid_params("Missing 'topic' argument"))?;

        let messages = vec![PromptMessage {
            role: Role::User,
            content: Content::Text {
                text: create_search_prompt(topic),
            },
        }];

        Ok(GetPromptResult::new(
            messages,
            Some(format!("Research prompt for {}", topic)),
        ))
    }
}

#[async_trait]
impl PromptHandler for SearchPromptHandler {
    async fn handle(
        &self,
        args: HashMap<String, String>,
        _extra: RequestHandlerExtra,
    ) -> Result<GetPromptResult, Error> {
        self.render(&args)
    }

    fn metadata(&self) -> Option<PromptInfo> {
        Some(PromptInfo {
            name: SEARCH_PROMPT_NAME.to_string(),
            description: Some(
                "Generate a prompt for researching academic papers on a topic".to_string(),
            ),
            arguments: Some(vec![PromptArgument {
                name: "topic".to_string(),
                description: Some("The research topic".to_string()),
                required: true,
                completion: None,
                arg_type: None,
            }]),
        })
    }
}
