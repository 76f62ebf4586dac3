//! `extract_info`: project one field of a saved record.

use super::{ResearchContext, ResearchError};
use crate::models::{InfoType, PaperRecord};

impl ResearchContext {
    /// Read the saved record for `paper_id` and render the `info_type` field
    ///
    /// An unknown `info_type` yields the list of valid selectors whether or
    /// not the paper exists; a missing paper yields a not-found message.
    pub fn extract_info(&self, paper_id: &str, info_type: &str) -> Result<String, ResearchError> {
        let info_type = match info_type.parse::<InfoType>() {
            Ok(info_type) => info_type,
            Err(_) => return Ok(format!("Available info types: {}", InfoType::options())),
        };

        match self.store.load(paper_id)? {
            Some(record) => Ok(project(&record, info_type)),
            None => Ok(format!(
                "Paper {} not found. Please search for papers first.",
                paper_id
            )),
        }
    }
}

fn project(record: &PaperRecord, info_type: InfoType) -> String {
    match info_type {
        InfoType::Summary => format!(
            "Title: {}\nAuthors: {}\nAbstract: {}",
            record.title,
            record.author_line(),
            record.r#abstract
        ),
        InfoType::Authors => format!("Authors: {}", record.author_line()),
        InfoType::Abstract => record.r#abstract.clone(),
        InfoType::Url => record.url.clone(),
    }
}
