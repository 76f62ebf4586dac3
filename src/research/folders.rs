//! `list_paper_folders`: report which records the store holds.

use super::{ResearchContext, ResearchError};

impl ResearchContext {
    /// List the record files in the store by name
    pub fn list_paper_folders(&self) -> Result<String, ResearchError> {
        let files = match self.store.list()? {
            Some(files) => files,
            None => return Ok("No papers directory found. Search for papers first.".to_string()),
        };

        if files.is_empty() {
            return Ok("No papers found. Search for papers first.".to_string());
        }

        Ok(format!("Found {} papers: {}", files.len(), files.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperRecord;
    use crate::research::Operation;
    use crate::sources::MockSource;
    use crate::store::PaperStore;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn context(store: PaperStore) -> ResearchContext {
        ResearchContext::new(store, Arc::new(MockSource::new()))
    }

    #[test]
    fn test_list_without_directory() {
        let dir = tempdir().unwrap();
        let ctx = context(PaperStore::new(dir.path().join("papers")));

        assert_eq!(
            ctx.list_paper_folders().unwrap(),
            "No papers directory found. Search for papers first."
        );
    }

    #[test]
    fn test_list_empty_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        let ctx = context(PaperStore::new(dir.path()));

        assert_eq!(
            ctx.list_paper_folders().unwrap(),
            "No papers found. Search for papers first."
        );
    }

    #[test]
    fn test_list_store_path_is_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers");
        std::fs::write(&path, "").unwrap();
        let ctx = context(PaperStore::new(&path));

        let rendered = Operation::ListFolders.render(ctx.list_paper_folders());
        assert!(rendered.starts_with("Error listing papers: IO error:"));
    }

    #[test]
    fn test_list_records() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());
        for id in ["2402.00002v1", "2401.00001v1"] {
            store
                .save(&PaperRecord {
                    id: id.to_string(),
                    title: String::new(),
                    authors: Vec::new(),
                    r#abstract: String::new(),
                    published: "2024-01-01".to_string(),
                    url: String::new(),
                    categories: Vec::new(),
                })
                .unwrap();
        }
        let ctx = context(store);

        assert_eq!(
            ctx.list_paper_folders().unwrap(),
            "Found 2 papers: 2401.00001v1.json, 2402.00002v1.json"
        );
    }
}
