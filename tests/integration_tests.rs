//! Integration tests for the research server
//!
//! These drive the research operations end to end against a mock provider
//! and a temporary papers directory.

use research_server::mcp::{McpServer, ToolRegistry};
use research_server::models::{PaperRecord, SearchQuery};
use research_server::research::{create_search_prompt, Operation, ResearchContext};
use research_server::sources::mock::{make_paper, MockSource};
use research_server::store::PaperStore;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn papers(n: usize) -> Vec<research_server::models::ProviderPaper> {
    (1..=n)
        .map(|i| make_paper(&format!("2401.{:05}v1", i), &format!("Paper {}", i)))
        .collect()
}

fn json_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

/// Test that the server can be created successfully
#[tokio::test]
async fn test_server_initialization() {
    let dir = tempdir().unwrap();
    let context = ResearchContext::new(PaperStore::new(dir.path()), Arc::new(MockSource::new()));

    let server = McpServer::new(context);
    assert!(server.is_ok());
}

/// A search saves min(max_results, matches) records, each with every field
#[tokio::test]
async fn test_search_saves_bounded_records() {
    let dir = tempdir().unwrap();
    let store_dir = dir.path().join("papers");
    let source = Arc::new(MockSource::with_papers(papers(8)));
    let context = ResearchContext::new(PaperStore::new(&store_dir), source.clone());

    context
        .search_papers(&SearchQuery::new("diffusion").max_results(3))
        .await
        .unwrap();
    assert_eq!(json_files(&store_dir).len(), 3);

    source.set_papers(papers(2));
    let fresh = tempdir().unwrap();
    let context = ResearchContext::new(PaperStore::new(fresh.path()), source);
    context
        .search_papers(&SearchQuery::new("diffusion").max_results(10))
        .await
        .unwrap();
    let files = json_files(fresh.path());
    assert_eq!(files, vec!["2401.00001v1.json", "2401.00002v1.json"]);

    let raw = std::fs::read_to_string(fresh.path().join("2401.00001v1.json")).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    for field in [
        "id",
        "title",
        "authors",
        "abstract",
        "published",
        "url",
        "categories",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(value["published"], json!("2024-03-09"));
}

/// Repeated ids are replaced, never merged
#[tokio::test]
async fn test_search_overwrites_existing_record() {
    let dir = tempdir().unwrap();
    let source = Arc::new(MockSource::with_papers(vec![make_paper(
        "2401.00001v1",
        "First Title",
    )]));
    let context = ResearchContext::new(PaperStore::new(dir.path()), source.clone());

    context
        .search_papers(&SearchQuery::new("a"))
        .await
        .unwrap();
    source.set_papers(vec![make_paper("2401.00001v1", "Second Title")]);
    context
        .search_papers(&SearchQuery::new("b"))
        .await
        .unwrap();

    let record: PaperRecord = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("2401.00001v1.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(record.title, "Second Title");
    assert_eq!(json_files(dir.path()).len(), 1);
}

/// The saved url is what extract_info returns
#[tokio::test]
async fn test_search_then_extract_url() {
    let dir = tempdir().unwrap();
    let context = ResearchContext::new(
        PaperStore::new(dir.path()),
        Arc::new(MockSource::with_papers(papers(2))),
    );
    context
        .search_papers(&SearchQuery::new("x"))
        .await
        .unwrap();

    let stored: PaperRecord = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("2401.00002v1.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        context.extract_info("2401.00002v1", "url").unwrap(),
        stored.url
    );
}

#[test]
fn test_extract_unknown_and_invalid() {
    let dir = tempdir().unwrap();
    let context = ResearchContext::new(PaperStore::new(dir.path()), Arc::new(MockSource::new()));

    assert_eq!(
        context.extract_info("0000.00000", "summary").unwrap(),
        "Paper 0000.00000 not found. Please search for papers first."
    );
    assert_eq!(
        context.extract_info("0000.00000", "title").unwrap(),
        "Available info types: summary, authors, abstract, url"
    );
    assert_eq!(
        Operation::Extract.render(context.extract_info("a/../../b", "summary")),
        "Error extracting info: Path traversal detected: a/../../b"
    );
}

#[tokio::test]
async fn test_listing_lifecycle() {
    let dir = tempdir().unwrap();
    let store_dir = dir.path().join("papers");
    let context = ResearchContext::new(
        PaperStore::new(&store_dir),
        Arc::new(MockSource::with_papers(papers(2))),
    );

    assert_eq!(
        context.list_paper_folders().unwrap(),
        "No papers directory found. Search for papers first."
    );

    std::fs::create_dir_all(&store_dir).unwrap();
    assert_eq!(
        context.list_paper_folders().unwrap(),
        "No papers found. Search for papers first."
    );

    context
        .search_papers(&SearchQuery::new("x"))
        .await
        .unwrap();
    assert_eq!(
        context.list_paper_folders().unwrap(),
        "Found 2 papers: 2401.00001v1.json, 2401.00002v1.json"
    );
}

#[test]
fn test_prompt_contains_topic() {
    let prompt = create_search_prompt("federated learning");

    let strategy = prompt.find("1. Search Strategy:").unwrap();
    let questions = prompt.find("2. Key Questions to Investigate:").unwrap();
    let analysis = prompt.find("3. Analysis Framework:").unwrap();

    assert!(prompt[strategy..questions].contains("federated learning"));
    assert!(prompt[questions..analysis].contains("federated learning"));
    assert_eq!(prompt, create_search_prompt("federated learning"));
}

/// Tools called through the registry never surface a fault
#[tokio::test]
async fn test_tool_failures_are_text() {
    let dir = tempdir().unwrap();
    let source = Arc::new(MockSource::new());
    source.fail_with("arXiv unreachable");
    let context = ResearchContext::new(PaperStore::new(dir.path()), source);
    let registry = ToolRegistry::from_context(&context);

    let out = registry
        .execute("search_papers", json!({"topic": "robots"}))
        .await
        .unwrap();
    assert_eq!(
        out,
        json!("Error searching papers: Network error: arXiv unreachable")
    );
}
