//! Basic usage example for the research server library.
//!
//! Searches arXiv for a topic, saves the results to `./papers`, then prints
//! a summary of the first saved paper and the store listing.

use research_server::config::Config;
use research_server::research::{Operation, ResearchContext};
use research_server::SearchQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let context = ResearchContext::from_config(&config)?;

    let query = SearchQuery::new("machine learning transformers").max_results(3);
    println!(
        "{}",
        Operation::Search.render(context.search_papers(&query).await)
    );

    let listing = context.list_paper_folders()?;
    println!("{}\n", listing);

    if let Some(files) = context.store().list()? {
        if let Some(first) = files.first() {
            let id = first.trim_end_matches(".json");
            println!("{}", Operation::Extract.render(context.extract_info(id, "summary")));
        }
    }

    Ok(())
}
