use anyhow::Result;
use clap::{Parser, Subcommand};
use research_server::config::{find_config_file, load_config, Config};
use research_server::mcp::McpServer;
use research_server::models::{SearchQuery, DEFAULT_MAX_RESULTS};
use research_server::research::{create_search_prompt, Operation, ResearchContext};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Research server - search arXiv and keep paper notes for MCP clients
#[derive(Parser, Debug)]
#[command(name = "research-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server for searching arXiv and extracting saved paper information", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding saved paper records
    #[arg(long, global = true)]
    papers_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server (the default when no command is given)
    Serve {
        /// Serve over stdio instead of HTTP
        #[arg(long)]
        stdio: bool,

        /// Port to listen on (defaults to $PORT, then 10000)
        #[arg(long, short)]
        port: Option<u16>,

        /// Interface to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Search arXiv and save the results
    Search {
        /// Topic to search for
        topic: String,

        /// Maximum number of papers to save
        #[arg(long, short, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Print information about a saved paper
    Extract {
        /// Paper identifier, as saved by `search`
        paper_id: String,

        /// One of summary, authors, abstract, url
        #[arg(default_value = "summary")]
        info_type: String,
    },

    /// List saved paper records
    List,

    /// Print the research-planning prompt for a topic
    Prompt {
        /// Research topic
        topic: String,
    },
}

impl Cli {
    fn log_filter(&self) -> String {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };

        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("research_server={}", level))
    }

    fn load_config(&self) -> Result<Config> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => find_config_file(),
        };
        if let Some(path) = &path {
            tracing::info!("Using config file: {}", path.display());
        }

        let mut config = load_config(path.as_deref())?;
        if let Some(dir) = &self.papers_dir {
            config.store.directory = dir.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is the stdio transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(cli.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = cli.load_config()?;

    let command = cli.command.unwrap_or(Commands::Serve {
        stdio: false,
        port: None,
        host: None,
    });

    match command {
        Commands::Serve { stdio, port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let server = McpServer::new(ResearchContext::from_config(&config)?)?;

            if stdio {
                server.run().await?;
            } else {
                let addr = config.server.bind_addr();
                tracing::info!("Running MCP server in HTTP mode on {}", addr);
                let (_bound, handle) = server.run_http(&addr).await?;

                handle
                    .await
                    .map_err(|e| anyhow::anyhow!("Server task failed: {}", e))?;
            }
        }

        Commands::Search { topic, max_results } => {
            let context = ResearchContext::from_config(&config)?;
            let query = SearchQuery::new(topic).max_results(max_results);
            let result = context.search_papers(&query).await;
            println!("{}", Operation::Search.render(result));
        }

        Commands::Extract {
            paper_id,
            info_type,
        } => {
            let context = ResearchContext::from_config(&config)?;
            let result = context.extract_info(&paper_id, &info_type);
            println!("{}", Operation::Extract.render(result));
        }

        Commands::List => {
            let context = ResearchContext::from_config(&config)?;
            println!(
                "{}",
                Operation::ListFolders.render(context.list_paper_folders())
            );
        }

        Commands::Prompt { topic } => {
            print!("{}", create_search_prompt(&topic));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["research-server"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["research-server", "-vv"]);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::parse_from(["research-server", "--quiet"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::parse_from(["research-server", "serve", "--stdio", "--port", "8080"]);
        match cli.command {
            Some(Commands::Serve { stdio, port, host }) => {
                assert!(stdio);
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_command_defaults() {
        let cli = Cli::parse_from(["research-server", "search", "graph neural networks"]);
        match cli.command {
            Some(Commands::Search { topic, max_results }) => {
                assert_eq!(topic, "graph neural networks");
                assert_eq!(max_results, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_extract_command_defaults() {
        let cli = Cli::parse_from(["research-server", "extract", "2301.12345v1"]);
        match cli.command {
            Some(Commands::Extract {
                paper_id,
                info_type,
            }) => {
                assert_eq!(paper_id, "2301.12345v1");
                assert_eq!(info_type, "summary");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_papers_dir_is_global() {
        let cli = Cli::parse_from(["research-server", "list", "--papers-dir", "/tmp/papers"]);
        assert_eq!(cli.papers_dir, Some(PathBuf::from("/tmp/papers")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
