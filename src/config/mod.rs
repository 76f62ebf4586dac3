//! Configuration management.
//!
//! Settings come from, lowest precedence first: built-in defaults, an optional
//! TOML file, `RESEARCH_SERVER__*` environment variables, and `PORT`.
//!
//! # Configuration File Format
//!
//! ```toml
//! [store]
//! directory = "papers"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 10000
//!
//! [arxiv]
//! api_url = "http://export.arxiv.org/api/query"
//! page_size = 100
//! delay_seconds = 3
//! timeout_seconds = 30
//! max_retries = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment variable overrides (`RESEARCH_SERVER__SERVER__PORT`)
pub const ENV_PREFIX: &str = "RESEARCH_SERVER";

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "research-server.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Paper store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Server bind settings
    #[serde(default)]
    pub server: ServerConfig,

    /// arXiv provider settings
    #[serde(default)]
    pub arxiv: ArxivConfig,
}

/// Paper store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per paper
    #[serde(default = "default_store_dir")]
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: default_store_dir(),
        }
    }
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("papers")
}

/// Server bind configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

/// arXiv API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// Atom query endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Results requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Minimum delay between consecutive requests, in seconds
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Retries after a transient failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            delay_seconds: default_delay_seconds(),
            timeout_seconds: default_timeout_seconds(),
            max_retries: default_max_retries(),
        }
    }
}

impl ArxivConfig {
    /// Request pacing interval
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_api_url() -> String {
    "http://export.arxiv.org/api/query".to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_delay_seconds() -> u64 {
    3
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Config {
    /// Override the port from a `PORT`-style value, if one is set
    pub fn apply_port(&mut self, port: Option<&str>) -> Result<(), config::ConfigError> {
        if let Some(raw) = port {
            self.server.port = raw.trim().parse().map_err(|_| {
                config::ConfigError::Message(format!("Invalid PORT value: {}", raw))
            })?;
        }
        Ok(())
    }
}

/// Load configuration from an optional file plus the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Config = settings.try_deserialize()?;
    config.apply_port(std::env::var("PORT").ok().as_deref())?;
    Ok(config)
}

/// Find a config file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("research-server").join("config.toml"))
        .filter(|path| path.is_file())
}
