//! Utility modules supporting provider access and the paper store.
//!
//! - [`HttpClient`]: shared reqwest client with timeouts and a user agent
//! - [`RetryConfig`] / [`with_retry`]: exponential backoff over transient provider errors
//! - [`validate_paper_id`]: reject identifiers that could escape the store directory
//!
//! # Retry with Backoff
//!
//! ```rust,no_run
//! use research_server::sources::SourceError;
//! use research_server::utils::{with_retry, RetryConfig};
//!
//! # async fn fetch_data() -> Result<String, SourceError> { Ok("data".to_string()) }
//! # #[tokio::main]
//! # async fn main() -> Result<(), SourceError> {
//! let data = with_retry(RetryConfig::with_retries(3), || fetch_data()).await?;
//! # Ok(())
//! # }
//! ```

mod http;
mod retry;
mod validate;

pub use http::{HttpClient, USER_AGENT};
pub use retry::{with_retry, RetryConfig};
pub use validate::{validate_paper_id, ValidationError};
