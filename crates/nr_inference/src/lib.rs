use std::time::Duration;

pub mod models;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which rewriter to build and how to reach it.
///
/// The API key is deliberately absent: it is passed on each call so that the
/// caller decides what a missing key means.
#[derive(Debug, Clone)]
pub struct Config {
    /// `gemini` or `dummy`
    pub model: String,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini".to_string(),
            model_name: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_rewriter;
    pub use nr_core::{Article, ArticleRewriter, RewrittenArticle, Result, Error};
}

pub use models::create_rewriter;
