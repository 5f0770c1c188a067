pub mod error;
pub mod logging;
pub mod models;
pub mod publisher;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use models::ArticleRewriter;
pub use publisher::Publisher;
pub use source::NewsSource;
pub use types::{Article, Credentials, LogEntry, LogLevel, RewrittenArticle};
