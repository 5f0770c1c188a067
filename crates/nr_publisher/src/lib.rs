use std::time::Duration;

pub mod message;
pub mod telegram;

pub use message::format_message;
pub use telegram::TelegramPublisher;

pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::{Config, TelegramPublisher};
    pub use nr_core::{Credentials, Publisher, RewrittenArticle, Result, Error};
}
