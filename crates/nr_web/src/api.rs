use serde::{Deserialize, Serialize};
use nr_core::RewrittenArticle;

pub const START_PATH: &str = "/api/automation/start";
pub const STOP_PATH: &str = "/api/automation/stop";
pub const RUN_MANUAL_PATH: &str = "/api/automation/run-manual";
pub const STATUS_PATH: &str = "/api/automation/status";

/// Envelope returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_news: Option<RewrittenArticle>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            processed_news: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            processed_news: None,
        }
    }

    pub fn with_news(mut self, news: RewrittenArticle) -> Self {
        self.processed_news = Some(news);
        self
    }
}
