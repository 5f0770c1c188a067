use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use nr_core::{Credentials, Error, Publisher, Result, RewrittenArticle};

use crate::message::format_message;
use crate::{Config, DEFAULT_TELEGRAM_BASE_URL};

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: String,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

/// Posts rewritten articles through the Telegram Bot API.
pub struct TelegramPublisher {
    client: Client,
    base_url: String,
}

impl fmt::Debug for TelegramPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramPublisher")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TelegramPublisher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_TELEGRAM_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, token)
    }
}

// reqwest errors carry the request URL, which embeds the bot token.
fn transport_error(e: reqwest::Error) -> Error {
    Error::Publish(format!("Failed to publish to Telegram: {}", e.without_url()))
}

#[async_trait]
impl Publisher for TelegramPublisher {
    fn name(&self) -> &str {
        "Telegram"
    }

    async fn publish(&self, credentials: &Credentials, article: &RewrittenArticle) -> Result<()> {
        let payload = SendMessageRequest {
            chat_id: &credentials.channel_id,
            text: format_message(article),
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        tracing::debug!("📨 Sending message to {}", credentials.channel_id);
        let response = self
            .client
            .post(self.endpoint(&credentials.token))
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        // Telegram reports failures as `ok: false` with a non-2xx status, so
        // the body is read either way.
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        let result: TelegramResponse = serde_json::from_str(&body).map_err(|_| {
            Error::Publish(format!("Telegram API returned an unexpected response ({})", status))
        })?;

        if !result.ok {
            return Err(Error::Publish(format!(
                "Telegram API Error: {}",
                result.description.as_deref().unwrap_or("Unknown error")
            )));
        }

        tracing::debug!("✅ Message accepted by Telegram");
        Ok(())
    }
}
