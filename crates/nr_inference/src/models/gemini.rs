use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use nr_core::{Article, ArticleRewriter, Error, Result, RewrittenArticle};

use super::require_api_key;
use crate::{Config, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Rewrites articles through the Gemini `generateContent` endpoint.
pub struct GeminiModel {
    client: Client,
    model_name: String,
    base_url: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            model_name: config
                .model_name
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    fn build_request(article: &Article) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(article),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(article),
            },
        }
    }
}

fn build_prompt(article: &Article) -> String {
    format!(
        "You are an editor for a popular Farsi-language crypto news channel on Telegram.\n\n\
         Raw article:\n\
         Title: {title}\n\
         Content: {content}\n\
         Source Name: {source_name}\n\
         URL: {source_url}\n\n\
         1. Rewrite the content in a clear, conversational style and explain jargon simply.\n\
         2. Translate it into fluent, natural modern Farsi.\n\
         3. Write a short, attention-grabbing Farsi title for it.\n\
         4. Format the source in Farsi as an HTML anchor: 'منبع: <a href=\"{source_url}\">{source_name}</a>'.\n\
         5. Reply with the JSON object only, no other text or markdown.",
        title = article.title,
        content = article.content,
        source_name = article.source_name,
        source_url = article.source_url,
    )
}

fn response_schema(article: &Article) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "farsiTitle": {
                "type": "STRING",
                "description": "A catchy, viral title in Farsi."
            },
            "farsiBody": {
                "type": "STRING",
                "description": "The news content, rewritten to sound natural and translated into Farsi."
            },
            "formattedSource": {
                "type": "STRING",
                "description": format!(
                    "The source in Farsi as an HTML anchor tag, e.g. 'منبع: <a href=\"{}\">{}</a>'",
                    article.source_url, article.source_name
                )
            }
        },
        "required": ["farsiTitle", "farsiBody", "formattedSource"]
    })
}

fn upstream(detail: impl fmt::Display) -> Error {
    Error::Upstream(format!("Failed to process news article with Gemini AI: {}", detail))
}

/// Pull the candidate text out of a raw `generateContent` reply and parse it
/// as a [`RewrittenArticle`].
fn parse_reply(raw: &str) -> Result<RewrittenArticle> {
    let response: GenerateContentResponse =
        serde_json::from_str(raw).map_err(|e| upstream(format!("unreadable response ({})", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(upstream("the response contained no text"));
    }

    serde_json::from_str::<RewrittenArticle>(text)
        .map_err(|e| upstream(format!("the reply did not match the expected JSON ({})", e)))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[async_trait]
impl ArticleRewriter for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn rewrite(&self, article: &Article, api_key: Option<&str>) -> Result<RewrittenArticle> {
        let api_key = require_api_key(api_key)?;
        let request = Self::build_request(article);

        tracing::debug!("🤖 Sending '{}' to {}", article.title, self.model_name);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        let body = response.text().await.map_err(upstream)?;
        if !status.is_success() {
            return Err(upstream(format!(
                "API returned {}: {}",
                status,
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        let rewritten = parse_reply(&body)?;
        tracing::debug!("✨ Gemini rewrite ready: {}", rewritten.title);
        Ok(rewritten)
    }
}
