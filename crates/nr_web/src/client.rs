use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::anyhow;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tokio::time::MissedTickBehavior;
use nr_automation::AutomationStatus;
use nr_core::{Credentials, Error, Result, RewrittenArticle};

use crate::api::{self, ApiResponse};

/// Typed client for the automation endpoints of a running server.
#[derive(Debug, Clone)]
pub struct AutomationClient {
    client: Client,
    base_url: String,
}

impl AutomationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn start(&self, credentials: &Credentials) -> Result<ApiResponse> {
        self.call(Method::POST, api::START_PATH, Some(credentials)).await
    }

    pub async fn stop(&self) -> Result<ApiResponse> {
        self.call(Method::POST, api::STOP_PATH, None).await
    }

    /// Trigger one cycle and wait for it; returns what was published.
    pub async fn run_manual(&self, credentials: &Credentials) -> Result<RewrittenArticle> {
        let response: ApiResponse = self
            .call(Method::POST, api::RUN_MANUAL_PATH, Some(credentials))
            .await?;
        response
            .processed_news
            .ok_or_else(|| Error::External(anyhow!("Server did not return the processed news")))
    }

    pub async fn status(&self) -> Result<AutomationStatus> {
        self.call(Method::GET, api::STATUS_PATH, None).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        credentials: Option<&Credentials>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(credentials) = credentials {
            request = request.json(credentials);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Failures carry the `{success: false, message}` envelope.
            let message = serde_json::from_str::<ApiResponse>(&body)
                .map(|envelope| envelope.message)
                .unwrap_or(body);
            return Err(Error::External(anyhow!("{} ({})", message, status)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Client-side copy of the server's status.
///
/// Each successful poll replaces it wholesale; a failed poll keeps the last
/// known status and records the error next to it.
#[derive(Debug, Default, Clone)]
pub struct StatusMirror {
    status: Option<AutomationStatus>,
    last_error: Option<String>,
}

impl StatusMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconcile(&mut self, result: Result<AutomationStatus>) {
        match result {
            Ok(status) => {
                self.status = Some(status);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn status(&self) -> Option<&AutomationStatus> {
        self.status.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.status.as_ref().map(|status| status.running).unwrap_or(false)
    }
}

/// Poll the status endpoint every `every` until `on_update` breaks.
///
/// The first poll happens immediately. Failures never end the loop; they are
/// reported through the mirror.
pub async fn poll<F>(client: &AutomationClient, every: Duration, mut on_update: F) -> StatusMirror
where
    F: FnMut(&StatusMirror) -> ControlFlow<()>,
{
    let mut mirror = StatusMirror::new();
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let result = client.status().await;
        if let Err(e) = &result {
            tracing::warn!("⚠️ Status poll failed: {}", e);
        }
        mirror.reconcile(result);
        if on_update(&mirror).is_break() {
            return mirror;
        }
    }
}
