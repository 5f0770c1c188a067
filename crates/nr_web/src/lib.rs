use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod client;
pub mod error;
pub mod handlers;
pub mod state;

pub use client::{AutomationClient, StatusMirror};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();
    let static_dir = state.static_dir.clone();

    let mut router = Router::new()
        .route(api::START_PATH, post(handlers::start_automation))
        .route(api::STOP_PATH, post(handlers::stop_automation))
        .route(api::RUN_MANUAL_PATH, post(handlers::run_manual))
        .route(api::STATUS_PATH, get(handlers::get_status));

    if let Some(dir) = static_dir {
        info!("🗂️ Serving frontend from {}", dir.display());
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve `app` until Ctrl-C.
pub async fn serve(addr: SocketAddr, app: Router) -> nr_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 Shutting down");
}

pub mod prelude {
    pub use nr_core::{Credentials, Result, Error};
    pub use nr_automation::AutomationStatus;
    pub use crate::{AppState, AutomationClient, StatusMirror};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use nr_automation::{AutomationController, Config};
    use nr_core::{Credentials, Error, Publisher, RewrittenArticle};
    use nr_inference::models::DummyModel;
    use nr_news::CatalogSource;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct StubPublisher {
        fail: bool,
    }

    #[async_trait]
    impl Publisher for StubPublisher {
        fn name(&self) -> &str {
            "Telegram"
        }

        async fn publish(&self, _credentials: &Credentials, _article: &RewrittenArticle) -> nr_core::Result<()> {
            if self.fail {
                return Err(Error::Publish("Telegram API Error: Unauthorized".to_string()));
            }
            Ok(())
        }
    }

    fn app(fail_publish: bool) -> Router {
        let controller = AutomationController::new(
            Config::default(),
            Arc::new(CatalogSource::new()),
            Arc::new(DummyModel::new()),
            Arc::new(StubPublisher { fail: fail_publish }),
        )
        .unwrap();
        create_app(AppState::new(controller))
    }

    async fn call(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(path);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn creds() -> Value {
        json!({ "token": "T1", "channelId": "C1" })
    }

    #[tokio::test]
    async fn test_status_starts_idle() {
        let app = app(false);
        let (status, body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "isRunning": false, "logs": [], "latestNews": null }));
    }

    #[tokio::test]
    async fn test_start_and_stop() {
        let app = app(false);

        let (status, body) = call(&app, "POST", api::START_PATH, Some(creds())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (status, body) = call(&app, "POST", api::START_PATH, Some(creds())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "message": "Automation is already running" }));

        let (_, body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(body["isRunning"], true);

        let (status, body) = call(&app, "POST", api::STOP_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(body["isRunning"], false);
        let logs = body["logs"].as_array().unwrap();
        assert!(logs.iter().any(|entry| entry["message"] == "Stopping automation..."));
    }

    #[tokio::test]
    async fn test_stop_when_idle() {
        let app = app(false);
        let (status, body) = call(&app, "POST", api::STOP_PATH, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "message": "Automation is not running" }));
    }

    #[tokio::test]
    async fn test_start_with_missing_fields() {
        let app = app(false);

        let (status, body) = call(&app, "POST", api::START_PATH, Some(json!({ "token": "T1" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Telegram Token or Channel ID is missing.");

        let (status, _) = call(&app, "POST", api::START_PATH, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(body["isRunning"], false);
        assert_eq!(body["logs"], json!([]));
    }

    #[tokio::test]
    async fn test_run_manual_returns_processed_news() {
        let app = app(false);
        let (status, body) = call(&app, "POST", api::RUN_MANUAL_PATH, Some(creds())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["processedNews"]["farsiTitle"].is_string());

        let (_, status_body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(status_body["latestNews"], body["processedNews"]);
        assert_eq!(status_body["logs"][0]["type"], "success");
    }

    #[tokio::test]
    async fn test_run_manual_failure_is_server_error() {
        let app = app(true);
        let (status, body) = call(&app, "POST", api::RUN_MANUAL_PATH, Some(creds())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "An error occurred: Failed to publish: Telegram API Error: Unauthorized"
        );

        let (_, status_body) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert!(status_body["latestNews"].is_null());
        assert_eq!(status_body["logs"][0]["type"], "error");
    }

    #[tokio::test]
    async fn test_run_manual_with_missing_fields() {
        let app = app(false);
        let (status, body) = call(&app, "POST", api::RUN_MANUAL_PATH, Some(json!({ "channelId": "C1" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_serves_static_frontend() {
        let dir = std::env::temp_dir().join(format!("nr_web_static_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();

        let controller = AutomationController::new(
            Config::default(),
            Arc::new(CatalogSource::new()),
            Arc::new(DummyModel::new()),
            Arc::new(StubPublisher { fail: false }),
        )
        .unwrap();
        let app = create_app(AppState::new(controller).with_static_dir(&dir));

        let request = Request::builder().uri("/some/client/route").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>dashboard</html>");

        let (status, _) = call(&app, "GET", api::STATUS_PATH, None).await;
        assert_eq!(status, StatusCode::OK);

        std::fs::remove_dir_all(&dir).ok();
    }
}
