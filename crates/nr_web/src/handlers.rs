use axum::{extract::State, Json};
use std::sync::Arc;
use nr_automation::AutomationStatus;
use nr_core::Credentials;
use crate::api::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

// A missing or unreadable body is treated like one with empty fields, so the
// caller gets the same 400 either way.
fn credentials(body: Option<Json<Credentials>>) -> Credentials {
    body.map(|Json(credentials)| credentials).unwrap_or_default()
}

pub async fn start_automation(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Credentials>>,
) -> Result<Json<ApiResponse>, ApiError> {
    state.controller.start(credentials(body)).await?;
    Ok(Json(ApiResponse::ok("Automation started.")))
}

pub async fn stop_automation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, ApiError> {
    state.controller.stop().await?;
    Ok(Json(ApiResponse::ok("Automation stopped.")))
}

pub async fn run_manual(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Credentials>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let processed = state.controller.run_once(credentials(body)).await?;
    Ok(Json(
        ApiResponse::ok("Successfully published to Telegram.").with_news(processed),
    ))
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Json<AutomationStatus> {
    Json(state.controller.status().await)
}
