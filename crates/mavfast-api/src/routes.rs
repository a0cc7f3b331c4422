//! Axum route handlers.
//!
//! - `GET  /`                        health check
//! - `POST /api/brighton-automation` run the supplier workflow for a quote
//! - `GET  /api/test`                canned test payload and config summary
//! - `POST /api/test`                run the workflow on the canned quote

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use mavfast_core::Error as QuoteError;
use mavfast_core::quote::{QuoteRequest, RequestedPart};
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::Config;
use crate::automation::{API_VERSION, AutomationHandler};

pub const SERVICE_NAME: &str = "MavFast Brighton Best API";
pub const TEST_QUOTE_ID: &str = "MF-TEST-20250831-123456";

/// Shared state: immutable after start-up
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub handler: Arc<AutomationHandler>,
}

impl AppState {
    pub fn new(config: Config, handler: AutomationHandler) -> Self {
        Self {
            config: Arc::new(config),
            handler: Arc::new(handler),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/brighton-automation", post(trigger_automation))
        .route("/api/test", get(test_info).post(test_run))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Quote used by the test endpoint
pub fn test_quote() -> QuoteRequest {
    let mut quote = QuoteRequest::new(
        TEST_QUOTE_ID,
        vec![RequestedPart {
            part_number: "455432".to_string(),
            quantity: 225,
            part_index: Some(1),
        }],
    );
    quote.extra.insert(
        "customer_info".to_string(),
        json!({
            "company": "Test Company",
            "email": "test@example.com",
            "rep": "Test Rep",
        }),
    );
    quote
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": API_VERSION,
    }))
}

async fn trigger_automation(State(state): State<AppState>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(Value::Null) | Err(_) => return bad_request("No JSON data provided"),
        Ok(value) => value,
    };

    let quote_data = match request.get("quote_data") {
        Some(Value::Object(map)) if map.is_empty() => return bad_request("No quote_data provided"),
        Some(Value::Null) | None => return bad_request("No quote_data provided"),
        Some(value) => value.clone(),
    };

    let quote: QuoteRequest = match serde_json::from_value(quote_data) {
        Ok(quote) => quote,
        Err(e) => return bad_request(format!("Invalid quote_data: {}", e)),
    };

    // An empty part list is a processing failure, reported by the handler
    if let Err(e @ QuoteError::InvalidPart(_)) = quote.validate() {
        return bad_request(e.to_string());
    }

    tracing::info!(
        "Brighton automation request received for quote: {}",
        quote.quote_id
    );

    let outcome = state.handler.process(&quote).await;
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(outcome)).into_response()
}

async fn test_info(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;

    Json(json!({
        "message": format!("{} Test Endpoint", SERVICE_NAME),
        "test_data": test_quote(),
        "config": {
            "company_id": config.company_id,
            "chrome_bin": config.chrome_bin.as_ref().map(|p| p.display().to_string()),
            "supplier_url": config.supplier_url.as_str(),
            "has_sheets_client": state.handler.has_sheets_client(),
        },
    }))
}

async fn test_run(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.handler.process(&test_quote()).await)
}

async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, json!({"error": "Endpoint not found"}))
}

fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!("Rejected automation request: {}", message);

    error_body(
        StatusCode::BAD_REQUEST,
        json!({"success": false, "error": message}),
    )
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("API error: handler panicked: {}", detail);

    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "success": false,
            "error": "Internal server error",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    )
}

fn error_body(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_matches_fixture() {
        let quote = test_quote();

        assert_eq!(quote.quote_id, TEST_QUOTE_ID);
        assert_eq!(quote.parts_requested[0].part_number, "455432");
        assert_eq!(quote.parts_requested[0].quantity, 225);
        assert!(quote.validate().is_ok());
        assert_eq!(quote.extra["customer_info"]["company"], "Test Company");
    }

    #[test]
    fn test_panic_response_is_json_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
