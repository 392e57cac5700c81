use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::info;

use crate::error::Error;
use crate::model::{ParseRequest, ParseResponse};
use crate::parser;
use crate::AppState;

/// Handler for the service root
pub async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "AI Calendar API is running" }))
}

/// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}

/// Handler for parsing free text into calendar events
pub async fn parse_events_handler(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, Error> {
    info!("Parsing events from {} characters of text", request.text.len());

    let events = parser::parse_text_to_events(state.generator.as_ref(), &request.text).await?;

    Ok(Json(ParseResponse { events }))
}
