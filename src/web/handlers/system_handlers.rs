// src/web/system_handlers.rs
use crate::web::types::*;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::web::sessions::ChatSessions;

pub async fn health_handler(sessions: &State<ChatSessions>) -> Json<TextResponse> {
    info!("Health check ({} active chat sessions)", sessions.len());
    Json(TextResponse::success("OK".to_string(), None))
}
