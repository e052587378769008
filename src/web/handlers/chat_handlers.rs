// src/web/handlers/chat_handlers.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::SubmitOutcome;
use crate::web::sessions::{ChatSession, ChatSessions};
use crate::web::types::*;

fn session_view(id: &Uuid, session: &ChatSession) -> ChatSessionView {
    ChatSessionView {
        session_id: id.to_string(),
        snapshot: session.widget.snapshot(),
        scroll_requests: session.scrolls.drain(),
    }
}

fn lookup_session(id: &str, sessions: &ChatSessions) -> Result<(Uuid, Arc<ChatSession>), ApiError> {
    let not_found = || {
        api_error(
            Status::NotFound,
            "Chat session not found",
            "SESSION_NOT_FOUND",
            &["Start a new session with POST /api/chat/sessions"],
            Some(id.to_string()),
        )
    };

    let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
    let session = sessions.get(&uuid).ok_or_else(not_found)?;
    Ok((uuid, session))
}

fn submit_response(
    id: &Uuid,
    session: &ChatSession,
    outcome: SubmitOutcome,
) -> ApiResult<DataResponse<SubmitView>> {
    let conversation_id = Some(id.to_string());
    match outcome {
        SubmitOutcome::Accepted(_) => Ok(Json(DataResponse::success(
            "Message accepted".to_string(),
            SubmitView {
                outcome,
                composing: session.widget.is_composing(),
            },
            conversation_id,
        ))),
        SubmitOutcome::IgnoredBlank => Err(api_error(
            Status::BadRequest,
            "Message is empty",
            "EMPTY_MESSAGE",
            &["Type a question before sending"],
            conversation_id,
        )),
        SubmitOutcome::IgnoredComposing => Err(api_error(
            Status::Conflict,
            "The assistant is still replying",
            "REPLY_PENDING",
            &["Wait for the current reply before sending another message"],
            conversation_id,
        )),
    }
}

pub async fn create_session_handler(
    sessions: &State<ChatSessions>,
) -> Json<DataResponse<ChatSessionView>> {
    let (id, session) = sessions.create();
    Json(DataResponse::success(
        "Chat opened".to_string(),
        session_view(&id, &session),
        Some(id.to_string()),
    ))
}

pub async fn get_session_handler(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<ChatSessionView>> {
    let (uuid, session) = lookup_session(id, sessions)?;
    let message = if session.widget.is_composing() {
        "Assistant is typing"
    } else {
        "Conversation"
    };
    Ok(Json(DataResponse::success(
        message.to_string(),
        session_view(&uuid, &session),
        Some(uuid.to_string()),
    )))
}

pub async fn post_message_handler(
    id: &str,
    request: Json<StandardRequest<ChatMessageRequest>>,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<SubmitView>> {
    let (uuid, session) = lookup_session(id, sessions)?;
    let outcome = session.widget.submit(&request.data.text);
    if !outcome.is_accepted() {
        warn!("Chat session {} rejected message: {:?}", uuid, outcome);
    }
    submit_response(&uuid, &session, outcome)
}

pub async fn quick_reply_handler(
    id: &str,
    label: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<SubmitView>> {
    let (uuid, session) = lookup_session(id, sessions)?;
    match session.widget.quick_reply(label) {
        Some(outcome) => submit_response(&uuid, &session, outcome),
        None => Err(api_error(
            Status::NotFound,
            &format!("Unknown quick reply: {}", label),
            "UNKNOWN_QUICK_REPLY",
            &["Available: About Paras, Experience, Skills, Contact"],
            Some(uuid.to_string()),
        )),
    }
}

pub async fn close_session_handler(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<ActionResponse> {
    let (uuid, session) = lookup_session(id, sessions)?;
    session.widget.close();
    Ok(Json(ActionResponse::success(
        "Chat closed".to_string(),
        "chat_closed".to_string(),
        Some(uuid.to_string()),
    )))
}

pub async fn delete_session_handler(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<ActionResponse> {
    let (uuid, _) = lookup_session(id, sessions)?;
    sessions.remove(&uuid);
    info!("Remaining chat sessions: {}", sessions.len());
    Ok(Json(ActionResponse::success(
        "Chat session ended".to_string(),
        "chat_deleted".to_string(),
        Some(uuid.to_string()),
    )))
}
