// src/web/types.rs - request/response envelopes for the portfolio API

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::chat::{ChatSnapshot, SubmitOutcome};
use crate::contact::ContactForms;
use crate::core::EmailSender;
use crate::page::{PageLayout, QuickLink, ScrollRequest, SectionLayout};
use crate::types::Certification;

pub type ApiError = status::Custom<Json<StandardErrorResponse>>;
pub type ApiResult<T> = Result<Json<T>, ApiError>;

pub struct ServerConfig {
    pub layout: PageLayout,
}

/// Contact forms keyed by client; `None` when email delivery is unconfigured.
pub struct ContactService {
    pub forms: Option<ContactForms>,
}

impl ContactService {
    pub fn new(sender: Option<Arc<dyn EmailSender>>) -> Self {
        Self {
            forms: sender.map(ContactForms::new),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

// Request types with conversation_id support
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardRequest<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

pub trait WithConversationId {
    fn conversation_id(&self) -> Option<String>;
}

impl<T> WithConversationId for StandardRequest<T> {
    fn conversation_id(&self) -> Option<String> {
        self.conversation_id.clone()
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatMessageRequest {
    pub text: String,
}

// ===== Response payloads =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PageView {
    pub navbar_offset: u32,
    pub total_height: u32,
    pub sections: Vec<SectionLayout>,
    pub quick_links: Vec<QuickLink>,
}

impl From<&PageLayout> for PageView {
    fn from(layout: &PageLayout) -> Self {
        Self {
            navbar_offset: layout.navbar_offset,
            total_height: layout.total_height(),
            sections: layout.sections.clone(),
            quick_links: layout.quick_links(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CertificationsView {
    pub show_all: bool,
    pub total: usize,
    pub issuers: Vec<&'static str>,
    pub certifications: &'static [Certification],
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ScrollToTopView {
    pub visible: bool,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatSessionView {
    pub session_id: String,
    #[serde(flatten)]
    pub snapshot: ChatSnapshot,
    pub scroll_requests: Vec<ScrollRequest>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SubmitView {
    pub outcome: SubmitOutcome,
    pub composing: bool,
}

// Helper functions to create standard responses
impl TextResponse {
    pub fn success(message: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
            conversation_id,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
            conversation_id,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String, conversation_id: Option<String>) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
            next_actions: None,
            conversation_id,
        }
    }

    pub fn with_next_actions(mut self, next_actions: Vec<String>) -> Self {
        self.next_actions = Some(next_actions);
        self
    }
}

impl StandardErrorResponse {
    pub fn new(
        error: String,
        error_code: String,
        suggestions: Vec<String>,
        conversation_id: Option<String>,
    ) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
            conversation_id,
        }
    }
}

/// Shorthand for an error envelope with an HTTP status.
pub fn api_error(
    status: Status,
    error: &str,
    error_code: &str,
    suggestions: &[&str],
    conversation_id: Option<String>,
) -> ApiError {
    status::Custom(
        status,
        Json(StandardErrorResponse::new(
            error.to_string(),
            error_code.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
            conversation_id,
        )),
    )
}
