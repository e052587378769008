// src/web/mod.rs - HTTP surface for the portfolio site

pub mod handlers;
pub mod sessions;
pub mod types;

pub use handlers::*;
pub use sessions::{ChatSession, ChatSessions};
pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{ConfigManager, EmailJsClient, EmailSender};
use crate::page::ScrollRequest;
use crate::types::{ContactMessage, Education, Experience, LinkAction, Profile, Project, Skills};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// Site content

#[get("/health")]
pub async fn health(sessions: &State<ChatSessions>) -> Json<TextResponse> {
    handlers::health_handler(sessions).await
}

#[get("/page")]
pub async fn get_page(config: &State<ServerConfig>) -> Json<DataResponse<PageView>> {
    handlers::get_page_handler(config).await
}

#[get("/profile")]
pub async fn get_profile() -> Json<DataResponse<Profile>> {
    handlers::get_profile_handler().await
}

#[get("/skills")]
pub async fn get_skills() -> Json<DataResponse<Skills>> {
    handlers::get_skills_handler().await
}

#[get("/experience")]
pub async fn get_experience() -> Json<DataResponse<&'static [Experience]>> {
    handlers::get_experience_handler().await
}

#[get("/education")]
pub async fn get_education() -> Json<DataResponse<&'static [Education]>> {
    handlers::get_education_handler().await
}

#[get("/projects")]
pub async fn get_projects() -> Json<DataResponse<&'static [Project]>> {
    handlers::get_projects_handler().await
}

#[get("/projects/<id>/links/<kind>")]
pub async fn get_project_link(id: &str, kind: &str) -> ApiResult<DataResponse<LinkAction>> {
    handlers::get_project_link_handler(id, kind).await
}

#[get("/certifications?<all>")]
pub async fn get_certifications(all: Option<String>) -> Json<DataResponse<CertificationsView>> {
    handlers::get_certifications_handler(all).await
}

#[get("/navigate/<section>")]
pub async fn navigate(
    section: &str,
    config: &State<ServerConfig>,
) -> ApiResult<DataResponse<Option<ScrollRequest>>> {
    handlers::navigate_handler(section, config).await
}

#[get("/scroll-to-top?<scroll_y>&<viewport_height>")]
pub async fn scroll_to_top(
    scroll_y: u32,
    viewport_height: u32,
    config: &State<ServerConfig>,
) -> Json<DataResponse<ScrollToTopView>> {
    handlers::scroll_to_top_handler(scroll_y, viewport_height, config).await
}

// Chat assistant

#[post("/chat/sessions")]
pub async fn create_chat_session(
    sessions: &State<ChatSessions>,
) -> Json<DataResponse<ChatSessionView>> {
    handlers::create_session_handler(sessions).await
}

#[get("/chat/sessions/<id>")]
pub async fn get_chat_session(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<ChatSessionView>> {
    handlers::get_session_handler(id, sessions).await
}

#[post("/chat/sessions/<id>/messages", data = "<request>")]
pub async fn post_chat_message(
    id: &str,
    request: Json<StandardRequest<ChatMessageRequest>>,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<SubmitView>> {
    handlers::post_message_handler(id, request, sessions).await
}

#[post("/chat/sessions/<id>/quick-replies/<label>")]
pub async fn post_quick_reply(
    id: &str,
    label: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<DataResponse<SubmitView>> {
    handlers::quick_reply_handler(id, label, sessions).await
}

#[post("/chat/sessions/<id>/close")]
pub async fn close_chat_session(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<ActionResponse> {
    handlers::close_session_handler(id, sessions).await
}

#[delete("/chat/sessions/<id>")]
pub async fn delete_chat_session(
    id: &str,
    sessions: &State<ChatSessions>,
) -> ApiResult<ActionResponse> {
    handlers::delete_session_handler(id, sessions).await
}

// Contact form

#[post("/contact", data = "<request>")]
pub async fn submit_contact(
    request: Json<StandardRequest<ContactMessage>>,
    service: &State<ContactService>,
) -> ApiResult<ActionResponse> {
    handlers::submit_contact_handler(request, service).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("No route for {}", request.uri()),
        "NOT_FOUND".to_string(),
        vec!["Check GET /api/health to verify the server is up".to_string()],
        None,
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "INVALID_BODY".to_string(),
        vec!["Verify all required fields are present".to_string()],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
        None,
    ))
}

/// Assemble the application. `sender` is `None` when email delivery is not
/// configured; the contact endpoint then answers 503.
pub fn build_rocket(config: &ConfigManager, sender: Option<Arc<dyn EmailSender>>) -> Rocket<Build> {
    let layout = config.page.layout();
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(ServerConfig {
            layout: layout.clone(),
        })
        .manage(
            ChatSessions::new(layout, config.chat.timing()).with_limits(
                config.chat.session_idle_timeout(),
                config.chat.max_sessions,
            ),
        )
        .manage(ContactService::new(sender))
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                get_page,
                get_profile,
                get_skills,
                get_experience,
                get_education,
                get_projects,
                get_project_link,
                get_certifications,
                navigate,
                scroll_to_top,
                create_chat_session,
                get_chat_session,
                post_chat_message,
                post_quick_reply,
                close_chat_session,
                delete_chat_session,
                submit_contact,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let sender: Option<Arc<dyn EmailSender>> = match EmailJsClient::new(config.email.clone()) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Contact form disabled: {}", e);
            None
        }
    };

    info!(
        "Starting portfolio API server on {}:{}",
        config.server.address, config.server.port
    );

    let _rocket = build_rocket(&config, sender).launch().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatTiming;
    use crate::core::config_manager::ChatConfig;
    use async_trait::async_trait;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};
    use std::time::Duration;

    struct StubSender {
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for StubSender {
        async fn send(&self, _message: &ContactMessage) -> Result<()> {
            if self.fail {
                anyhow::bail!("service unavailable")
            }
            Ok(())
        }
    }

    fn immediate_config() -> ConfigManager {
        let timing = ChatTiming::immediate();
        ConfigManager {
            chat: ChatConfig {
                reply_delay_min_ms: timing.reply_delay_min.as_millis() as u64,
                reply_delay_max_ms: timing.reply_delay_max.as_millis() as u64,
                welcome_delay_ms: 0,
                navigation_delay_ms: 0,
                ..ChatConfig::default()
            },
            ..ConfigManager::default()
        }
    }

    async fn client(sender: Option<Arc<dyn EmailSender>>) -> Client {
        Client::tracked(build_rocket(&immediate_config(), sender))
            .await
            .unwrap()
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_health() {
        let client = client(None).await;
        let response = client.get("/api/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["message"], "OK");
        assert_eq!(body["type"], "text");
    }

    #[tokio::test]
    async fn test_certifications_collapsed_and_expanded() {
        let client = client(None).await;

        let body: Value = client
            .get("/api/certifications")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        assert_eq!(body["data"]["certifications"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"]["show_all"], false);

        let body: Value = client
            .get("/api/certifications?all=true")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        assert_eq!(body["data"]["certifications"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_navigate_known_missing_and_unknown_sections() {
        let client = client(None).await;

        let body: Value = client
            .get("/api/navigate/projects")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        assert_eq!(body["data"]["section"], "projects");

        let body: Value = client
            .get("/api/navigate/education")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        assert!(body["data"].is_null());

        let response = client.get("/api/navigate/blog").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["error_code"], "UNKNOWN_SECTION");
    }

    #[tokio::test]
    async fn test_project_link_resolves_pdf_to_viewer() {
        let client = client(None).await;
        let project = crate::content::PROJECTS
            .iter()
            .find(|p| p.case_study_url.is_some())
            .unwrap();

        let response = client
            .get(format!("/api/projects/{}/links/case-study", project.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = client.get("/api/projects/nope/links/demo").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn test_chat_session_flow() {
        let client = client(None).await;

        let body: Value = client
            .post("/api/chat/sessions")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        let id = body["data"]["session_id"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["open"], true);

        settle().await;

        let response = client
            .post(format!("/api/chat/sessions/{}/messages", id))
            .header(ContentType::JSON)
            .body(json!({ "text": "Show me his projects" }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        settle().await;

        let body: Value = client
            .get(format!("/api/chat/sessions/{}", id))
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        let messages = body["data"]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["text"], "Show me his projects");
        let scrolls = body["data"]["scroll_requests"].as_array().unwrap();
        assert_eq!(scrolls.len(), 1);
        assert_eq!(scrolls[0]["section"], "projects");

        let response = client
            .delete(format!("/api/chat/sessions/{}", id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = client
            .get(format!("/api/chat/sessions/{}", id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn test_blank_message_and_unknown_session() {
        let client = client(None).await;
        let body: Value = client
            .post("/api/chat/sessions")
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        let id = body["data"]["session_id"].as_str().unwrap().to_string();

        let response = client
            .post(format!("/api/chat/sessions/{}/messages", id))
            .header(ContentType::JSON)
            .body(json!({ "text": "   " }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["error_code"], "EMPTY_MESSAGE");

        let response = client
            .post("/api/chat/sessions/not-a-uuid/quick-replies/Skills")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn test_contact_without_email_service() {
        let client = client(None).await;
        let response = client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Ada",
                    "email": "ada@example.org",
                    "subject": "Hi",
                    "message": "Hello"
                })
                .to_string(),
            )
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::ServiceUnavailable);
    }

    #[tokio::test]
    async fn test_contact_missing_fields() {
        let client = client(Some(Arc::new(StubSender { fail: false }))).await;
        let response = client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(json!({ "name": "Ada", "email": "", "subject": "", "message": "" }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["error_code"], "MISSING_FIELDS");
    }

    #[tokio::test]
    async fn test_contact_sent_and_failed() {
        let body = json!({
            "name": "Ada",
            "email": "ada@example.org",
            "subject": "Hi",
            "message": "Hello"
        })
        .to_string();

        let client_ok = client(Some(Arc::new(StubSender { fail: false }))).await;
        let response = client_ok
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(body.clone())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let json: Value = response.into_json().await.unwrap();
        assert_eq!(json["action"], "contact_sent");

        let client_err = client(Some(Arc::new(StubSender { fail: true }))).await;
        let response = client_err
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadGateway);
        let json: Value = response.into_json().await.unwrap();
        assert_eq!(json["error"], crate::contact::FAILURE_ALERT);
    }

    #[tokio::test]
    async fn test_contact_resubmission_is_held_while_sent() {
        let client = client(Some(Arc::new(StubSender { fail: false }))).await;
        let body = json!({
            "name": "Ada",
            "email": "ada@example.org",
            "subject": "Hi",
            "message": "Hello"
        })
        .to_string();

        let first = client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(body.clone())
            .dispatch()
            .await;
        assert_eq!(first.status(), Status::Ok);

        let second = client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(second.status(), Status::Conflict);
        let json: Value = second.into_json().await.unwrap();
        assert_eq!(json["error_code"], "SUBMISSION_PENDING");

        let other = client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Grace",
                    "email": "grace@example.org",
                    "subject": "Hi",
                    "message": "Hello"
                })
                .to_string(),
            )
            .dispatch()
            .await;
        assert_eq!(other.status(), Status::Ok);
    }

    #[tokio::test]
    async fn test_scroll_to_top_handles_extreme_offsets() {
        let client = client(None).await;
        let response = client
            .get("/api/scroll-to-top?scroll_y=4294967295&viewport_height=10")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["data"]["visible"], false);
    }
}
