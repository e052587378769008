// src/web/handlers/contact_handlers.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::contact::{FormStatus, SubmitResult};
use crate::types::ContactMessage;
use crate::web::types::*;

pub async fn submit_contact_handler(
    request: Json<StandardRequest<ContactMessage>>,
    service: &State<ContactService>,
) -> ApiResult<ActionResponse> {
    let conversation_id = request.conversation_id();

    let missing = request.data.missing_fields();
    if !missing.is_empty() {
        return Err(api_error(
            Status::BadRequest,
            &format!("Missing required fields: {}", missing.join(", ")),
            "MISSING_FIELDS",
            &["Fill in name, email, subject and message"],
            conversation_id,
        ));
    }

    let Some(forms) = service.forms.as_ref() else {
        error!("Contact submission received but email delivery is not configured");
        return Err(api_error(
            Status::ServiceUnavailable,
            "Email delivery is not configured",
            "EMAIL_NOT_CONFIGURED",
            &["Contact directly via email"],
            conversation_id,
        ));
    };

    let client = conversation_id
        .clone()
        .unwrap_or_else(|| request.data.email.trim().to_lowercase());
    let form = forms.form(&client);
    if form.status() != FormStatus::Editable {
        return Err(submission_pending(conversation_id));
    }

    let fields = request.into_inner().data;
    form.update(|current| *current = fields);

    match form.submit().await {
        SubmitResult::Sent => {
            info!("Contact form delivered");
            Ok(Json(
                ActionResponse::success(
                    "Thank you! Your message has been sent.".to_string(),
                    "contact_sent".to_string(),
                    conversation_id,
                )
                .with_next_actions(vec!["Explore projects".to_string()]),
            ))
        }
        SubmitResult::Failed { alert } => Err(api_error(
            Status::BadGateway,
            alert,
            "EMAIL_DELIVERY_FAILED",
            &["Try again", "Contact directly via email"],
            conversation_id,
        )),
        SubmitResult::Ignored => Err(submission_pending(conversation_id)),
    }
}

fn submission_pending(conversation_id: Option<String>) -> ApiError {
    api_error(
        Status::Conflict,
        "A message from this sender was just submitted",
        "SUBMISSION_PENDING",
        &["Wait a few seconds before sending another message"],
        conversation_id,
    )
}
