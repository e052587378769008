// src/core/email_client.rs
//! Transactional email delivery for the contact form (EmailJS REST API).

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{error, info, trace};

use super::config_manager::EmailConfig;
use crate::types::{ContactMessage, EmailJsRequest, TemplateParams};

const SEND_ENDPOINT: &str = "/api/v1.0/email/send";

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Result<Self> {
        if !config.is_configured() {
            anyhow::bail!("Email service id, template id and public key must all be set");
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build the request body; the form fields are passed through as-is.
    pub fn build_request(&self, message: &ContactMessage) -> EmailJsRequest {
        build_request(&self.config, message)
    }
}

pub(crate) fn build_request(config: &EmailConfig, message: &ContactMessage) -> EmailJsRequest {
    EmailJsRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: TemplateParams {
            from_name: message.name.clone(),
            from_email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            to_email: config.recipient.clone(),
        },
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), SEND_ENDPOINT);
        let payload = self.build_request(message);

        trace!("Calling email service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to call email service")?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message from {} delivered", message.email);
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Email service error {}: {}", status, error_text);
            anyhow::bail!("Email service returned error status {}: {}", status, error_text)
        }
    }
}
