// src/contact.rs
//! Contact form: collects the four fields and hands them to the email sender.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::chat::TaskScheduler;
use crate::core::EmailSender;
use crate::types::ContactMessage;

pub const FAILURE_ALERT: &str =
    "Failed to send message. Please try again or contact directly via email.";

/// How long the "sent" confirmation stays up before the form is editable again.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

const WAVE_DURATION: Duration = Duration::from_secs(2);
const SAD_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Editable,
    Submitting,
    Sent,
}

/// Expression of the mascot next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMood {
    Default,
    Waving,
    Focused,
    Typing,
    Happy,
    Celebrating,
    Sad,
}

impl FormMood {
    pub fn emoji(self) -> &'static str {
        match self {
            FormMood::Default => "😊",
            FormMood::Waving => "👋",
            FormMood::Focused => "🤔",
            FormMood::Typing => "✍️",
            FormMood::Happy => "😄",
            FormMood::Celebrating => "🎉",
            FormMood::Sad => "😢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum SubmitResult {
    Sent,
    Failed { alert: &'static str },
    /// The form was not editable (submission in flight or confirmation shown).
    Ignored,
}

#[derive(Debug)]
struct FormState {
    fields: ContactMessage,
    status: FormStatus,
    mood: FormMood,
    alert: Option<&'static str>,
}

pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    sender: Arc<dyn EmailSender>,
    scheduler: TaskScheduler,
    success_display: Duration,
}

impl ContactForm {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self::with_success_display(sender, SUCCESS_DISPLAY)
    }

    pub fn with_success_display(sender: Arc<dyn EmailSender>, success_display: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                fields: ContactMessage::default(),
                status: FormStatus::Editable,
                mood: FormMood::Default,
                alert: None,
            })),
            sender,
            scheduler: TaskScheduler::new(),
            success_display,
        }
    }

    /// The mascot waves for two seconds when the form is first shown.
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) {
        self.state.lock().mood = FormMood::Waving;
        self.reset_mood_after(WAVE_DURATION, FormMood::Waving);
    }

    pub fn fields(&self) -> ContactMessage {
        self.state.lock().fields.clone()
    }

    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut ContactMessage),
    {
        let mut state = self.state.lock();
        edit(&mut state.fields);
        state.mood = if state.fields.is_empty() {
            FormMood::Focused
        } else {
            FormMood::Typing
        };
    }

    pub fn focus(&self) {
        self.state.lock().mood = FormMood::Focused;
    }

    pub fn blur(&self) {
        let mut state = self.state.lock();
        state.mood = if state.fields.is_empty() {
            FormMood::Default
        } else {
            FormMood::Happy
        };
    }

    pub fn status(&self) -> FormStatus {
        self.state.lock().status
    }

    pub fn mood(&self) -> FormMood {
        self.state.lock().mood
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.state.lock().alert
    }

    pub fn dismiss_alert(&self) {
        self.state.lock().alert = None;
    }

    /// Send the current fields. On success the fields are cleared and the
    /// form shows its confirmation for `success_display`; on failure the
    /// fields are kept and an alert is raised. There is no retry.
    pub async fn submit(&self) -> SubmitResult {
        let message = {
            let mut state = self.state.lock();
            if state.status != FormStatus::Editable {
                return SubmitResult::Ignored;
            }
            state.status = FormStatus::Submitting;
            state.alert = None;
            state.fields.clone()
        };

        match self.sender.send(&message).await {
            Ok(()) => {
                info!("Contact message sent for {}", message.email);
                {
                    let mut state = self.state.lock();
                    state.fields = ContactMessage::default();
                    state.status = FormStatus::Sent;
                    state.mood = FormMood::Celebrating;
                }

                let weak = Arc::downgrade(&self.state);
                self.scheduler.schedule(self.success_display, move || {
                    if let Some(state) = weak.upgrade() {
                        let mut state = state.lock();
                        if state.status == FormStatus::Sent {
                            state.status = FormStatus::Editable;
                            state.mood = FormMood::Default;
                        }
                    }
                });
                SubmitResult::Sent
            }
            Err(e) => {
                warn!("Error sending contact message: {:#}", e);
                {
                    let mut state = self.state.lock();
                    state.status = FormStatus::Editable;
                    state.mood = FormMood::Sad;
                    state.alert = Some(FAILURE_ALERT);
                }
                self.reset_mood_after(SAD_DURATION, FormMood::Sad);
                SubmitResult::Failed {
                    alert: FAILURE_ALERT,
                }
            }
        }
    }

    fn reset_mood_after(&self, delay: Duration, expected: FormMood) {
        let weak = Arc::downgrade(&self.state);
        self.scheduler.schedule(delay, move || {
            if let Some(state) = weak.upgrade() {
                let mut state = state.lock();
                if state.mood == expected {
                    state.mood = FormMood::Default;
                }
            }
        });
    }
}

/// One contact form per client, so the "sent" hold carries across requests.
pub struct ContactForms {
    sender: Arc<dyn EmailSender>,
    success_display: Duration,
    forms: Mutex<HashMap<String, Arc<ContactForm>>>,
}

impl ContactForms {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self::with_success_display(sender, SUCCESS_DISPLAY)
    }

    pub fn with_success_display(sender: Arc<dyn EmailSender>, success_display: Duration) -> Self {
        Self {
            sender,
            success_display,
            forms: Mutex::new(HashMap::new()),
        }
    }

    /// The form for `client`, created on first use. Other clients' forms
    /// that are editable again are dropped.
    pub fn form(&self, client: &str) -> Arc<ContactForm> {
        let mut forms = self.forms.lock();
        forms.retain(|key, form| key == client || form.status() != FormStatus::Editable);

        let form = forms.entry(client.to_string()).or_insert_with(|| {
            debug!("New contact form for {}", client);
            let form =
                ContactForm::with_success_display(Arc::clone(&self.sender), self.success_display);
            form.mount();
            Arc::new(form)
        });
        Arc::clone(form)
    }

    pub fn len(&self) -> usize {
        self.forms.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.lock().is_empty()
    }
}
