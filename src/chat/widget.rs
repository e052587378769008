// src/chat/widget.rs
//! Conversation-state wrapper around the responder.

use parking_lot::Mutex;
use rand::Rng;
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, info};

use super::conversation::{Conversation, Message, MessageId};
use super::scheduler::{TaskId, TaskScheduler};
use crate::page::NavigationTarget;
use crate::responder::Responder;

pub const WELCOME_MESSAGE: &str = "Hi! I'm Paras's assistant. I can help you navigate the website and learn more about him. Try asking me about his experience, skills, or projects!";

/// Glow animation for the launcher button, scoped to the chat widget.
pub const LAUNCHER_GLOW_KEYFRAMES: &str = "@keyframes chat-launcher-glow {
  0% { box-shadow: 0 0 20px rgba(34, 197, 94, 0.6), 0 0 40px rgba(34, 197, 94, 0.4), 0 0 60px rgba(34, 197, 94, 0.2); }
  50% { box-shadow: 0 0 30px rgba(59, 130, 246, 0.7), 0 0 50px rgba(59, 130, 246, 0.5), 0 0 70px rgba(59, 130, 246, 0.3); }
  100% { box-shadow: 0 0 25px rgba(168, 85, 247, 0.6), 0 0 45px rgba(168, 85, 247, 0.4), 0 0 65px rgba(168, 85, 247, 0.2); }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub label: &'static str,
    pub text: &'static str,
}

pub const QUICK_REPLIES: [QuickReply; 4] = [
    QuickReply {
        label: "About Paras",
        text: "Tell me about Paras",
    },
    QuickReply {
        label: "Experience",
        text: "What's his experience?",
    },
    QuickReply {
        label: "Skills",
        text: "What are his skills?",
    },
    QuickReply {
        label: "Contact",
        text: "How can I contact him?",
    },
];

/// Receives navigation requests once the reply that triggered them is visible.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTiming {
    pub reply_delay_min: Duration,
    pub reply_delay_max: Duration,
    pub welcome_delay: Duration,
    pub navigation_delay: Duration,
}

impl Default for ChatTiming {
    fn default() -> Self {
        Self {
            reply_delay_min: Duration::from_millis(1000),
            reply_delay_max: Duration::from_millis(2000),
            welcome_delay: Duration::from_millis(300),
            navigation_delay: Duration::from_millis(1000),
        }
    }
}

impl ChatTiming {
    pub fn immediate() -> Self {
        Self {
            reply_delay_min: Duration::ZERO,
            reply_delay_max: Duration::ZERO,
            welcome_delay: Duration::ZERO,
            navigation_delay: Duration::ZERO,
        }
    }

    /// Uniform pick in `[reply_delay_min, reply_delay_max]`.
    pub fn reply_delay(&self) -> Duration {
        let min = self.reply_delay_min.as_millis() as u64;
        let max = (self.reply_delay_max.as_millis() as u64).max(min);
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted(MessageId),
    IgnoredBlank,
    IgnoredComposing,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub open: bool,
    pub composing: bool,
    pub messages: Vec<Message>,
    pub quick_replies: Vec<QuickReply>,
}

#[derive(Debug)]
struct ChatState {
    conversation: Conversation,
    open: bool,
    welcome_visible: bool,
    welcome_task: Option<TaskId>,
}

impl ChatState {
    fn quick_replies_offered(&self) -> bool {
        self.conversation.len() == 1 && self.welcome_visible
    }
}

pub struct ChatWidget {
    state: Arc<Mutex<ChatState>>,
    scheduler: Arc<TaskScheduler>,
    responder: Responder,
    navigator: Arc<dyn Navigator>,
    timing: ChatTiming,
    replied: Arc<Notify>,
}

impl ChatWidget {
    pub fn new(responder: Responder, navigator: Arc<dyn Navigator>, timing: ChatTiming) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState {
                conversation: Conversation::with_welcome(WELCOME_MESSAGE),
                open: false,
                welcome_visible: false,
                welcome_task: None,
            })),
            scheduler: Arc::new(TaskScheduler::new()),
            responder,
            navigator,
            timing,
            replied: Arc::new(Notify::new()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn is_composing(&self) -> bool {
        self.state.lock().conversation.is_composing()
    }

    pub fn is_welcome_visible(&self) -> bool {
        self.state.lock().welcome_visible
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Show the chat surface; the welcome message appears after
    /// `welcome_delay` so the entrance animation can start first.
    pub fn open(&self) {
        let mut state = self.state.lock();
        if state.open {
            return;
        }
        state.open = true;

        let weak = Arc::downgrade(&self.state);
        let revealed = Arc::clone(&self.replied);
        let task = self.scheduler.schedule(self.timing.welcome_delay, move || {
            if let Some(state) = weak.upgrade() {
                {
                    let mut state = state.lock();
                    if state.open {
                        state.welcome_visible = true;
                    }
                    state.welcome_task = None;
                }
                revealed.notify_waiters();
            }
        });
        state.welcome_task = Some(task);
        debug!("Chat opened");
    }

    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.open {
            return;
        }
        state.open = false;
        state.welcome_visible = false;
        if let Some(task) = state.welcome_task.take() {
            self.scheduler.cancel(task);
        }
        debug!("Chat closed");
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Accept a user message and schedule the assistant's reply. Blank text
    /// and text sent while a reply is outstanding are ignored.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::IgnoredBlank;
        }

        let mut state = self.state.lock();
        if state.conversation.is_composing() {
            debug!("Reply outstanding, ignoring submission");
            return SubmitOutcome::IgnoredComposing;
        }

        let id = state.conversation.push_user(text).id;
        state.conversation.set_composing(true);
        drop(state);

        let reply = self.responder.respond(text);
        info!(
            "Chat submission matched rule {}",
            reply.rule.unwrap_or("fallback")
        );

        let state = Arc::downgrade(&self.state);
        let scheduler = Arc::downgrade(&self.scheduler);
        let navigator = Arc::clone(&self.navigator);
        let replied = Arc::clone(&self.replied);
        let navigation_delay = self.timing.navigation_delay;

        self.scheduler.schedule(self.timing.reply_delay(), move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            {
                let mut state = state.lock();
                state.conversation.push_assistant(reply.text);
                state.conversation.set_composing(false);
            }
            replied.notify_waiters();

            if let (Some(target), Some(scheduler)) = (reply.navigation, scheduler.upgrade()) {
                scheduler.schedule(navigation_delay, move || navigator.navigate(target));
            }
        });

        SubmitOutcome::Accepted(id)
    }

    /// Quick replies are offered while only the visible welcome message is
    /// in the conversation.
    pub fn quick_replies(&self) -> Vec<QuickReply> {
        if self.state.lock().quick_replies_offered() {
            QUICK_REPLIES.to_vec()
        } else {
            Vec::new()
        }
    }

    /// Submit the preset text behind a quick-reply label.
    pub fn quick_reply(&self, label: &str) -> Option<SubmitOutcome> {
        QUICK_REPLIES
            .iter()
            .find(|quick| quick.label.eq_ignore_ascii_case(label.trim()))
            .map(|quick| self.submit(quick.text))
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().conversation.messages().to_vec()
    }

    /// Messages as the user sees them: the welcome message stays hidden until
    /// its reveal delay has passed.
    pub fn snapshot(&self) -> ChatSnapshot {
        let state = self.state.lock();
        let messages = state
            .conversation
            .messages()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index > 0 || state.welcome_visible)
            .map(|(_, message)| message.clone())
            .collect();

        ChatSnapshot {
            open: state.open,
            composing: state.conversation.is_composing(),
            messages,
            quick_replies: if state.quick_replies_offered() {
                QUICK_REPLIES.to_vec()
            } else {
                Vec::new()
            },
        }
    }

    /// Wait until no reply is outstanding and return the latest message.
    pub async fn wait_for_reply(&self) -> Option<Message> {
        loop {
            let notified = self.replied.notified();
            {
                let state = self.state.lock();
                if !state.conversation.is_composing() {
                    return state.conversation.last().cloned();
                }
            }
            notified.await;
        }
    }

    /// Wait until the welcome message is shown, or return straight away
    /// when the widget is closed.
    pub async fn wait_for_welcome(&self) -> ChatSnapshot {
        loop {
            let notified = self.replied.notified();
            {
                let state = self.state.lock();
                if state.welcome_visible || !state.open || state.welcome_task.is_none() {
                    break;
                }
            }
            notified.await;
        }
        self.snapshot()
    }

    /// Cancel every pending timer. Called on drop as well.
    pub fn teardown(&self) {
        self.scheduler.cancel_all();
        {
            let mut state = self.state.lock();
            state.conversation.set_composing(false);
            state.welcome_task = None;
        }
        self.replied.notify_waiters();
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Origin;

    #[derive(Default)]
    struct RecordingNavigator {
        targets: Mutex<Vec<NavigationTarget>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, target: NavigationTarget) {
            self.targets.lock().push(target);
        }
    }

    fn widget() -> (ChatWidget, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        // Fixed reply delay so the timeline below is deterministic.
        let timing = ChatTiming {
            reply_delay_min: Duration::from_millis(1500),
            reply_delay_max: Duration::from_millis(1500),
            ..ChatTiming::default()
        };
        let widget = ChatWidget::new(Responder::default(), navigator.clone(), timing);
        (widget, navigator)
    }

    async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_user_message_then_reply() {
        let (widget, _) = widget();

        let outcome = widget.submit("What are his skills?");
        assert!(outcome.is_accepted());
        assert!(widget.is_composing());
        assert_eq!(widget.messages().len(), 2);
        assert_eq!(widget.messages()[1].origin, Origin::User);

        advance(999).await;
        assert!(widget.is_composing());

        advance(1002).await;
        assert!(!widget.is_composing());
        let messages = widget.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].origin, Origin::Assistant);
        assert!(messages[2].text.contains("Embedded Software"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_composing_is_ignored() {
        let (widget, _) = widget();

        assert!(widget.submit("hello").is_accepted());
        assert_eq!(widget.submit("bye"), SubmitOutcome::IgnoredComposing);
        assert_eq!(widget.messages().len(), 2);

        advance(2001).await;
        assert_eq!(widget.messages().len(), 3);
        assert!(widget.submit("bye").is_accepted());
        assert_eq!(widget.messages().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submission_is_ignored() {
        let (widget, _) = widget();
        assert_eq!(widget.submit("   \n"), SubmitOutcome::IgnoredBlank);
        assert_eq!(widget.messages().len(), 1);
        assert!(!widget.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_follows_visible_reply() {
        let (widget, navigator) = widget();

        widget.submit("What's his experience?");
        advance(2001).await;
        assert_eq!(widget.messages().len(), 3);
        assert!(navigator.targets.lock().is_empty());

        advance(1001).await;
        assert_eq!(*navigator.targets.lock(), vec![NavigationTarget::Experience]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_without_navigation_scrolls_nowhere() {
        let (widget, navigator) = widget();

        widget.submit("hello");
        advance(4000).await;
        assert!(navigator.targets.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_reveals_welcome_after_delay() {
        let (widget, _) = widget();
        widget.open();
        assert!(widget.is_open());
        assert!(widget.snapshot().messages.is_empty());
        assert!(widget.quick_replies().is_empty());

        advance(301).await;
        let snapshot = widget.snapshot();
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].text, WELCOME_MESSAGE);
        assert_eq!(snapshot.quick_replies.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_welcome_honours_reveal_delay() {
        let (widget, _) = widget();
        widget.open();
        let started = tokio::time::Instant::now();

        let snapshot = widget.wait_for_welcome().await;
        assert!(started.elapsed() >= Duration::from_millis(300));
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.quick_replies.len(), 4);

        widget.close();
        assert!(widget.wait_for_welcome().await.messages.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_before_welcome_cancels_reveal() {
        let (widget, _) = widget();
        widget.open();
        widget.close();
        advance(500).await;
        assert!(!widget.is_welcome_visible());
        assert_eq!(widget.pending_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_reply_submits_preset_text() {
        let (widget, navigator) = widget();
        widget.open();
        advance(301).await;

        let outcome = widget.quick_reply("contact").unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(widget.messages()[1].text, "How can I contact him?");
        assert!(widget.quick_replies().is_empty());
        assert!(widget.quick_reply("unknown").is_none());

        advance(3001).await;
        assert_eq!(*navigator.targets.lock(), vec![NavigationTarget::Contact]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_reply() {
        let (widget, navigator) = widget();
        widget.submit("Tell me about Paras");
        widget.teardown();

        advance(5000).await;
        assert_eq!(widget.messages().len(), 2);
        assert!(navigator.targets.lock().is_empty());
        assert!(!widget.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_reply_returns_after_teardown() {
        let (widget, _) = widget();
        let widget = Arc::new(widget);
        widget.submit("Tell me about Paras");

        let waiter = {
            let widget = Arc::clone(&widget);
            tokio::spawn(async move { widget.wait_for_reply().await })
        };
        tokio::task::yield_now().await;
        widget.teardown();

        let last = waiter.await.unwrap().unwrap();
        assert_eq!(last.origin, Origin::User);
        assert!(widget.submit("hello").is_accepted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_reply_returns_assistant_message() {
        let (widget, _) = widget();
        widget.submit("asdkjalksd");
        let reply = widget.wait_for_reply().await.unwrap();
        assert!(reply.is_from_assistant());
        assert_eq!(reply.text, crate::responder::FALLBACK_REPLY);
    }

    #[test]
    fn test_reply_delay_stays_in_bounds() {
        let timing = ChatTiming::default();
        for _ in 0..100 {
            let delay = timing.reply_delay();
            assert!(delay >= timing.reply_delay_min && delay <= timing.reply_delay_max);
        }
        assert_eq!(ChatTiming::immediate().reply_delay(), Duration::ZERO);
    }
}
