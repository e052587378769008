// src/chat/mod.rs
//! Site assistant: conversation history, reply timers and the widget that
//! ties them to the responder.

pub mod conversation;
pub mod scheduler;
pub mod widget;

pub use conversation::{Conversation, Message, MessageId, Origin};
pub use scheduler::{TaskId, TaskScheduler};
pub use widget::{
    ChatSnapshot, ChatTiming, ChatWidget, Navigator, QuickReply, SubmitOutcome, QUICK_REPLIES,
    WELCOME_MESSAGE,
};
