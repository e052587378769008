// src/chat/conversation.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MessageId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Assistant,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            origin,
            created_at: Utc::now(),
        }
    }

    pub fn is_from_assistant(&self) -> bool {
        self.origin == Origin::Assistant
    }
}

/// Append-only message history plus the "assistant is composing" flag.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    composing: bool,
}

impl Conversation {
    /// Start a conversation seeded with the assistant's welcome message.
    pub fn with_welcome(welcome: &str) -> Self {
        Self {
            messages: vec![Message::new(Origin::Assistant, welcome)],
            composing: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::new(Origin::User, text))
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::new(Origin::Assistant, text))
    }

    pub(crate) fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_welcome_message_seeds_conversation() {
        let conversation = Conversation::with_welcome("Hi!");
        assert_eq!(conversation.len(), 1);
        assert!(conversation.messages()[0].is_from_assistant());
        assert!(!conversation.is_composing());
    }

    #[test]
    fn test_messages_keep_insertion_order_and_unique_ids() {
        let mut conversation = Conversation::with_welcome("Hi!");
        conversation.push_user("one");
        conversation.push_assistant("two");
        conversation.push_user("three");

        let texts: Vec<&str> = conversation
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Hi!", "one", "two", "three"]);

        let ids: HashSet<MessageId> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), conversation.len());
    }
}
