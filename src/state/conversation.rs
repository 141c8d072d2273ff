#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Markup token substituted for every newline in bot text.
pub const LINE_BREAK: &str = "<br/>";

/// Author of a conversation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single conversation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl Message {
    fn new(sender: Sender, text: String) -> Self {
        Self { id: Uuid::new_v4(), sender, text }
    }
}

/// Append-only message log for one widget session.
///
/// Entries are never removed, reordered, or edited once pushed.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Append a user message. Blank input is ignored and yields `None`.
    pub fn append_user(&mut self, text: &str) -> Option<&[Message]> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::new(Sender::User, text.to_owned()));
        Some(&self.messages)
    }

    /// Append a bot message, converting newlines to [`LINE_BREAK`].
    pub fn append_bot(&mut self, text: &str) -> &[Message] {
        self.messages.push(Message::new(Sender::Bot, format_reply(text)));
        &self.messages
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Replace every literal `\n` with [`LINE_BREAK`].
#[must_use]
pub fn format_reply(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}
