//! Safe HTML rendering for conversation entries.
//!
//! Backend text is untrusted. Everything is escaped; the only markup that
//! survives is the line-break token inserted by `format_reply`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::state::conversation::{LINE_BREAK, Message, Sender};

/// Render one message's text as an HTML fragment.
#[must_use]
pub fn message_html(message: &Message) -> String {
    match message.sender {
        Sender::Bot => message
            .text
            .split(LINE_BREAK)
            .map(escape_html)
            .collect::<Vec<_>>()
            .join(LINE_BREAK),
        Sender::User => escape_html(&message.text),
    }
}

/// CSS modifier for the bubble that holds a message.
#[must_use]
pub fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user-bubble",
        Sender::Bot => "bot-bubble",
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
