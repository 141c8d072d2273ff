use super::*;

// =============================================================
// append_user
// =============================================================

#[test]
fn conversation_default_empty() {
    let convo = Conversation::default();
    assert!(convo.is_empty());
    assert!(convo.last().is_none());
}

#[test]
fn append_user_ignores_blank_input() {
    let mut convo = Conversation::default();
    for blank in ["", " ", "\t", "\n \r\n"] {
        assert!(convo.append_user(blank).is_none());
    }
    assert_eq!(convo.len(), 0);
}

#[test]
fn append_user_keeps_text_verbatim() {
    let mut convo = Conversation::default();
    let messages = convo.append_user("  Hello\nworld ").unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].text, "  Hello\nworld ");
}

// =============================================================
// append_bot
// =============================================================

#[test]
fn append_bot_formats_newlines() {
    let mut convo = Conversation::default();
    let messages = convo.append_bot("Hi\nthere");
    assert_eq!(messages[0].sender, Sender::Bot);
    assert_eq!(messages[0].text, "Hi<br/>there");
}

#[test]
fn append_bot_accepts_empty_text() {
    let mut convo = Conversation::default();
    convo.append_bot("");
    assert_eq!(convo.len(), 1);
    assert_eq!(convo.last().unwrap().text, "");
}

#[test]
fn appends_preserve_insertion_order() {
    let mut convo = Conversation::default();
    convo.append_user("one");
    convo.append_bot("two");
    convo.append_user("three");
    let texts: Vec<_> = convo.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    let senders: Vec<_> = convo.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, [Sender::User, Sender::Bot, Sender::User]);
}

#[test]
fn message_ids_are_unique() {
    let mut convo = Conversation::default();
    convo.append_user("a");
    convo.append_user("a");
    let msgs = convo.messages();
    assert_ne!(msgs[0].id, msgs[1].id);
}

// =============================================================
// format_reply
// =============================================================

#[test]
fn format_reply_replaces_every_newline() {
    let samples = ["", "no breaks", "\n", "a\nb\nc", "\n\nlead", "trail\n\n", "mixed\r\nline"];
    for sample in samples {
        let expected = sample.matches('\n').count();
        let out = format_reply(sample);
        assert_eq!(out.matches(LINE_BREAK).count(), expected, "sample {sample:?}");
        assert!(!out.contains('\n'), "sample {sample:?}");
    }
}

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
}
