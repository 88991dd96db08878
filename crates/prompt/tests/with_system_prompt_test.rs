//! Unit tests for `prompt::with_system_prompt` and message constructors.
//!
//! Verifies system-message placement, history ordering, and stray system
//! entry removal. External interactions: none (pure function tests).

use prompt::{with_system_prompt, ChatMessage, MessageRole};

/// **Test: The assembled sequence starts with exactly one system message carrying the given text.**
#[test]
fn system_message_is_prepended() {
    let messages = with_system_prompt("You are helpful.", vec![ChatMessage::user("Hi")]);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[0].content, "You are helpful.");
}

/// **Test: User/assistant history keeps its original order after the system message.**
#[test]
fn history_order_is_preserved() {
    let history = vec![
        ChatMessage::user("What is SEO?"),
        ChatMessage::assistant("Search engine optimization."),
        ChatMessage::user("And local SEO?"),
    ];
    let messages = with_system_prompt("persona", history);
    assert_eq!(messages[1].content, "What is SEO?");
    assert_eq!(messages[2].content, "Search engine optimization.");
    assert_eq!(messages[3].content, "And local SEO?");
}

/// **Test: System entries already present in history are dropped; only the head system message remains.**
#[test]
fn stray_system_entries_are_dropped() {
    let history = vec![
        ChatMessage::system("old persona"),
        ChatMessage::user("Hi"),
    ];
    let messages = with_system_prompt("new persona", history);
    let system_count = messages
        .iter()
        .filter(|m| m.role == MessageRole::System)
        .count();
    assert_eq!(system_count, 1);
    assert_eq!(messages[0].content, "new persona");
    assert_eq!(messages[1].content, "Hi");
}

/// **Test: Empty history yields a sequence containing only the system message.**
#[test]
fn empty_history_yields_system_only() {
    let messages = with_system_prompt("persona", Vec::new());
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::System);
}

/// **Test: transcript_line renders `role: content` with API wire role names.**
#[test]
fn transcript_line_uses_wire_role_names() {
    assert_eq!(
        ChatMessage::user("hola").transcript_line(),
        "user: hola"
    );
    assert_eq!(
        ChatMessage::assistant("buenas").transcript_line(),
        "assistant: buenas"
    );
    assert_eq!(MessageRole::System.as_str(), "system");
}
