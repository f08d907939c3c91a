//! Community message cards.

use atrium_store::Message;

use super::{escape, format_time};
use crate::render::formula;

/// Render one message card.
pub fn message_card(message: &Message) -> String {
    let role_icon = if message.user_role.is_teacher() {
        "👨‍🏫"
    } else {
        "👨‍🎓"
    };

    let time = message
        .timestamp
        .as_ref()
        .map(format_time)
        .unwrap_or_default();

    let content = escape(&message.content);
    let formula_block = formula::detect(&message.content)
        .map(|f| format!(r#"<div class="message-formula">{}</div>"#, escape(&f)))
        .unwrap_or_default();

    format!(
        r#"<div class="message {role}">
    <div class="message-header">
        <span class="sender-name">{name} {role_icon}</span>
        <span class="message-topic">#{topic}</span>
        <span class="message-time">{time}</span>
    </div>
    <div class="message-content">{content}{formula_block}</div>
</div>"#,
        role = message.user_role,
        name = escape(&message.user_name),
        topic = escape(&message.topic),
    )
}

/// Render the full message region from one snapshot, newest first.
pub fn message_list(messages: &[Message]) -> String {
    if messages.is_empty() {
        return r#"<div class="welcome-message">
    <i class="fas fa-atom"></i>
    <h3>Welcome to the Physics Forum!</h3>
    <p>Start discussing physics concepts, problems and theories</p>
</div>"#
            .to_string();
    }

    messages.iter().map(message_card).collect()
}

/// Re-render the region showing only one topic (`all` shows everything).
pub fn filtered_message_list(messages: &[Message], topic: &str) -> String {
    if topic == "all" {
        return message_list(messages);
    }
    let filtered: Vec<Message> = messages
        .iter()
        .filter(|m| m.topic == topic)
        .cloned()
        .collect();
    message_list(&filtered)
}

/// The empty-state fragment is a fixed string, used by tests as well.
#[allow(dead_code)]
pub(crate) fn is_empty_fragment(html: &str) -> bool {
    html.contains("welcome-message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_shared::Role;
    use chrono::{TimeZone, Utc};

    fn message(content: &str, topic: &str, role: Role) -> Message {
        Message {
            user_id: "u1".into(),
            user_name: "Asha".into(),
            user_email: "asha@x.com".into(),
            user_role: role,
            content: content.into(),
            topic: topic.into(),
            app_id: "atrium-physics".into(),
            timestamp: Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn card_carries_author_topic_and_content() {
        let html = message_card(&message("hello world", "mechanics", Role::Student));
        assert!(html.contains("Asha"));
        assert!(html.contains("#mechanics"));
        assert!(html.contains("hello world"));
        assert!(html.contains("09:30"));
    }

    #[test]
    fn recognized_formula_is_surfaced_inline() {
        let html = message_card(&message("Why does F=ma?", "mechanics", Role::Student));
        assert!(html.contains("message-formula"));
        assert!(html.contains("F=ma"));

        let plain = message_card(&message("see you later", "general", Role::Student));
        assert!(!plain.contains("message-formula"));
    }

    #[test]
    fn content_markup_is_escaped() {
        let html = message_card(&message("<img src=x>", "general", Role::Student));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn full_repaint_is_idempotent() {
        let msgs = vec![
            message("first", "general", Role::Student),
            message("second", "optics", Role::Teacher),
        ];
        assert_eq!(message_list(&msgs), message_list(&msgs));
    }

    #[test]
    fn empty_snapshot_renders_the_welcome_fragment() {
        let html = message_list(&[]);
        assert!(is_empty_fragment(&html));
    }

    #[test]
    fn topic_filter_narrows_the_list() {
        let msgs = vec![
            message("a", "general", Role::Student),
            message("b", "optics", Role::Student),
        ];
        let html = filtered_message_list(&msgs, "optics");
        assert!(html.contains(">b<") || html.contains("b</div>") || html.contains("b"));
        assert!(!html.contains("#general"));
        assert_eq!(filtered_message_list(&msgs, "all"), message_list(&msgs));
    }
}
