//! Events pushed from the Rust core to the webview.
//!
//! Every view region is rebuilt from whole payloads; the frontend never
//! receives diffs.  The [`EventSink`] seam exists so the same emission path
//! runs against a Tauri [`AppHandle`] in production and a recording sink in
//! tests.

use serde::Serialize;
use serde_json::Value;

use atrium_shared::Role;

use crate::notify::Severity;

pub const EVENT_SCREEN_CHANGED: &str = "screen-changed";
pub const EVENT_SESSION_CHANGED: &str = "session-changed";
pub const EVENT_NOTIFICATION: &str = "notification";
pub const EVENT_NOTIFICATION_HIDDEN: &str = "notification-hidden";
pub const EVENT_TAB_CHANGED: &str = "tab-changed";
pub const EVENT_ROSTER_UPDATED: &str = "roster-updated";
pub const EVENT_MESSAGES_UPDATED: &str = "messages-updated";
pub const EVENT_ASSIGNMENTS_UPDATED: &str = "assignments-updated";
pub const EVENT_RESOURCES_UPDATED: &str = "resources-updated";
pub const EVENT_DOUBTS_UPDATED: &str = "doubts-updated";
pub const EVENT_USER_COUNT_UPDATED: &str = "user-count-updated";

/// Something that can deliver an event to the UI layer.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

impl EventSink for tauri::AppHandle {
    fn emit(&self, event: &str, payload: Value) {
        if let Err(e) = tauri::Emitter::emit(self, event, payload) {
            tracing::error!(event, error = %e, "failed to emit event");
        }
    }
}

/// Serialize a payload and hand it to the sink; serialization failures are
/// logged rather than propagated, an event is fire-and-forget.
pub fn emit_payload<P: Serialize>(sink: &dyn EventSink, event: &str, payload: P) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit(event, value),
        Err(e) => tracing::error!(event, error = %e, "failed to serialize event payload"),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPayload {
    pub screen: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_teacher: bool,
}

/// Both online counters are carried in one payload, computed once per
/// roster snapshot, so the two displays can never diverge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPayload {
    pub html: String,
    pub online_count: usize,
    pub chat_online_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesPayload {
    pub html: String,
    pub message_count: usize,
    pub total_messages: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentsPayload {
    pub html: String,
    pub total_assignments: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesPayload {
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubtsPayload {
    pub html: String,
    pub pending_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCountPayload {
    pub total_students: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub message: String,
    pub severity: Severity,
    pub generation: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHiddenPayload {
    pub generation: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPayload {
    pub tab: &'static str,
    pub fragment: String,
}
