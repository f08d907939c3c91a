//! The single-slot toast notification.
//!
//! One toast is visible at a time; a new one replaces whatever is showing.
//! Each toast schedules its own auto-hide, but the hide only fires if that
//! toast is still the current one: every notification gets a generation
//! number and a stale timer is a no-op, so an old timer can never blank a
//! fresher toast.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use atrium_shared::constants::TOAST_HIDE_MS;

use crate::events::{
    emit_payload, EventSink, NotificationHiddenPayload, NotificationPayload, EVENT_NOTIFICATION,
    EVENT_NOTIFICATION_HIDDEN,
};
use crate::portal::Portal;

/// Toast severity; the frontend maps it to a color.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Generation counter for the toast slot.
pub(crate) struct Notifier {
    current: Arc<AtomicU64>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            current: Arc::new(AtomicU64::new(0)),
        }
    }

    fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Hide the toast identified by `generation` unless a newer one has
/// replaced it.  Returns whether a hide event was emitted.
pub(crate) fn hide_if_current(
    sink: &dyn EventSink,
    current: &AtomicU64,
    generation: u64,
) -> bool {
    if current.load(Ordering::SeqCst) != generation {
        return false;
    }
    emit_payload(
        sink,
        EVENT_NOTIFICATION_HIDDEN,
        NotificationHiddenPayload { generation },
    );
    true
}

impl Portal {
    /// Show a toast.  Returns its generation number.
    pub fn notify(&self, message: &str, severity: Severity) -> u64 {
        let generation = self.notifier.next();
        self.emit(
            EVENT_NOTIFICATION,
            NotificationPayload {
                message: message.to_string(),
                severity,
                generation,
            },
        );

        // Auto-hide after the fixed delay.  Outside a runtime (plain unit
        // tests) the toast simply stays until replaced.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let sink = Arc::clone(&self.sink);
            let current = Arc::clone(&self.notifier.current);
            handle.spawn(async move {
                tokio::time::sleep(Duration::from_millis(TOAST_HIDE_MS)).await;
                hide_if_current(sink.as_ref(), &current, generation);
            });
        }

        generation
    }

    /// Dismiss the currently shown toast (user clicked it).
    pub fn dismiss_notification(&self) {
        let generation = self.notifier.current.load(Ordering::SeqCst);
        hide_if_current(self.sink.as_ref(), &self.notifier.current, generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_store::{MemoryAuth, MemoryStore};

    use crate::events::test_support::RecordingSink;

    fn portal_with_sink() -> (Arc<Portal>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let portal = Portal::new(
            Arc::new(MemoryAuth::new()),
            Arc::new(MemoryStore::new()),
            sink.clone(),
        );
        (portal, sink)
    }

    #[test]
    fn a_new_toast_replaces_the_previous_generation() {
        let (portal, sink) = portal_with_sink();

        let first = portal.notify("first", Severity::Info);
        let second = portal.notify("second", Severity::Success);
        assert!(second > first);
        assert_eq!(sink.count(EVENT_NOTIFICATION), 2);

        let last = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(last["message"], "second");
        assert_eq!(last["severity"], "success");
    }

    #[test]
    fn a_stale_timer_cannot_hide_a_fresher_toast() {
        let (portal, sink) = portal_with_sink();

        let stale = portal.notify("old", Severity::Info);
        let fresh = portal.notify("new", Severity::Warning);

        // The old toast's timer fires after the replacement: no-op.
        assert!(!hide_if_current(
            portal.sink.as_ref(),
            &portal.notifier.current,
            stale
        ));
        assert_eq!(sink.count(EVENT_NOTIFICATION_HIDDEN), 0);

        // The current toast's own timer still hides it.
        assert!(hide_if_current(
            portal.sink.as_ref(),
            &portal.notifier.current,
            fresh
        ));
        assert_eq!(sink.count(EVENT_NOTIFICATION_HIDDEN), 1);
    }

    #[test]
    fn dismiss_hides_the_current_toast() {
        let (portal, sink) = portal_with_sink();
        portal.notify("hello", Severity::Info);
        portal.dismiss_notification();
        assert_eq!(sink.count(EVENT_NOTIFICATION_HIDDEN), 1);
    }
}
