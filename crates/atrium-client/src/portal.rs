//! The [`Portal`]: the one object tying the collaborators, the UI event
//! sink and the application state together.
//!
//! All domain logic lives as methods on `Portal` (spread across the
//! `session`, `presence`, `subscriptions` and `handlers` modules) so it can
//! be exercised in tests against the in-memory collaborators without a
//! running webview.  The `commands` module is only a thin Tauri shim.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use atrium_store::{AuthClient, DocumentStore};

use crate::events::{emit_payload, EventSink};
use crate::notify::Notifier;
use crate::state::{AppState, SessionUser};

pub struct Portal {
    pub(crate) auth: Arc<dyn AuthClient>,
    pub(crate) store: Arc<dyn DocumentStore>,
    pub(crate) sink: Arc<dyn EventSink>,
    pub(crate) notifier: Notifier,
    state: Mutex<AppState>,
}

impl Portal {
    pub fn new(
        auth: Arc<dyn AuthClient>,
        store: Arc<dyn DocumentStore>,
        sink: Arc<dyn EventSink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            auth,
            store,
            sink,
            notifier: Notifier::new(),
            state: Mutex::new(AppState::new()),
        })
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().expect("state lock poisoned")
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state().current_user.clone()
    }

    pub fn is_teacher(&self) -> bool {
        self.state().is_teacher()
    }

    pub(crate) fn emit<P: Serialize>(&self, event: &str, payload: P) {
        emit_payload(self.sink.as_ref(), event, payload);
    }
}
