//! Application state shared across all command handlers and subscriptions.
//!
//! The [`AppState`] struct is owned by the [`Portal`](crate::portal::Portal)
//! behind a mutex.  It is populated on sign-in and cleared on sign-out, so
//! the lifecycle of every piece of session state is explicit rather than
//! ambient.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use atrium_shared::Role;
use atrium_store::{Doubt, Message, PresenceRecord, Resource};

use crate::nav::Tab;

/// The signed-in identity, as derived from the auth collaborator's callback.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Central application state.
///
/// The client holds no authoritative data: everything below is either the
/// current identity or the latest snapshot pushed by the store, kept so
/// view filters can re-render without a round trip.
pub struct AppState {
    /// The signed-in user.  `None` while the login screen is showing.
    pub current_user: Option<SessionUser>,

    /// Latest roster snapshot, keyed by identity.  Full replace per event.
    pub roster: HashMap<String, PresenceRecord>,

    /// Currently active dashboard tab.
    pub active_tab: Tab,

    /// Latest decoded snapshot per list, for client-side view filters.
    pub last_messages: Vec<Message>,
    pub last_resources: Vec<Resource>,
    pub last_doubts: Vec<Doubt>,

    /// Live subscription tasks.  Started on sign-in, aborted on sign-out.
    pub subscriptions: Vec<JoinHandle<()>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: None,
            roster: HashMap::new(),
            active_tab: Tab::Community,
            last_messages: Vec::new(),
            last_resources: Vec::new(),
            last_doubts: Vec::new(),
            subscriptions: Vec::new(),
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| u.role.is_teacher())
    }

    /// Tear down everything tied to the session: identity, cached
    /// snapshots, and the live subscription tasks.
    pub fn clear_session(&mut self) {
        for handle in self.subscriptions.drain(..) {
            handle.abort();
        }
        self.current_user = None;
        self.roster.clear();
        self.last_messages.clear();
        self.last_resources.clear();
        self.last_doubts.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
