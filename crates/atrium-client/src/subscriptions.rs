//! Live store subscriptions feeding the dashboard regions.
//!
//! One task per region.  Every snapshot fully re-renders its region; the
//! decoded models are also cached in [`AppState`](crate::state::AppState) so
//! the client-side view filters can re-render without another round trip.
//! Tasks are aborted on sign-out, never leaked across sessions.

use std::sync::Arc;

use atrium_shared::constants::{
    APP_ID, COLLECTION_ASSIGNMENTS, COLLECTION_COMMUNITY, COLLECTION_DOUBTS, COLLECTION_PRESENCE,
    COLLECTION_RESOURCES, COLLECTION_USERS, MESSAGE_HISTORY_LIMIT,
};
use atrium_shared::DoubtStatus;
use atrium_store::{Assignment, Doubt, Message, Query, Resource, Snapshot, StoreError};

use crate::events::{
    AssignmentsPayload, DoubtsPayload, MessagesPayload, ResourcesPayload, UserCountPayload,
    EVENT_ASSIGNMENTS_UPDATED, EVENT_DOUBTS_UPDATED, EVENT_MESSAGES_UPDATED,
    EVENT_RESOURCES_UPDATED, EVENT_USER_COUNT_UPDATED,
};
use crate::notify::Severity;
use crate::portal::Portal;
use crate::render::doubts::{doubt_list, filtered_doubt_list, DoubtFilter};
use crate::render::messages::{filtered_message_list, message_list};
use crate::render::resources::{filtered_resource_list, resource_list};
use crate::render::assignments;

impl Portal {
    /// Open every dashboard subscription.  Any previous set is torn down
    /// first so a re-login never doubles the streams.
    pub(crate) async fn start_subscriptions(self: Arc<Self>) {
        self.stop_subscriptions();

        let subscriptions = [
            (
                "roster",
                Query::collection(COLLECTION_PRESENCE)
                    .where_eq("appId", APP_ID)
                    .where_eq("isOnline", true),
                Portal::apply_roster_snapshot as fn(&Portal, &Snapshot),
            ),
            (
                "messages",
                Query::collection(COLLECTION_COMMUNITY)
                    .where_eq("appId", APP_ID)
                    .order_by_desc("timestamp")
                    .limit(MESSAGE_HISTORY_LIMIT),
                Portal::apply_messages_snapshot,
            ),
            (
                "assignments",
                Query::collection(COLLECTION_ASSIGNMENTS)
                    .where_eq("appId", APP_ID)
                    .order_by_desc("createdAt"),
                Portal::apply_assignments_snapshot,
            ),
            (
                "resources",
                Query::collection(COLLECTION_RESOURCES)
                    .where_eq("appId", APP_ID)
                    .order_by_desc("createdAt"),
                Portal::apply_resources_snapshot,
            ),
            (
                "doubts",
                Query::collection(COLLECTION_DOUBTS)
                    .where_eq("appId", APP_ID)
                    .order_by_desc("createdAt"),
                Portal::apply_doubts_snapshot,
            ),
            (
                "users",
                Query::collection(COLLECTION_USERS).where_eq("appId", APP_ID),
                Portal::apply_users_snapshot,
            ),
        ];

        let mut handles = Vec::with_capacity(subscriptions.len());
        for (what, query, apply) in subscriptions {
            match self.store.subscribe(query).await {
                Ok(mut sub) => {
                    let portal = self.clone();
                    handles.push(tokio::spawn(async move {
                        while let Some(event) = sub.next().await {
                            match event {
                                Ok(snapshot) => apply(&portal, &snapshot),
                                Err(e) => portal.subscription_failed(what, &e),
                            }
                        }
                    }));
                }
                Err(e) => self.subscription_failed(what, &e),
            }
        }

        self.state().subscriptions = handles;
    }

    pub(crate) fn stop_subscriptions(&self) {
        for handle in self.state().subscriptions.drain(..) {
            handle.abort();
        }
    }

    fn subscription_failed(&self, what: &str, e: &StoreError) {
        tracing::error!(what, error = %e, "subscription failed");
        self.notify(&e.to_string(), Severity::Error);
    }

    fn apply_messages_snapshot(&self, snapshot: &Snapshot) {
        let messages: Vec<Message> = snapshot.decode_all();
        let html = message_list(&messages);
        let count = messages.len();
        self.state().last_messages = messages;
        self.emit(
            EVENT_MESSAGES_UPDATED,
            MessagesPayload {
                html,
                message_count: count,
                total_messages: count,
            },
        );
    }

    fn apply_assignments_snapshot(&self, snapshot: &Snapshot) {
        let items: Vec<Assignment> = snapshot.decode_all();
        self.emit(
            EVENT_ASSIGNMENTS_UPDATED,
            AssignmentsPayload {
                html: assignments::assignment_list(&items),
                total_assignments: items.len(),
            },
        );
    }

    fn apply_resources_snapshot(&self, snapshot: &Snapshot) {
        let items: Vec<Resource> = snapshot.decode_all();
        let html = resource_list(&items);
        self.state().last_resources = items;
        self.emit(EVENT_RESOURCES_UPDATED, ResourcesPayload { html });
    }

    fn apply_doubts_snapshot(&self, snapshot: &Snapshot) {
        let items: Vec<Doubt> = snapshot.decode_all();
        let pending = items
            .iter()
            .filter(|d| d.status == DoubtStatus::Pending)
            .count();
        let html = doubt_list(&items);
        self.state().last_doubts = items;
        self.emit(
            EVENT_DOUBTS_UPDATED,
            DoubtsPayload {
                html,
                pending_count: pending,
            },
        );
    }

    fn apply_users_snapshot(&self, snapshot: &Snapshot) {
        self.emit(
            EVENT_USER_COUNT_UPDATED,
            UserCountPayload {
                total_students: snapshot.size(),
            },
        );
    }

    // View filters re-render from the cached snapshots.

    /// Message region narrowed to one topic (`all` shows everything).
    pub fn rendered_messages(&self, topic: &str) -> String {
        filtered_message_list(&self.state().last_messages, topic)
    }

    /// Resource region narrowed to one type (`all` shows everything).
    pub fn rendered_resources(&self, kind: &str) -> String {
        filtered_resource_list(&self.state().last_resources, kind)
    }

    /// Doubt region through one of the named view filters.  An unknown
    /// filter name falls back to the full list.
    pub fn rendered_doubts(&self, filter: &str) -> String {
        let state = self.state();
        let viewer = state.current_user.as_ref().map(|u| u.uid.clone());
        match DoubtFilter::from_name(filter) {
            Some(f) => filtered_doubt_list(&state.last_doubts, f, viewer.as_deref()),
            None => doubt_list(&state.last_doubts),
        }
    }
}

#[cfg(test)]
use crate::render::messages::is_empty_fragment;
