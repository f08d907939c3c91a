//! Presence records and the online roster.
//!
//! Presence is best-effort: the client writes its own online flag and there
//! is no server-side disconnect detection, so a crashed client stays listed
//! until its record is overwritten.

use serde_json::json;

use atrium_shared::constants::{APP_ID, COLLECTION_PRESENCE};
use atrium_store::{PresenceRecord, Snapshot, SERVER_TIMESTAMP};

use crate::events::{RosterPayload, EVENT_ROSTER_UPDATED};
use crate::portal::Portal;
use crate::render::roster::roster_list;

impl Portal {
    /// Write the signed-in identity's presence record.  A no-op without a
    /// session; a merge write otherwise, so an existing record keeps any
    /// fields this client does not manage.
    pub async fn set_presence(&self, online: bool) -> atrium_store::Result<()> {
        let Some(user) = self.current_user() else {
            return Ok(());
        };

        self.store
            .set(
                COLLECTION_PRESENCE,
                &user.uid,
                json!({
                    "userId": user.uid,
                    "name": user.name,
                    "email": user.email,
                    "role": user.role,
                    "isOnline": online,
                    "appId": APP_ID,
                    "lastSeen": SERVER_TIMESTAMP,
                }),
                true,
            )
            .await
    }

    /// Replace the cached roster with the online records of one presence
    /// snapshot and re-render.
    ///
    /// The subscription query already excludes offline records; the filter
    /// here keeps that invariant even for a snapshot produced some other
    /// way, so the map never holds anyone who has signed off.  Both online
    /// counters ride in the same payload, computed from the same snapshot,
    /// so the header and the chat sidebar can never disagree.
    pub(crate) fn apply_roster_snapshot(&self, snapshot: &Snapshot) {
        let records: Vec<PresenceRecord> = snapshot
            .decode_all::<PresenceRecord>()
            .into_iter()
            .filter(|r| r.is_online)
            .collect();
        let online = records.len();
        let html = roster_list(&records);

        {
            let mut state = self.state();
            state.roster = records
                .into_iter()
                .map(|r| (r.user_id.clone(), r))
                .collect();
        }

        self.emit(
            EVENT_ROSTER_UPDATED,
            RosterPayload {
                html,
                online_count: online,
                chat_online_count: online,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::Value;

    use atrium_shared::Role;
    use atrium_store::{Document, DocumentStore, MemoryAuth, MemoryStore};

    use crate::events::test_support::RecordingSink;
    use crate::state::SessionUser;

    fn fixture() -> (Arc<Portal>, Arc<MemoryStore>, Arc<RecordingSink>) {
        let store = Arc::new(MemoryStore::new());
        let sink = Arc::new(RecordingSink::new());
        let portal = Portal::new(Arc::new(MemoryAuth::new()), store.clone(), sink.clone());
        (portal, store, sink)
    }

    fn sign_in(portal: &Portal, uid: &str, role: Role) {
        portal.state().current_user = Some(SessionUser {
            uid: uid.into(),
            name: "Asha".into(),
            email: "asha@x.com".into(),
            role,
        });
    }

    #[tokio::test]
    async fn presence_is_a_no_op_without_a_session() {
        let (portal, store, _sink) = fixture();
        portal.set_presence(true).await.unwrap();
        let snapshot = store
            .query(&atrium_store::Query::collection(COLLECTION_PRESENCE))
            .await
            .unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn presence_upsert_flips_the_online_flag_in_place() {
        let (portal, store, _sink) = fixture();
        sign_in(&portal, "u1", Role::Student);

        portal.set_presence(true).await.unwrap();
        portal.set_presence(false).await.unwrap();

        let doc = store.get(COLLECTION_PRESENCE, "u1").await.unwrap().unwrap();
        assert_eq!(doc.fields["isOnline"], false);
        assert_eq!(doc.fields["name"], "Asha");
        assert_eq!(doc.fields["appId"], APP_ID);
        // The sentinel was resolved, not stored verbatim.
        assert_ne!(doc.fields["lastSeen"], SERVER_TIMESTAMP);
    }

    #[tokio::test]
    async fn roster_snapshot_updates_state_and_both_counters() {
        let (portal, _store, sink) = fixture();

        let record = |id: &str, online: bool| Document {
            id: id.to_string(),
            fields: serde_json::json!({
                "userId": id,
                "name": id,
                "email": format!("{id}@x.com"),
                "role": "student",
                "isOnline": online,
                "appId": APP_ID,
            }),
        };
        let snapshot = Snapshot::new(vec![
            record("u1", true),
            record("u2", true),
            record("u3", false),
        ]);

        portal.apply_roster_snapshot(&snapshot);

        {
            let state = portal.state();
            assert_eq!(state.roster.len(), 2);
            assert!(!state.roster.contains_key("u3"));
        }
        let payload = sink.last(EVENT_ROSTER_UPDATED).unwrap();
        assert_eq!(payload["onlineCount"], 2);
        assert_eq!(payload["chatOnlineCount"], 2);
        let html = payload["html"].as_str().unwrap();
        assert!(html.contains("u1") && !html.contains("u3@x.com"));
    }

    #[tokio::test]
    async fn a_fresh_snapshot_fully_replaces_the_roster() {
        let (portal, _store, sink) = fixture();

        let doc = |id: &str| Document {
            id: id.to_string(),
            fields: serde_json::json!({
                "userId": id, "name": id, "email": format!("{id}@x.com"),
                "role": "student", "isOnline": true, "appId": APP_ID,
            }),
        };

        portal.apply_roster_snapshot(&Snapshot::new(vec![doc("u1"), doc("u2")]));
        portal.apply_roster_snapshot(&Snapshot::new(vec![doc("u2")]));

        assert_eq!(portal.state().roster.len(), 1);
        let payload = sink.last(EVENT_ROSTER_UPDATED).unwrap();
        assert_eq!(payload["onlineCount"], 1);
        assert!(matches!(payload["html"], Value::String(_)));
    }
}
