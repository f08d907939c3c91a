//! In-memory reference implementations of both collaborators.
//!
//! [`MemoryStore`] keeps every collection in process memory and pushes a
//! full recomputed snapshot to each matching watcher on every mutation,
//! reproducing the hosted store's push model (initial snapshot on
//! subscribe, full replace on change, per-subscription ordering).
//! [`MemoryAuth`] keeps an account table and a watch channel for the
//! session state.  Both back local development and the test suite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use crate::auth::{AuthClient, AuthError, AuthUser};
use crate::document::{Document, DocumentStore, SERVER_TIMESTAMP};
use crate::error::{Result, StoreError};
use crate::query::Query;
use crate::snapshot::{Snapshot, Subscription};

// ---------------------------------------------------------------------------
// Document store
// ---------------------------------------------------------------------------

struct Watcher {
    query: Query,
    tx: mpsc::UnboundedSender<std::result::Result<Snapshot, StoreError>>,
}

#[derive(Default)]
struct StoreInner {
    /// Collection name -> documents in insertion order.
    collections: HashMap<String, Vec<Document>>,
    watchers: Vec<Watcher>,
}

/// In-memory [`DocumentStore`] with live snapshot push.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve server-timestamp sentinels to the backend's clock.
    fn resolve_timestamps(fields: &mut Value) {
        let now = Utc::now().to_rfc3339();
        if let Value::Object(map) = fields {
            for value in map.values_mut() {
                if value.as_str() == Some(SERVER_TIMESTAMP) {
                    *value = Value::String(now.clone());
                }
            }
        }
    }

    /// Push `error` to every watcher of `collection`.  Test hook for the
    /// subscription failure path; the hosted store surfaces these on
    /// revoked rules or dropped connections.
    pub fn fail_watchers(&self, collection: &str, error: StoreError) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.watchers.retain(|w| {
            if w.query.collection != collection {
                return true;
            }
            w.tx.send(Err(error.clone())).is_ok()
        });
    }

    /// Push the recomputed result set to every watcher of `collection`.
    ///
    /// Watchers whose receiving side is gone are detached here.
    fn notify(inner: &mut StoreInner, collection: &str) {
        let docs = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();

        inner.watchers.retain(|w| {
            if w.query.collection != collection {
                return true;
            }
            let snapshot = Snapshot::new(w.query.apply(docs.clone()));
            w.tx.send(Ok(snapshot)).is_ok()
        });
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, mut fields: Value, merge: bool) -> Result<()> {
        Self::resolve_timestamps(&mut fields);

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let docs = inner.collections.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|d| d.id == id) {
            Some(existing) if merge => {
                // Shallow merge: only supplied top-level fields are written.
                if let (Value::Object(current), Value::Object(incoming)) =
                    (&mut existing.fields, fields)
                {
                    for (key, value) in incoming {
                        current.insert(key, value);
                    }
                }
            }
            Some(existing) => existing.fields = fields,
            None => docs.push(Document {
                id: id.to_string(),
                fields,
            }),
        }

        Self::notify(&mut inner, collection);
        Ok(())
    }

    async fn add(&self, collection: &str, mut fields: Value) -> Result<String> {
        Self::resolve_timestamps(&mut fields);
        let id = Uuid::new_v4().to_string();

        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                fields,
            });

        Self::notify(&mut inner, collection);
        Ok(id)
    }

    async fn query(&self, query: &Query) -> Result<Snapshot> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let docs = inner
            .collections
            .get(&query.collection)
            .cloned()
            .unwrap_or_default();
        Ok(Snapshot::new(query.apply(docs)))
    }

    async fn subscribe(&self, query: Query) -> Result<Subscription> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let docs = inner
            .collections
            .get(&query.collection)
            .cloned()
            .unwrap_or_default();

        // Initial snapshot, delivered before any future change event.
        let initial = Snapshot::new(query.apply(docs));
        tx.send(Ok(initial))
            .map_err(|_| StoreError::Other("subscription closed".to_string()))?;

        inner.watchers.push(Watcher { query, tx });
        Ok(Subscription { rx })
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

struct Account {
    uid: String,
    email: String,
    password: String,
    display_name: Option<String>,
    disabled: bool,
}

/// In-memory [`AuthClient`].
pub struct MemoryAuth {
    accounts: Mutex<Vec<Account>>,
    state_tx: watch::Sender<Option<AuthUser>>,
}

impl Default for MemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuth {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(Vec::new()),
            state_tx,
        }
    }

    /// Mark an account as disabled.  Test hook for the `user-disabled` path.
    pub fn disable(&self, email: &str) {
        let mut accounts = self.accounts.lock().expect("auth lock poisoned");
        if let Some(account) = accounts.iter_mut().find(|a| a.email == email) {
            account.disabled = true;
        }
    }

    /// Whether an account exists for the given email.
    pub fn has_account(&self, email: &str) -> bool {
        self.accounts
            .lock()
            .expect("auth lock poisoned")
            .iter()
            .any(|a| a.email == email)
    }

    fn user_of(account: &Account) -> AuthUser {
        AuthUser {
            uid: account.uid.clone(),
            email: account.email.clone(),
            display_name: account.display_name.clone(),
        }
    }
}

#[async_trait]
impl AuthClient for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<AuthUser, AuthError> {
        let accounts = self.accounts.lock().expect("auth lock poisoned");
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::UserNotFound)?;

        if account.disabled {
            return Err(AuthError::UserDisabled);
        }
        if account.password != password {
            return Err(AuthError::WrongPassword);
        }

        let user = Self::user_of(account);
        drop(accounts);

        self.state_tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> std::result::Result<AuthUser, AuthError> {
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.len() < 6 {
            return Err(AuthError::WeakPassword);
        }

        let mut accounts = self.accounts.lock().expect("auth lock poisoned");
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let account = Account {
            uid: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.filter(|n| !n.trim().is_empty()),
            disabled: false,
        };
        let user = Self::user_of(&account);
        accounts.push(account);
        drop(accounts);

        // The service signs a fresh account in immediately.
        self.state_tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> std::result::Result<(), AuthError> {
        self.state_tx.send_replace(None);
        Ok(())
    }

    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store
            .set("users", "u1", json!({"name": "Asha", "branch": "general"}), false)
            .await
            .unwrap();

        let doc = store.get("users", "u1").await.unwrap().unwrap();
        assert_eq!(doc.str_field("name"), Some("Asha"));
        assert!(store.get("users", "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn merge_set_keeps_unrelated_fields() {
        let store = MemoryStore::new();
        store
            .set(
                "onlineUsers",
                "u1",
                json!({"name": "Asha", "isOnline": true, "role": "student"}),
                false,
            )
            .await
            .unwrap();

        store
            .set("onlineUsers", "u1", json!({"isOnline": false}), true)
            .await
            .unwrap();

        let doc = store.get("onlineUsers", "u1").await.unwrap().unwrap();
        assert_eq!(doc.fields["isOnline"], json!(false));
        assert_eq!(doc.str_field("name"), Some("Asha"));
        assert_eq!(doc.str_field("role"), Some("student"));
    }

    #[tokio::test]
    async fn plain_set_overwrites_the_whole_document() {
        let store = MemoryStore::new();
        store
            .set("users", "u1", json!({"name": "Asha", "branch": "optics"}), false)
            .await
            .unwrap();
        store
            .set("users", "u1", json!({"name": "Asha"}), false)
            .await
            .unwrap();

        let doc = store.get("users", "u1").await.unwrap().unwrap();
        assert!(doc.fields.get("branch").is_none());
    }

    #[tokio::test]
    async fn add_assigns_an_id_and_resolves_server_timestamps() {
        let store = MemoryStore::new();
        let id = store
            .add("community", json!({"content": "hi", "timestamp": SERVER_TIMESTAMP}))
            .await
            .unwrap();

        let doc = store.get("community", &id).await.unwrap().unwrap();
        let ts = doc.str_field("timestamp").unwrap();
        assert_ne!(ts, SERVER_TIMESTAMP);
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn subscribe_delivers_initial_then_updated_snapshots() {
        let store = MemoryStore::new();
        store
            .add("community", json!({"content": "first", "appId": "atrium-physics"}))
            .await
            .unwrap();

        let query = Query::collection("community").where_eq("appId", "atrium-physics");
        let mut sub = store.subscribe(query).await.unwrap();

        let initial = sub.next().await.unwrap().unwrap();
        assert_eq!(initial.size(), 1);

        store
            .add("community", json!({"content": "second", "appId": "atrium-physics"}))
            .await
            .unwrap();

        let updated = sub.next().await.unwrap().unwrap();
        assert_eq!(updated.size(), 2);
    }

    #[tokio::test]
    async fn subscription_only_sees_matching_documents() {
        let store = MemoryStore::new();
        let query = Query::collection("onlineUsers")
            .where_eq("appId", "atrium-physics")
            .where_eq("isOnline", true);
        let mut sub = store.subscribe(query).await.unwrap();
        assert!(sub.next().await.unwrap().unwrap().is_empty());

        store
            .set(
                "onlineUsers",
                "u1",
                json!({"appId": "atrium-physics", "isOnline": false}),
                false,
            )
            .await
            .unwrap();

        let snap = sub.next().await.unwrap().unwrap();
        assert!(snap.is_empty());

        store
            .set("onlineUsers", "u1", json!({"isOnline": true}), true)
            .await
            .unwrap();

        let snap = sub.next().await.unwrap().unwrap();
        assert_eq!(snap.size(), 1);
    }

    #[tokio::test]
    async fn failed_watchers_receive_the_error() {
        let store = MemoryStore::new();
        let mut sub = store
            .subscribe(Query::collection("doubts").where_eq("appId", "atrium-physics"))
            .await
            .unwrap();
        assert!(sub.next().await.unwrap().is_ok());

        store.fail_watchers("doubts", StoreError::PermissionDenied);
        assert_eq!(sub.next().await.unwrap(), Err(StoreError::PermissionDenied));

        // Watchers of other collections are untouched.
        let mut other = store.subscribe(Query::collection("community")).await.unwrap();
        assert!(other.next().await.unwrap().is_ok());
        store.fail_watchers("doubts", StoreError::Unavailable);
        store.add("community", json!({"content": "hi"})).await.unwrap();
        assert!(other.next().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn register_then_sign_in_and_error_codes() {
        let auth = MemoryAuth::new();

        let user = auth
            .register("asha@x.com", "secret1", Some("Asha".into()))
            .await
            .unwrap();
        assert_eq!(user.email, "asha@x.com");

        assert_eq!(
            auth.register("asha@x.com", "secret1", None).await,
            Err(AuthError::EmailAlreadyInUse)
        );
        assert_eq!(
            auth.register("not-an-email", "secret1", None).await,
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            auth.register("new@x.com", "short", None).await,
            Err(AuthError::WeakPassword)
        );

        assert_eq!(
            auth.sign_in("nobody@x.com", "secret1").await,
            Err(AuthError::UserNotFound)
        );
        assert_eq!(
            auth.sign_in("asha@x.com", "wrong").await,
            Err(AuthError::WrongPassword)
        );

        auth.disable("asha@x.com");
        assert_eq!(
            auth.sign_in("asha@x.com", "secret1").await,
            Err(AuthError::UserDisabled)
        );
    }

    #[tokio::test]
    async fn auth_state_delivers_current_value_immediately() {
        let auth = MemoryAuth::new();
        assert!(auth.auth_state().borrow().is_none());

        auth.register("asha@x.com", "secret1", None).await.unwrap();

        // A subscriber attached after the fact still observes the session.
        let rx = auth.auth_state();
        assert_eq!(
            rx.borrow().as_ref().map(|u| u.email.clone()),
            Some("asha@x.com".to_string())
        );

        auth.sign_out().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
