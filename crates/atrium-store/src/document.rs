//! The document store collaborator surface.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::query::Query;
use crate::snapshot::{Snapshot, Subscription};

/// Sentinel field value requesting a server-assigned timestamp.
///
/// Clients never write their own clock into ordering-sensitive fields; the
/// backend replaces this marker with its own time at commit, which keeps
/// list ordering immune to client clock skew.
pub const SERVER_TIMESTAMP: &str = "__serverTimestamp__";

/// One stored document: a store-assigned id plus a JSON field map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    /// Decode the field map into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.fields.clone())?)
    }

    /// Read a single field as a string, if present.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Narrow interface over the hosted document database.
///
/// Persistence, query filtering, ordering, real-time push and consistency
/// are all the collaborator's concern.  Every application query carries the
/// namespace-tag filter; nothing in this trait enforces that, the call
/// sites do.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by collection and id.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Create or overwrite a document with a known id.
    ///
    /// With `merge` set, only the supplied top-level fields are written and
    /// unrelated fields keep their current values.
    async fn set(&self, collection: &str, id: &str, fields: Value, merge: bool) -> Result<()>;

    /// Append a document with a store-generated id, returned on success.
    async fn add(&self, collection: &str, fields: Value) -> Result<String>;

    /// Run a query once and return the current result set.
    async fn query(&self, query: &Query) -> Result<Snapshot>;

    /// Subscribe to a query.
    ///
    /// The subscription yields the full current result set immediately and
    /// again after every change that affects it.  Within one subscription,
    /// snapshots arrive in emission order; there is no ordering guarantee
    /// between different subscriptions.
    async fn subscribe(&self, query: Query) -> Result<Subscription>;
}
