//! Snapshots and live subscriptions.

use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

use crate::document::Document;
use crate::error::StoreError;

/// A complete, ordered query result pushed by the store.
///
/// Every snapshot fully replaces the previous one for its subscription;
/// there is no incremental diffing anywhere in the system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub docs: Vec<Document>,
}

impl Snapshot {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn size(&self) -> usize {
        self.docs.len()
    }

    /// Decode every document into a typed model, in snapshot order.
    ///
    /// Documents that fail to decode are logged and skipped so one malformed
    /// record cannot blank an entire view.
    pub fn decode_all<T: DeserializeOwned>(&self) -> Vec<T> {
        self.docs
            .iter()
            .filter_map(|doc| match doc.decode::<T>() {
                Ok(model) => Some(model),
                Err(e) => {
                    tracing::warn!(doc_id = %doc.id, error = %e, "skipping undecodable document");
                    None
                }
            })
            .collect()
    }
}

/// A live query subscription.
///
/// Yields `Ok(snapshot)` for the initial result set and after every change,
/// in emission order, and `Err` if the collaborator reports a subscription
/// failure.  Dropping the subscription detaches the watcher.
pub struct Subscription {
    pub(crate) rx: mpsc::UnboundedReceiver<Result<Snapshot, StoreError>>,
}

impl Subscription {
    /// Wait for the next snapshot event.  Returns `None` once the store
    /// side has been dropped.
    pub async fn next(&mut self) -> Option<Result<Snapshot, StoreError>> {
        self.rx.recv().await
    }
}
