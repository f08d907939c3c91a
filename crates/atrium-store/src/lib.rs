//! # atrium-store
//!
//! The two external collaborators Atrium is built on, expressed as narrow
//! traits: an [`AuthClient`] for credential handling and session state, and
//! a [`DocumentStore`] for persistence with live query subscriptions.
//!
//! The hosted services own validation, ordering, consistency and push
//! delivery; this crate only shapes their surface.  [`MemoryAuth`] and
//! [`MemoryStore`] are complete in-memory implementations with real
//! snapshot-push semantics, used for local development and as the test
//! backend for every crate in the workspace.

pub mod auth;
pub mod document;
pub mod memory;
pub mod models;
pub mod query;
pub mod snapshot;

mod error;

pub use auth::{AuthClient, AuthError, AuthUser};
pub use document::{Document, DocumentStore, SERVER_TIMESTAMP};
pub use error::{Result, StoreError};
pub use memory::{MemoryAuth, MemoryStore};
pub use models::*;
pub use query::{Direction, Query};
pub use snapshot::{Snapshot, Subscription};
