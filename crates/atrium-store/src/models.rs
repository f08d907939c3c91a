//! Typed views of the documents Atrium reads back from the store.
//!
//! Field names are camelCase on the wire.  Server-assigned timestamps are
//! `Option`s: a document observed between the local write and the server
//! commit may not carry them yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atrium_shared::{DoubtStatus, Role};

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

/// One profile per identity, created on first registration or first sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub role: Role,
    pub app_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

/// Best-effort online/offline record for one identity.
///
/// There is no server-side disconnect detection; `is_online` is whatever the
/// client last managed to write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_online: bool,
    pub app_id: String,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Community message
// ---------------------------------------------------------------------------

/// One append-only community message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_role: Role,
    pub content: String,
    pub topic: String,
    pub app_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// A homework assignment.  Only the teacher identity creates these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub topic: String,
    pub weight: u32,
    pub resource_link: String,
    pub teacher_name: String,
    pub teacher_id: String,
    pub app_id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// A shared study resource.  The link always points at the fixed
/// document-sharing domain; the command handler rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub branch: String,
    pub difficulty: String,
    pub teacher_name: String,
    pub teacher_id: String,
    pub app_id: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Doubt
// ---------------------------------------------------------------------------

/// One teacher reply inside a doubt's answer sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoubtAnswer {
    pub teacher_name: String,
    pub answer: String,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

/// A student question.  Created as `pending` with no answers; status and
/// answers are mutated only outside this client's write path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doubt {
    pub question: String,
    pub topic: String,
    pub urgency: String,
    pub student_id: String,
    pub student_name: String,
    pub student_email: String,
    pub app_id: String,
    pub status: DoubtStatus,
    #[serde(default)]
    pub answers: Vec<DoubtAnswer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
