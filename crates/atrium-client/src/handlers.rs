//! Content creation: messages, assignments, resources and doubts.
//!
//! Every handler validates first, writes second, and never renders: the
//! region repaint always comes back through the live subscription, so a
//! successful write and a change made by another client look identical.

use serde_json::json;

use atrium_shared::constants::{
    APP_ID, COLLECTION_ASSIGNMENTS, COLLECTION_COMMUNITY, COLLECTION_DOUBTS, COLLECTION_RESOURCES,
    SHARING_DOMAIN, TEACHER_NAME,
};
use atrium_store::SERVER_TIMESTAMP;

use crate::notify::Severity;
use crate::portal::Portal;
use crate::state::SessionUser;

impl Portal {
    fn require_user(&self) -> Option<SessionUser> {
        let user = self.current_user();
        if user.is_none() {
            tracing::warn!("write attempted without a session");
        }
        user
    }

    fn require_teacher(&self, denied: &str) -> Option<SessionUser> {
        let user = self.require_user()?;
        if !user.role.is_teacher() {
            self.notify(denied, Severity::Warning);
            return None;
        }
        Some(user)
    }

    /// Post a community message.  Returns whether the input box should be
    /// cleared.
    pub async fn send_message(&self, content: &str, topic: &str) -> bool {
        let Some(user) = self.require_user() else {
            return false;
        };
        let content = content.trim();
        if content.is_empty() {
            self.notify("Please enter a message", Severity::Warning);
            return false;
        }

        let fields = json!({
            "userId": user.uid,
            "userName": user.name,
            "userEmail": user.email,
            "userRole": user.role,
            "content": content,
            "topic": topic,
            "appId": APP_ID,
            "timestamp": SERVER_TIMESTAMP,
        });
        match self.store.add(COLLECTION_COMMUNITY, fields).await {
            Ok(_) => {
                self.notify("Message sent! 💬", Severity::Success);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "message write failed");
                self.notify("Failed to send message", Severity::Error);
                false
            }
        }
    }

    /// Publish an assignment.  Teacher only.
    pub async fn add_assignment(
        &self,
        title: &str,
        description: &str,
        due_date: &str,
        topic: &str,
        weight: u32,
        resource_link: &str,
    ) -> bool {
        let Some(user) = self.require_teacher("Only teachers can create assignments") else {
            return false;
        };
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            self.notify("Please fill required fields", Severity::Warning);
            return false;
        }

        let fields = json!({
            "title": title,
            "description": description,
            "dueDate": due_date,
            "topic": topic,
            "weight": weight,
            "resourceLink": resource_link,
            "teacherName": TEACHER_NAME,
            "teacherId": user.uid,
            "appId": APP_ID,
            "status": "active",
            "createdAt": SERVER_TIMESTAMP,
        });
        match self.store.add(COLLECTION_ASSIGNMENTS, fields).await {
            Ok(_) => {
                self.notify("Assignment published successfully! 📚", Severity::Success);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "assignment write failed");
                self.notify("Failed to publish assignment", Severity::Error);
                false
            }
        }
    }

    /// Share a study resource.  Teacher only; the link must point at the
    /// fixed sharing domain.
    pub async fn add_resource(
        &self,
        title: &str,
        description: &str,
        link: &str,
        kind: &str,
        branch: &str,
        difficulty: &str,
    ) -> bool {
        let Some(user) = self.require_teacher("Only teachers can upload resources") else {
            return false;
        };
        let title = title.trim();
        let link = link.trim();
        if title.is_empty() || link.is_empty() {
            self.notify("Title and link are required", Severity::Warning);
            return false;
        }
        if !link.contains(SHARING_DOMAIN) {
            self.notify("Please provide a valid Google Drive link", Severity::Warning);
            return false;
        }

        let fields = json!({
            "title": title,
            "description": description.trim(),
            "link": link,
            "type": kind,
            "branch": branch,
            "difficulty": difficulty,
            "teacherName": TEACHER_NAME,
            "teacherId": user.uid,
            "appId": APP_ID,
            "downloads": 0,
            "createdAt": SERVER_TIMESTAMP,
        });
        match self.store.add(COLLECTION_RESOURCES, fields).await {
            Ok(_) => {
                self.notify("Resource uploaded successfully! 📁", Severity::Success);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "resource write failed");
                self.notify("Failed to upload resource", Severity::Error);
                false
            }
        }
    }

    /// Submit a doubt.  Created pending with no answers; only the teacher's
    /// side of the system moves it past that.
    pub async fn ask_doubt(&self, question: &str, topic: &str, urgency: &str) -> bool {
        let Some(user) = self.require_user() else {
            return false;
        };
        let question = question.trim();
        if question.is_empty() {
            self.notify("Please enter your doubt", Severity::Warning);
            return false;
        }

        let fields = json!({
            "question": question,
            "topic": topic,
            "urgency": urgency,
            "studentId": user.uid,
            "studentName": user.name,
            "studentEmail": user.email,
            "appId": APP_ID,
            "status": "pending",
            "answers": [],
            "createdAt": SERVER_TIMESTAMP,
        });
        match self.store.add(COLLECTION_DOUBTS, fields).await {
            Ok(_) => {
                self.notify("Doubt submitted successfully! 🙋", Severity::Success);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "doubt write failed");
                self.notify("Failed to submit doubt", Severity::Error);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_shared::Role;
    use atrium_store::{Doubt, DocumentStore, MemoryAuth, MemoryStore, Message, Query, Resource};

    use crate::events::test_support::RecordingSink;
    use crate::events::EVENT_NOTIFICATION;

    fn fixture() -> (Arc<Portal>, Arc<MemoryStore>, Arc<RecordingSink>) {
        let store = Arc::new(MemoryStore::new());
        let sink = Arc::new(RecordingSink::new());
        let portal = Portal::new(Arc::new(MemoryAuth::new()), store.clone(), sink.clone());
        (portal, store, sink)
    }

    fn sign_in(portal: &Portal, role: Role) {
        portal.state().current_user = Some(SessionUser {
            uid: "u1".into(),
            name: "Asha".into(),
            email: if role.is_teacher() {
                atrium_shared::constants::TEACHER_EMAIL.into()
            } else {
                "asha@x.com".into()
            },
            role,
        });
    }

    #[tokio::test]
    async fn message_write_carries_identity_and_namespace() {
        let (portal, store, sink) = fixture();
        sign_in(&portal, Role::Student);

        assert!(portal.send_message("  Why does F=ma?  ", "mechanics").await);

        let snapshot = store
            .query(&Query::collection(COLLECTION_COMMUNITY))
            .await
            .unwrap();
        let msg: Message = snapshot.docs[0].decode().unwrap();
        assert_eq!(msg.content, "Why does F=ma?");
        assert_eq!(msg.user_id, "u1");
        assert_eq!(msg.app_id, APP_ID);
        assert!(msg.timestamp.is_some());

        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["severity"], "success");
    }

    #[tokio::test]
    async fn blank_message_warns_and_writes_nothing() {
        let (portal, store, sink) = fixture();
        sign_in(&portal, Role::Student);

        assert!(!portal.send_message("   ", "general").await);
        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["message"], "Please enter a message");
        assert_eq!(toast["severity"], "warning");

        let snapshot = store
            .query(&Query::collection(COLLECTION_COMMUNITY))
            .await
            .unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn students_cannot_publish_assignments() {
        let (portal, store, sink) = fixture();
        sign_in(&portal, Role::Student);

        assert!(
            !portal
                .add_assignment("Set 3", "Solve all", "2026-03-09", "mechanics", 10, "")
                .await
        );
        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["message"], "Only teachers can create assignments");
        assert_eq!(toast["severity"], "warning");

        let snapshot = store
            .query(&Query::collection(COLLECTION_ASSIGNMENTS))
            .await
            .unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn teacher_assignment_is_stamped_active() {
        let (portal, store, sink) = fixture();
        sign_in(&portal, Role::Teacher);

        assert!(
            portal
                .add_assignment("Set 3", "Solve all", "2026-03-09", "mechanics", 10, "")
                .await
        );
        let snapshot = store
            .query(&Query::collection(COLLECTION_ASSIGNMENTS))
            .await
            .unwrap();
        let doc = &snapshot.docs[0];
        assert_eq!(doc.str_field("status"), Some("active"));
        assert_eq!(doc.str_field("teacherName"), Some(TEACHER_NAME));

        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["message"], "Assignment published successfully! 📚");
        assert_eq!(toast["severity"], "success");
    }

    #[tokio::test]
    async fn resource_link_must_point_at_the_sharing_domain() {
        let (portal, store, sink) = fixture();
        sign_in(&portal, Role::Teacher);

        assert!(
            !portal
                .add_resource("Notes", "", "https://example.com/file", "notes", "optics", "beginner")
                .await
        );
        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["message"], "Please provide a valid Google Drive link");

        assert!(
            portal
                .add_resource(
                    "Notes",
                    "",
                    "https://drive.google.com/file/d/ABC/view",
                    "notes",
                    "optics",
                    "beginner",
                )
                .await
        );
        let snapshot = store
            .query(&Query::collection(COLLECTION_RESOURCES))
            .await
            .unwrap();
        let res: Resource = snapshot.docs[0].decode().unwrap();
        assert_eq!(res.kind, "notes");
        assert_eq!(res.downloads, 0);
    }

    #[tokio::test]
    async fn a_new_doubt_starts_pending_with_no_answers() {
        let (portal, store, _sink) = fixture();
        sign_in(&portal, Role::Student);

        assert!(portal.ask_doubt("Why is the sky blue?", "optics", "high").await);

        let snapshot = store
            .query(&Query::collection(COLLECTION_DOUBTS))
            .await
            .unwrap();
        let doubt: Doubt = snapshot.docs[0].decode().unwrap();
        assert_eq!(doubt.status, atrium_shared::DoubtStatus::Pending);
        assert!(doubt.answers.is_empty());
        assert_eq!(doubt.student_id, "u1");
    }

    #[tokio::test]
    async fn writes_without_a_session_are_refused() {
        let (portal, store, _sink) = fixture();

        assert!(!portal.send_message("hi", "general").await);
        assert!(!portal.ask_doubt("why", "optics", "normal").await);

        for collection in [COLLECTION_COMMUNITY, COLLECTION_DOUBTS] {
            let snapshot = store
                .query(&Query::collection(collection))
                .await
                .unwrap();
            assert!(snapshot.is_empty());
        }
    }
}
