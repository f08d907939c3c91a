use serde::{Deserialize, Serialize};

use crate::constants::TEACHER_EMAIL;

/// The role of an authenticated identity.
///
/// There is exactly one teacher: the identity whose email matches
/// [`TEACHER_EMAIL`] byte for byte.  Everyone else is a student.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Derive the role from an email address by exact string match.
    pub fn from_email(email: &str) -> Self {
        if email == TEACHER_EMAIL {
            Role::Teacher
        } else {
            Role::Student
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self, Role::Teacher)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a doubt (student question).
///
/// Only a collaborator outside this client's write path moves a doubt from
/// `Pending` to `Answered`; the client creates them as `Pending` and renders
/// whatever state the store reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoubtStatus {
    Pending,
    Answered,
}

impl DoubtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoubtStatus::Pending => "pending",
            DoubtStatus::Answered => "answered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_email_resolves_to_teacher() {
        assert_eq!(Role::from_email(TEACHER_EMAIL), Role::Teacher);
    }

    #[test]
    fn any_other_email_resolves_to_student() {
        assert_eq!(Role::from_email("a@x.com"), Role::Student);
        assert_eq!(Role::from_email(""), Role::Student);
        // Case differs: not an exact match, so not the teacher.
        assert_eq!(
            Role::from_email(&TEACHER_EMAIL.to_uppercase()),
            Role::Student
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    }
}
