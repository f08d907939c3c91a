//! Online roster cards.

use atrium_store::PresenceRecord;

use super::{empty_state, escape};

/// Render one roster entry.
pub fn student_card(record: &PresenceRecord) -> String {
    let is_teacher = record.role.is_teacher();

    let avatar = if is_teacher {
        "👨‍🏫".to_string()
    } else {
        initials(&record.name)
    };

    format!(
        r#"<div class="student-card">
    <div class="student-avatar">{avatar}</div>
    <div class="student-info">
        <h4>{name}{suffix}</h4>
        <p>{email}</p>
    </div>
    <div class="online-dot"></div>
</div>"#,
        name = escape(&record.name),
        suffix = if is_teacher { " (Professor)" } else { "" },
        email = escape(&record.email),
    )
}

/// Render the roster region: online records only, teacher first, then by
/// name.
pub fn roster_list(records: &[PresenceRecord]) -> String {
    let mut online: Vec<&PresenceRecord> = records.iter().filter(|r| r.is_online).collect();

    if online.is_empty() {
        return empty_state(
            "fa-users-slash",
            "No Students Online",
            "Be the first to join the Physics Club!",
        );
    }

    online.sort_by(|a, b| {
        b.role
            .is_teacher()
            .cmp(&a.role.is_teacher())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    online.iter().map(|r| student_card(r)).collect()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_shared::constants::{APP_ID, TEACHER_EMAIL};
    use atrium_shared::Role;

    fn record(name: &str, role: Role, online: bool) -> PresenceRecord {
        PresenceRecord {
            user_id: name.to_lowercase(),
            name: name.into(),
            email: if role.is_teacher() {
                TEACHER_EMAIL.into()
            } else {
                format!("{}@x.com", name.to_lowercase())
            },
            role,
            is_online: online,
            app_id: APP_ID.into(),
            last_seen: None,
        }
    }

    #[test]
    fn teacher_sorts_first_then_names() {
        let records = vec![
            record("Zoya", Role::Student, true),
            record("Prof", Role::Teacher, true),
            record("Asha", Role::Student, true),
        ];
        let html = roster_list(&records);

        let prof = html.find("Prof (Professor)").unwrap();
        let asha = html.find("Asha").unwrap();
        let zoya = html.find("Zoya").unwrap();
        assert!(prof < asha && asha < zoya);
    }

    #[test]
    fn offline_records_are_not_rendered() {
        let records = vec![
            record("Asha", Role::Student, true),
            record("Zoya", Role::Student, false),
        ];
        let html = roster_list(&records);
        assert!(html.contains("Asha"));
        assert!(!html.contains("Zoya"));
    }

    #[test]
    fn everyone_offline_renders_the_empty_state() {
        let records = vec![record("Asha", Role::Student, false)];
        assert!(roster_list(&records).contains("No Students Online"));
    }

    #[test]
    fn student_initials_come_from_each_word() {
        assert_eq!(initials("Asha Rao"), "AR");
        assert_eq!(initials("asha"), "A");
        assert_eq!(initials(""), "");
    }
}
