//! Doubt (student question) cards and view filters.

use atrium_shared::{labels, DoubtStatus};
use atrium_store::Doubt;

use super::{empty_state, escape, format_short};

/// Render one doubt card with its answer thread (or a waiting hint).
pub fn doubt_card(doubt: &Doubt) -> String {
    let initial = doubt
        .student_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let asked = doubt
        .created_at
        .as_ref()
        .map(format_short)
        .unwrap_or_default();

    let answers_block = if doubt.answers.is_empty() {
        r#"<div class="no-answer"><i class="fas fa-clock"></i> Waiting for teacher response...</div>"#
            .to_string()
    } else {
        doubt
            .answers
            .iter()
            .map(|answer| {
                let answered = answer
                    .answered_at
                    .as_ref()
                    .map(format_short)
                    .unwrap_or_default();
                format!(
                    r#"<div class="doubt-answer">
        <div class="answer-header"><i class="fas fa-chalkboard-teacher"></i> <strong>{teacher}</strong></div>
        <div class="answer-content">{content}</div>
        <div class="answer-time">Answered on {answered}</div>
    </div>"#,
                    teacher = escape(&answer.teacher_name),
                    content = escape(&answer.answer),
                )
            })
            .collect()
    };

    format!(
        r#"<div class="doubt-item" data-status="{status}" data-urgency="{urgency_attr}">
    <div class="doubt-header">
        <div class="doubt-student">
            <div class="student-avatar">{initial}</div>
            <div class="student-info"><h4>{name}</h4><p>{email}</p></div>
        </div>
        <div class="doubt-meta">
            <span class="doubt-topic">{topic}</span>
            <span class="doubt-urgency {urgency_attr}">{urgency}</span>
            <span class="doubt-time">{asked}</span>
        </div>
    </div>
    <div class="doubt-question">{question}</div>
    {answers_block}
</div>"#,
        status = doubt.status.as_str(),
        urgency_attr = escape(&doubt.urgency),
        name = escape(&doubt.student_name),
        email = escape(&doubt.student_email),
        topic = escape(labels::topic_label(&doubt.topic)),
        urgency = escape(labels::urgency_label(&doubt.urgency)),
        question = escape(&doubt.question),
    )
}

/// Render the full doubt region from one snapshot.
pub fn doubt_list(doubts: &[Doubt]) -> String {
    if doubts.is_empty() {
        return empty_state(
            "fa-question-circle",
            "No Questions Yet",
            "Be the first to ask a physics question!",
        );
    }
    doubts.iter().map(doubt_card).collect()
}

/// The named doubt view filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubtFilter {
    All,
    Unanswered,
    Answered,
    My,
}

impl DoubtFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "unanswered" => Some(Self::Unanswered),
            "answered" => Some(Self::Answered),
            "my" => Some(Self::My),
            _ => None,
        }
    }

    /// Whether a doubt belongs in this view for the given viewer.
    pub fn matches(&self, doubt: &Doubt, viewer_uid: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Unanswered => doubt.status == DoubtStatus::Pending,
            Self::Answered => doubt.status == DoubtStatus::Answered,
            Self::My => viewer_uid.is_some_and(|uid| doubt.student_id == uid),
        }
    }
}

/// Re-render the region through a view filter.
pub fn filtered_doubt_list(doubts: &[Doubt], filter: DoubtFilter, viewer_uid: Option<&str>) -> String {
    let filtered: Vec<Doubt> = doubts
        .iter()
        .filter(|d| filter.matches(d, viewer_uid))
        .cloned()
        .collect();
    doubt_list(&filtered)
}
