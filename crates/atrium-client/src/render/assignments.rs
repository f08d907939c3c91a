//! Assignment cards.

use chrono::NaiveDate;

use atrium_shared::labels;
use atrium_store::Assignment;

use super::{empty_state, escape, escape_attr};

/// Render one assignment card.
pub fn assignment_card(assignment: &Assignment) -> String {
    let due = format_due_date(&assignment.due_date);
    let topic = labels::topic_label(&assignment.topic);

    let resources_block = if assignment.resource_link.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="assignment-resources">
        <a href="{link}" target="_blank" class="drive-link"><i class="fab fa-google-drive"></i> Reference Materials</a>
    </div>"#,
            link = escape_attr(&assignment.resource_link),
        )
    };

    format!(
        r#"<div class="assignment-card">
    <div class="assignment-header">
        <h3 class="assignment-title"><i class="fas fa-book"></i> {title}</h3>
        <div class="assignment-meta">
            <span class="assignment-topic">{topic}</span>
            <span class="assignment-due">Due: {due}</span>
            <span class="assignment-weight">{weight}% Weightage</span>
        </div>
    </div>
    <div class="assignment-description">{description}</div>
    {resources_block}
    <div class="assignment-footer">
        <small>Published by: <strong>{teacher}</strong></small>
    </div>
</div>"#,
        title = escape(&assignment.title),
        topic = escape(topic),
        weight = assignment.weight,
        description = escape(&assignment.description),
        teacher = escape(&assignment.teacher_name),
    )
}

/// Render the full assignment region from one snapshot.
pub fn assignment_list(assignments: &[Assignment]) -> String {
    if assignments.is_empty() {
        return empty_state(
            "fa-book-open",
            "No Assignments Yet",
            "Check back later for physics problems",
        );
    }
    assignments.iter().map(assignment_card).collect()
}

/// Due dates arrive as `YYYY-MM-DD` form input; anything else (including
/// the empty string) renders as "No due date".
fn format_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => "No due date".to_string(),
    }
}
