//! Pure `record → markup fragment` functions.
//!
//! Rendering is a full repaint: every snapshot rebuilds a whole view region
//! from scratch, so each function here must be deterministic in its input
//! and must never touch application state.  All user-supplied text is
//! HTML-escaped at this boundary.

pub mod assignments;
pub mod doubts;
pub mod formula;
pub mod messages;
pub mod resources;
pub mod roster;

use chrono::{DateTime, Utc};

/// Escape user-supplied text for embedding in a fragment.
pub(crate) fn escape(text: &str) -> String {
    html_escape::encode_safe(text).to_string()
}

/// Escape user-supplied text for embedding in an attribute value.
pub(crate) fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).to_string()
}

/// Clock-only time, e.g. `09:30`.
pub(crate) fn format_time(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Compact date-and-time, e.g. `Mar 1, 09:30`.
pub(crate) fn format_short(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %H:%M").to_string()
}

/// Long-form date, e.g. `Sunday, March 1, 2026`.
pub(crate) fn format_long(ts: &DateTime<Utc>) -> String {
    ts.format("%A, %B %-d, %Y").to_string()
}

/// The fixed fragment a list shows instead of rendering nothing.
pub(crate) fn empty_state(icon: &str, title: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty-state">
    <i class="fas {icon}"></i>
    <h3>{title}</h3>
    <p>{hint}</p>
</div>"#
    )
}
