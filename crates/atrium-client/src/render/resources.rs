//! Study resource cards with embedded document previews.

use atrium_shared::labels;
use atrium_store::Resource;

use super::{empty_state, escape, escape_attr};

/// Derive the embeddable preview URL for a sharing link.
///
/// `https://drive.google.com/file/d/<id>/view` becomes
/// `https://drive.google.com/file/d/<id>/preview`; any other shape is
/// returned unchanged.
pub fn drive_preview_link(link: &str) -> String {
    if let Some(rest) = link.split("/file/d/").nth(1) {
        let file_id = rest.split('/').next().unwrap_or(rest);
        if !file_id.is_empty() {
            return format!("https://drive.google.com/file/d/{file_id}/preview");
        }
    }
    link.to_string()
}

/// Render one resource card.
pub fn resource_card(resource: &Resource) -> String {
    let embed = drive_preview_link(&resource.link);

    format!(
        r#"<div class="resource-card" data-type="{kind_attr}" data-branch="{branch_attr}">
    <div class="resource-header">
        <h3 class="resource-title"><i class="{icon}"></i> {title}</h3>
        <div class="resource-meta">
            <span class="resource-type">{kind}</span>
            <span class="resource-branch">{branch}</span>
            <span class="resource-difficulty {difficulty_attr}">{difficulty}</span>
        </div>
    </div>
    <div class="resource-body">
        <div class="resource-description">{description}</div>
        <div class="drive-embed">
            <iframe src="{embed}" width="100%" height="400" frameborder="0" allow="autoplay"></iframe>
        </div>
        <a href="{link}" target="_blank" class="drive-link"><i class="fab fa-google-drive"></i> Open in Google Drive</a>
    </div>
</div>"#,
        kind_attr = escape_attr(&resource.kind),
        branch_attr = escape_attr(&resource.branch),
        icon = labels::resource_type_icon(&resource.kind),
        title = escape(&resource.title),
        kind = escape(labels::resource_type_label(&resource.kind)),
        branch = escape(labels::branch_label(&resource.branch)),
        difficulty_attr = escape_attr(&resource.difficulty),
        difficulty = escape(&labels::difficulty_label(&resource.difficulty)),
        description = if resource.description.is_empty() {
            "No description provided.".to_string()
        } else {
            escape(&resource.description)
        },
        embed = escape_attr(&embed),
        link = escape_attr(&resource.link),
    )
}

/// Render the full resource region from one snapshot.
pub fn resource_list(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return empty_state(
            "fa-folder-open",
            "No Resources Available",
            "Check back later for study materials",
        );
    }
    resources.iter().map(resource_card).collect()
}

/// Re-render the region showing only one resource type (`all` shows
/// everything).
pub fn filtered_resource_list(resources: &[Resource], kind: &str) -> String {
    if kind == "all" {
        return resource_list(resources);
    }
    let filtered: Vec<Resource> = resources
        .iter()
        .filter(|r| r.kind == kind)
        .cloned()
        .collect();
    resource_list(&filtered)
}
