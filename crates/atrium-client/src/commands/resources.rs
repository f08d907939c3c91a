use std::sync::Arc;

use tauri::State;

use crate::portal::Portal;

#[tauri::command]
pub async fn add_resource(
    portal: State<'_, Arc<Portal>>,
    title: String,
    description: String,
    link: String,
    kind: String,
    branch: String,
    difficulty: String,
) -> Result<bool, String> {
    Ok(portal
        .add_resource(&title, &description, &link, &kind, &branch, &difficulty)
        .await)
}

/// Re-render the resource region narrowed to one type.
#[tauri::command]
pub fn filter_resources(portal: State<'_, Arc<Portal>>, kind: String) -> String {
    portal.rendered_resources(&kind)
}
