use std::sync::Arc;

use tauri::State;

use crate::portal::Portal;

#[tauri::command]
pub async fn add_assignment(
    portal: State<'_, Arc<Portal>>,
    title: String,
    description: String,
    due_date: String,
    topic: String,
    weight: u32,
    resource_link: String,
) -> Result<bool, String> {
    Ok(portal
        .add_assignment(&title, &description, &due_date, &topic, weight, &resource_link)
        .await)
}
