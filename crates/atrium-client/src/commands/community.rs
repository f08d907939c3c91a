use std::sync::Arc;

use tauri::State;

use crate::portal::Portal;

#[tauri::command]
pub async fn send_message(
    portal: State<'_, Arc<Portal>>,
    content: String,
    topic: String,
) -> Result<bool, String> {
    Ok(portal.send_message(&content, &topic).await)
}

/// Re-render the message region narrowed to one topic.
#[tauri::command]
pub fn filter_messages(portal: State<'_, Arc<Portal>>, topic: String) -> String {
    portal.rendered_messages(&topic)
}

/// Formula catalog for the composer's quick-insert helper.
#[tauri::command]
pub fn common_formulas() -> Vec<&'static str> {
    crate::render::formula::COMMON_FORMULAS.to_vec()
}
