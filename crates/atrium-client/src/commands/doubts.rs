use std::sync::Arc;

use tauri::State;

use crate::portal::Portal;

#[tauri::command]
pub async fn ask_doubt(
    portal: State<'_, Arc<Portal>>,
    question: String,
    topic: String,
    urgency: String,
) -> Result<bool, String> {
    Ok(portal.ask_doubt(&question, &topic, &urgency).await)
}

/// Re-render the doubt region through a named view filter.
#[tauri::command]
pub fn filter_doubts(portal: State<'_, Arc<Portal>>, filter: String) -> String {
    portal.rendered_doubts(&filter)
}
