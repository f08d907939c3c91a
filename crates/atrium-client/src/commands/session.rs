use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::portal::Portal;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_teacher: bool,
}

#[tauri::command]
pub async fn login(
    portal: State<'_, Arc<Portal>>,
    email: String,
    password: String,
) -> Result<bool, String> {
    Ok(portal.login(&email, &password).await)
}

#[tauri::command]
pub async fn register(
    portal: State<'_, Arc<Portal>>,
    name: String,
    email: String,
    password: String,
    branch: String,
) -> Result<bool, String> {
    Ok(portal.register(&name, &email, &password, &branch).await)
}

#[tauri::command]
pub async fn logout(portal: State<'_, Arc<Portal>>) -> Result<(), String> {
    portal.logout().await;
    Ok(())
}

#[tauri::command]
pub fn current_session(portal: State<'_, Arc<Portal>>) -> Option<SessionDto> {
    portal.current_user().map(|u| SessionDto {
        name: u.name,
        email: u.email,
        role: u.role.to_string(),
        is_teacher: u.role.is_teacher(),
    })
}
